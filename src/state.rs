// src/state.rs
use std::sync::Arc;

use crate::services::completion::Completer;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub completer: Arc<dyn Completer>,
}

impl AppState {
    pub fn new(completer: impl Completer + 'static) -> Self {
        Self {
            completer: Arc::new(completer),
        }
    }
}
