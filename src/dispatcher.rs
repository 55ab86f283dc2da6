// src/dispatcher.rs
//! Front-end actions: read inputs, show a working status, call the backend,
//! render the outcome.

use std::sync::{Mutex, MutexGuard};

use serde_json::json;
use tracing::{debug, error, info, warn};

use crate::client::StudyClient;
use crate::render::reply_html;
use crate::view::{ANSWER_BOX_ID, Field, View};

pub const CONNECTION_ERROR: &str = "❌ Error connecting to server.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Ask,
    Summarize,
    Quiz,
}

impl Action {
    pub fn path(self) -> &'static str {
        match self {
            Action::Ask => "/ask",
            Action::Summarize => "/summarize",
            Action::Quiz => "/quiz",
        }
    }

    /// The input that must be non-empty for the request to be sent.
    pub fn primary_field(self) -> Field {
        match self {
            Action::Ask => Field::Question,
            Action::Summarize | Action::Quiz => Field::Notes,
        }
    }

    pub fn working_message(self) -> &'static str {
        match self {
            Action::Ask => "Thinking... 🔄",
            Action::Summarize => "Summarizing... ✨",
            Action::Quiz => "Generating quiz... 🧠",
        }
    }

    pub fn guidance_message(self) -> &'static str {
        match self {
            Action::Ask => "Please type a question first 😊",
            Action::Summarize => "Paste some notes to summarize 📝",
            Action::Quiz => "Paste notes or a topic to generate a quiz 😊",
        }
    }

    pub fn fallback_message(self) -> &'static str {
        match self {
            Action::Ask => "No answer received.",
            Action::Summarize => "No summary received.",
            Action::Quiz => "No quiz received.",
        }
    }
}

/// What a single action ended up doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Primary input was empty; guidance shown, nothing sent.
    Guidance,
    /// The backend's reply was rendered.
    Reply(String),
    /// The response carried no usable reply.
    Fallback,
    /// Transport or decode failure; the connection error was rendered.
    Failed,
    /// A newer action started while this one was in flight, so its result
    /// was dropped.
    Superseded,
}

/// Binds the ask/summarize/quiz actions of one view to the backend.
///
/// A dispatcher can be shared across tasks. Starting an action and rendering
/// a result both happen under one lock, so only the most recently started
/// action can render its outcome.
pub struct RequestDispatcher<V> {
    view: V,
    client: StudyClient,
    generation: Mutex<u64>,
}

impl<V: View> RequestDispatcher<V> {
    pub fn new(view: V, client: StudyClient) -> Self {
        Self {
            view,
            client,
            generation: Mutex::new(0),
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub async fn ask(&self) -> Outcome {
        self.dispatch(Action::Ask).await
    }

    pub async fn summarize(&self) -> Outcome {
        self.dispatch(Action::Summarize).await
    }

    pub async fn quiz(&self) -> Outcome {
        self.dispatch(Action::Quiz).await
    }

    pub async fn dispatch(&self, action: Action) -> Outcome {
        let primary = self.read(action.primary_field());
        let body = match action {
            Action::Ask => json!({ "message": primary, "extra": self.read(Field::Extra) }),
            Action::Summarize | Action::Quiz => json!({ "notes": primary }),
        };

        let generation = {
            let mut current = self.lock_generation();
            *current += 1;
            if primary.is_empty() {
                self.show(action.guidance_message());
                return Outcome::Guidance;
            }
            self.show(action.working_message());
            *current
        };

        let result = self.client.post_json(action.path(), &body).await;

        let (text, outcome) = match result {
            Ok((status, body)) => {
                if !status.is_success() {
                    warn!(path = action.path(), %status, "backend returned an error status");
                }
                match body.text() {
                    Some(reply) => (reply.clone(), Outcome::Reply(reply)),
                    None => (action.fallback_message().to_string(), Outcome::Fallback),
                }
            }
            Err(e) => {
                error!("{e}");
                (CONNECTION_ERROR.to_string(), Outcome::Failed)
            }
        };

        let current = self.lock_generation();
        if *current != generation {
            info!(path = action.path(), "dropping stale response");
            return Outcome::Superseded;
        }
        self.show(&text);
        outcome
    }

    fn lock_generation(&self) -> MutexGuard<'_, u64> {
        self.generation.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn read(&self, field: Field) -> String {
        let value = self.view.value(field).trim().to_string();
        debug!(input = field.element_id(), len = value.len(), "read input");
        value
    }

    fn show(&self, text: &str) {
        debug!(target_id = ANSWER_BOX_ID, "render");
        self.view.render(&reply_html(text));
    }
}
