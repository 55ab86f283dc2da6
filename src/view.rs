// src/view.rs
//! The document the dispatcher reads its inputs from and renders into.

use std::collections::HashMap;
use std::io::Write;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::render::html_to_text;

/// Id of the output region every action renders into.
pub const ANSWER_BOX_ID: &str = "answerBox";

/// Input fields an action can read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Question,
    Extra,
    Notes,
}

impl Field {
    /// Stable element id in the host page.
    pub fn element_id(self) -> &'static str {
        match self {
            Field::Question => "questionInput",
            Field::Extra => "extraInput",
            Field::Notes => "notesInput",
        }
    }
}

pub trait View: Send + Sync {
    /// Current raw value of an input. Missing inputs read as empty.
    fn value(&self, field: Field) -> String;

    /// Replace the answer box contents with already-rendered markup.
    fn render(&self, html: &str);
}

#[derive(Debug, Default)]
struct Document {
    inputs: HashMap<Field, String>,
    answer_html: String,
    renders: Vec<String>,
}

/// In-memory document, shareable across tasks.
#[derive(Debug, Clone, Default)]
pub struct MemoryView {
    inner: Arc<Mutex<Document>>,
}

impl MemoryView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_input(self, field: Field, value: impl Into<String>) -> Self {
        self.set_input(field, value);
        self
    }

    pub fn set_input(&self, field: Field, value: impl Into<String>) {
        self.lock().inputs.insert(field, value.into());
    }

    /// Inner HTML of the answer box.
    pub fn answer_html(&self) -> String {
        self.lock().answer_html.clone()
    }

    /// Every markup string rendered so far, oldest first.
    pub fn renders(&self) -> Vec<String> {
        self.lock().renders.clone()
    }

    fn lock(&self) -> MutexGuard<'_, Document> {
        // a poisoned lock still guards a consistent document
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl View for MemoryView {
    fn value(&self, field: Field) -> String {
        self.lock().inputs.get(&field).cloned().unwrap_or_default()
    }

    fn render(&self, html: &str) {
        let mut doc = self.lock();
        doc.answer_html = html.to_string();
        doc.renders.push(html.to_string());
    }
}

/// View backed by command-line arguments that prints each render to stdout.
#[derive(Debug, Clone, Default)]
pub struct TerminalView {
    question: String,
    extra: String,
    notes: String,
}

impl TerminalView {
    pub fn ask(question: impl Into<String>, extra: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            extra: extra.into(),
            ..Self::default()
        }
    }

    pub fn notes(notes: impl Into<String>) -> Self {
        Self {
            notes: notes.into(),
            ..Self::default()
        }
    }
}

impl View for TerminalView {
    fn value(&self, field: Field) -> String {
        match field {
            Field::Question => self.question.clone(),
            Field::Extra => self.extra.clone(),
            Field::Notes => self.notes.clone(),
        }
    }

    fn render(&self, html: &str) {
        let mut out = std::io::stdout().lock();
        if let Err(e) = writeln!(out, "{}", html_to_text(html)) {
            tracing::warn!("failed to write to stdout: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_view_tracks_renders() {
        let view = MemoryView::new().with_input(Field::Notes, "photosynthesis");
        assert_eq!(view.value(Field::Notes), "photosynthesis");
        assert_eq!(view.value(Field::Question), "");

        view.render("one");
        view.render("two");
        assert_eq!(view.answer_html(), "two");
        assert_eq!(view.renders(), vec!["one", "two"]);
    }

    #[test]
    fn terminal_view_reads_its_arguments() {
        let view = TerminalView::ask("what is DNA?", "chapter 3");
        assert_eq!(view.value(Field::Question), "what is DNA?");
        assert_eq!(view.value(Field::Extra), "chapter 3");
        assert_eq!(view.value(Field::Notes), "");
    }

    #[test]
    fn element_ids_are_stable() {
        assert_eq!(Field::Question.element_id(), "questionInput");
        assert_eq!(Field::Extra.element_id(), "extraInput");
        assert_eq!(Field::Notes.element_id(), "notesInput");
    }
}
