use axum::{Json, extract::State};
use tracing::{error, info};

use crate::{
    error::AppError,
    message::{AskRequest, NotesRequest, ReplyBody, trimmed},
    services::prompts::{
        QUIZ_SYSTEM, SUMMARIZER_SYSTEM, TUTOR_SYSTEM, ask_prompt, quiz_prompt, summary_prompt,
    },
    state::SharedState,
};

pub const APOLOGY: &str = "Sorry, I couldn't talk to the AI. \
Check your API key, internet connection, and try again.";

pub async fn ask_handler(
    State(state): State<SharedState>,
    Json(payload): Json<AskRequest>,
) -> Result<Json<ReplyBody>, AppError> {
    let question = trimmed(&payload.message);
    let extra = trimmed(&payload.extra);

    if question.is_empty() {
        return Err(AppError::BadRequest("Please type a question first 😊".to_string()));
    }

    info!(has_extra = !extra.is_empty(), "ask");
    Ok(complete(&state, TUTOR_SYSTEM, &ask_prompt(question, extra)).await)
}

pub async fn summarize_handler(
    State(state): State<SharedState>,
    Json(payload): Json<NotesRequest>,
) -> Result<Json<ReplyBody>, AppError> {
    let notes = trimmed(&payload.notes);
    if notes.is_empty() {
        return Err(AppError::BadRequest("Paste some notes to summarize first 😄".to_string()));
    }

    info!(notes_len = notes.len(), "summarize");
    Ok(complete(&state, SUMMARIZER_SYSTEM, &summary_prompt(notes)).await)
}

pub async fn quiz_handler(
    State(state): State<SharedState>,
    Json(payload): Json<NotesRequest>,
) -> Result<Json<ReplyBody>, AppError> {
    let notes = trimmed(&payload.notes);
    if notes.is_empty() {
        return Err(AppError::BadRequest(
            "Paste notes or a topic to generate a quiz 😊".to_string(),
        ));
    }

    info!(notes_len = notes.len(), "quiz");
    Ok(complete(&state, QUIZ_SYSTEM, &quiz_prompt(notes)).await)
}

// Provider failures still answer 200 with an apology the page can show.
async fn complete(state: &SharedState, system: &str, user: &str) -> Json<ReplyBody> {
    match state.completer.complete(system, user).await {
        Ok(reply) => Json(ReplyBody::new(reply)),
        Err(e) => {
            error!("completion failed: {e}");
            Json(ReplyBody::new(APOLOGY))
        }
    }
}
