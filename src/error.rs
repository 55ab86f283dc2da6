// src/error.rs
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::message::ReplyBody;

/// Errors returned by the HTTP handlers.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("bad request: {0}")]
    BadRequest(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            // The message is meant for the user, so it travels as the reply.
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ReplyBody::new(msg))).into_response()
            }
        }
    }
}

/// Failures of a front-end request. Only logged, never shown.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request to {path} failed: {source}")]
    Transport {
        path: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("response from {path} is not valid JSON: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Failures talking to the chat-completion provider.
#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("GROQ_API_KEY is not set")]
    MissingApiKey,
    #[error("completion request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("completion provider returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("completion response had no choices")]
    EmptyChoices,
}
