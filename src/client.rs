// src/client.rs
use reqwest::{Client, StatusCode};
use serde::Serialize;

use crate::error::ClientError;
use crate::message::ReplyBody;

/// HTTP client for the study-buddy backend.
#[derive(Debug, Clone)]
pub struct StudyClient {
    client: Client,
    base_url: String,
}

impl StudyClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// POST `body` as JSON to `path` and decode the reply.
    ///
    /// The status code is returned rather than checked: the backend puts a
    /// usable `reply` in its 400 responses too.
    pub async fn post_json<B>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(StatusCode, ReplyBody), ClientError>
    where
        B: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url, path);
        let transport = |source| ClientError::Transport {
            path: path.to_string(),
            source,
        };

        let resp = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(transport)?;
        let status = resp.status();
        let bytes = resp.bytes().await.map_err(transport)?;

        let reply = serde_json::from_slice(&bytes).map_err(|source| ClientError::Decode {
            path: path.to_string(),
            source,
        })?;
        Ok((status, reply))
    }
}
