use reqwest::Client as HttpClient;
use serde_json::Value;
use thiserror::Error;

use crate::api::models::{TaskReply, TaskRequest};

/// Shown in place of a reply whenever the request fails for any reason.
pub const FAILURE_TEXT: &str = "Error contacting server.";

const TASK_PATH: &str = "/api/run-browser-task";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("response was not JSON: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("response was JSON null")]
    NullBody,
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    pub http: HttpClient,
    base_url: String,
}

impl ApiClient {
    /// No timeout is set: a request stays pending until the server answers
    /// or the connection drops.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: HttpClient::new(),
            base_url: base_url.into(),
        }
    }

    pub fn task_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), TASK_PATH)
    }

    /// POST the question. The HTTP status is not checked; any JSON body counts.
    pub async fn run_browser_task(&self, question: &str) -> Result<TaskReply, ApiError> {
        let body = TaskRequest::new(question);
        let resp = self.http.post(self.task_url()).json(&body).send().await?;
        let text = resp.text().await?;
        let json: Value = serde_json::from_str(&text)?;
        if json.is_null() {
            return Err(ApiError::NullBody);
        }
        Ok(TaskReply::from_value(&json))
    }

    /// Text to display for the reply, or [`FAILURE_TEXT`].
    pub async fn ask(&self, question: &str) -> String {
        match self.run_browser_task(question).await {
            Ok(reply) => reply.display_text().to_string(),
            Err(err) => {
                log::debug!("run-browser-task failed: {err}");
                FAILURE_TEXT.to_string()
            }
        }
    }
}

/// Display text for a finished `ask` task. A task that died without
/// answering still yields exactly one reply.
pub fn settle_reply(outcome: Result<String, tokio::task::JoinError>) -> String {
    outcome.unwrap_or_else(|_| FAILURE_TEXT.to_string())
}
