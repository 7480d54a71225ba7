use crate::client::{CliClientResult, ClientError};

use reqwest::{Client as ReqwestClient, Method};
use serde::Deserialize;
use serde_json::{Value, json};

/// Poll record as served by the API (camelCase wire fields).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PollSnapshot {
    pub id: String,
    pub title: String,
    pub options: Vec<OptionSnapshot>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OptionSnapshot {
    pub text: String,
    pub votes: i64,
}

impl PollSnapshot {
    pub fn total_votes(&self) -> i64 {
        self.options.iter().map(|o| o.votes).sum()
    }
}

/// HTTP client for the poll-server REST API
pub struct Client {
    pub base_url: String,
    client: ReqwestClient,
}

impl Client {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Server URL (e.g., "http://127.0.0.1:3000")
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: ReqwestClient::new(),
        }
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.request(method, &url)
    }

    /// Execute a request; non-2xx responses become `ClientError::Api` with
    /// the envelope's message.
    async fn execute(&self, req: reqwest::RequestBuilder) -> CliClientResult<Value> {
        let response = req.send().await?;
        let status = response.status();
        let body: Value = response.json().await?;

        if !status.is_success() {
            let message = body
                .get("message")
                .and_then(|v| v.as_str())
                .unwrap_or("Unknown error")
                .to_string();
            return Err(ClientError::api_error(status.as_u16(), message));
        }

        Ok(body)
    }

    // =========================================================================
    // Poll Operations
    // =========================================================================

    /// List the most recent polls (bare array, newest first)
    pub async fn list_polls(&self) -> CliClientResult<Vec<PollSnapshot>> {
        let body = self.execute(self.request(Method::GET, "/api/polls")).await?;
        Ok(serde_json::from_value(body)?)
    }

    /// Get a poll by ID
    pub async fn get_poll(&self, id: &str) -> CliClientResult<PollSnapshot> {
        let body = self
            .execute(self.request(Method::GET, &format!("/api/polls/{}", id)))
            .await?;
        Ok(serde_json::from_value(body)?)
    }

    /// Create a new poll; returns the created record from the envelope
    pub async fn create_poll(
        &self,
        title: &str,
        options: &[String],
    ) -> CliClientResult<PollSnapshot> {
        let req = self
            .request(Method::POST, "/api/polls")
            .json(&json!({ "title": title, "options": options }));
        let body = self.execute(req).await?;
        poll_from_envelope(body)
    }

    /// Vote for one option; returns the server's updated record
    pub async fn vote(&self, id: &str, option_index: i64) -> CliClientResult<PollSnapshot> {
        let req = self
            .request(Method::POST, &format!("/api/polls/{}/vote", id))
            .json(&json!({ "optionIndex": option_index }));
        let body = self.execute(req).await?;
        poll_from_envelope(body)
    }

    /// Delete a poll; returns the confirmation message
    pub async fn delete_poll(&self, id: &str) -> CliClientResult<String> {
        let body = self
            .execute(self.request(Method::DELETE, &format!("/api/polls/{}", id)))
            .await?;
        Ok(body
            .get("message")
            .and_then(|v| v.as_str())
            .unwrap_or("Poll deleted")
            .to_string())
    }
}

fn poll_from_envelope(body: Value) -> CliClientResult<PollSnapshot> {
    let poll = body
        .get("poll")
        .cloned()
        .ok_or_else(|| ClientError::unexpected_body("missing 'poll' field in response"))?;
    Ok(serde_json::from_value(poll)?)
}
