//! Telegram Bot API client.
//!
//! Only the two methods this tool needs: `sendMessage` and `editMessageText`.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{Error, Result};

/// Body of a `sendMessage` call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SendMessageRequest {
    pub chat_id: i64,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<String>,
    pub disable_notification: bool,
    pub disable_web_page_preview: bool,
}

/// Body of an `editMessageText` call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EditMessageTextRequest {
    #[serde(flatten)]
    pub message: SendMessageRequest,
    pub message_id: i64,
}

/// Envelope every Bot API method answers with.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse {
    pub ok: bool,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub error_code: Option<i64>,
    #[serde(default)]
    pub result: Option<MessageResult>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MessageResult {
    pub message_id: i64,
}

impl ApiResponse {
    /// Message id of a successful call, or the API error.
    pub fn into_message_id(self) -> Result<i64> {
        if !self.ok {
            return Err(Error::Api {
                description: self.description.unwrap_or_default(),
                error_code: self.error_code,
            });
        }
        self.result
            .map(|result| result.message_id)
            .ok_or_else(|| Error::Api {
                description: "missing result in response".to_string(),
                error_code: None,
            })
    }
}

/// Bot API client bound to one token.
#[derive(Debug, Clone)]
pub struct BotClient {
    http: Client,
    base_url: String,
    token: String,
}

impl BotClient {
    /// Create a client for `base_url` (e.g. `https://api.telegram.org`).
    pub fn new(base_url: &str, token: &str, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        })
    }

    /// Full URL of a Bot API method.
    pub fn method_url(&self, method: &str) -> String {
        format!("{}/bot{}/{}", self.base_url, self.token, method)
    }

    /// Send a new message, returning its id.
    pub async fn send_message(&self, request: &SendMessageRequest) -> Result<i64> {
        self.call("sendMessage", request).await
    }

    /// Replace the text of an existing message, returning its id.
    pub async fn edit_message_text(&self, request: &EditMessageTextRequest) -> Result<i64> {
        self.call("editMessageText", request).await
    }

    async fn call<T: Serialize>(&self, method: &str, request: &T) -> Result<i64> {
        let body = serde_json::to_string(request)?;
        debug!("json: {}", body);

        let url = self.method_url(method);
        debug!("url: {}", url);

        let response = self
            .http
            .post(&url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        debug!("resp.StatusCode: {}", response.status().as_u16());

        // Error statuses still carry the JSON envelope with a description.
        let api_response: ApiResponse = response.json().await?;
        api_response.into_message_id()
    }
}
