//! Chat proxy client: talks to the study-coach proxy over HTTP.
//!
//! The proxy owns the language-model integration and the fixed system
//! preamble; this client only submits a bounded transcript (or one image
//! plus a prompt) and hands back plain text. Failures surface as
//! [`ServiceError`] display strings, never as panics.

use reqwest::multipart;
use serde::{Deserialize, Serialize};

use crate::error::ServiceError;
use crate::storage::config::ProxyConfig;

/// Reply used when the service answers 2xx with an empty text body.
pub const EMPTY_REPLY_PLACEHOLDER: &str = "Sorry, I had trouble answering that.";

/// Who said a transcript turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One turn of the conversation sent to the proxy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// Wire shape of proxy replies: `{text}` on success, `{error}` on failure.
#[derive(Debug, Deserialize)]
struct ChatReply {
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// Proxy `/health` response.
#[derive(Debug, Clone, Deserialize)]
pub struct HealthStatus {
    pub ok: bool,
    #[serde(default, rename = "hasKey")]
    pub has_key: bool,
    #[serde(default)]
    pub model: Option<String>,
}

pub struct ChatClient {
    http: reqwest::Client,
    base_url: String,
    max_transcript_turns: usize,
}

impl ChatClient {
    /// Build a client from proxy settings.
    ///
    /// # Errors
    ///
    /// Returns a [`ServiceError`] if the underlying HTTP client cannot be
    /// constructed.
    pub fn new(config: &ProxyConfig) -> Result<Self, ServiceError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ServiceError::Http(e.to_string()))?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            max_transcript_turns: config.max_transcript_turns.max(1),
        })
    }

    /// Submit a conversation transcript, truncated to the most recent
    /// turns, and return the assistant's reply text.
    pub async fn send_text(&self, transcript: &[ChatMessage]) -> Result<String, ServiceError> {
        let window_start = transcript.len().saturating_sub(self.max_transcript_turns);
        let body = serde_json::json!({ "messages": &transcript[window_start..] });
        let resp = self
            .http
            .post(format!("{}/api/chat", self.base_url))
            .json(&body)
            .send()
            .await?;
        Self::reply_text(resp).await
    }

    /// Submit one image plus a text prompt as a multipart request.
    pub async fn send_image(
        &self,
        image: Vec<u8>,
        mime: &str,
        prompt: &str,
    ) -> Result<String, ServiceError> {
        let part = multipart::Part::bytes(image)
            .file_name("attachment")
            .mime_str(mime)
            .map_err(|e| ServiceError::Http(e.to_string()))?;
        let form = multipart::Form::new()
            .part("image", part)
            .text("prompt", prompt.to_string());
        let resp = self
            .http
            .post(format!("{}/api/chat-image", self.base_url))
            .multipart(form)
            .send()
            .await?;
        Self::reply_text(resp).await
    }

    /// Proxy liveness and configuration probe.
    pub async fn health(&self) -> Result<HealthStatus, ServiceError> {
        let resp = self
            .http
            .get(format!("{}/health", self.base_url))
            .send()
            .await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(ServiceError::Status {
                code: status.as_u16(),
                reason: format!("HTTP {status}"),
            });
        }
        resp.json().await.map_err(|_| ServiceError::MissingBody)
    }

    /// Shared reply handling: non-2xx carries `{error}` as the reason,
    /// 2xx with empty text degrades to the fallback placeholder.
    async fn reply_text(resp: reqwest::Response) -> Result<String, ServiceError> {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        let reply: Option<ChatReply> = serde_json::from_str(&body).ok();
        if !status.is_success() {
            let reason = reply
                .and_then(|r| r.error)
                .filter(|e| !e.is_empty())
                .unwrap_or_else(|| {
                    if body.is_empty() {
                        format!("HTTP {status}")
                    } else {
                        body.clone()
                    }
                });
            return Err(ServiceError::Status {
                code: status.as_u16(),
                reason,
            });
        }
        let Some(reply) = reply else {
            return Err(ServiceError::MissingBody);
        };
        match reply.text {
            Some(text) if !text.trim().is_empty() => Ok(text),
            _ => Ok(EMPTY_REPLY_PLACEHOLDER.to_string()),
        }
    }
}
