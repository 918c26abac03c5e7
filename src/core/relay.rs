//! Transactional email delivery.

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::{Deserialize, Serialize};

use super::email::OutboundEmail;

/// Email delivery errors.
#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    /// API key not configured.
    #[error("API key not configured")]
    ApiKeyMissing,

    /// API key cannot be sent as a header value.
    #[error("API key contains characters not allowed in an HTTP header")]
    InvalidApiKey,

    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Provider rejected the message.
    #[error("email API error ({status}): {message}")]
    Api { status: u16, message: String },
}

/// Receipt for a delivered message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SentEmail {
    pub id: Option<String>,
}

/// Something that can deliver an [`OutboundEmail`].
#[async_trait]
pub trait EmailRelay: Send + Sync {
    fn name(&self) -> &'static str;

    async fn send(&self, email: &OutboundEmail) -> Result<SentEmail, RelayError>;
}

/// Resend transactional email API.
#[derive(Debug, Clone)]
pub struct ResendRelay {
    http: reqwest::Client,
    api_key: String,
    api_url: String,
}

#[derive(Serialize)]
struct SendRequest<'a> {
    from: &'a str,
    to: [&'a str; 1],
    subject: &'a str,
    html: &'a str,
    reply_to: &'a str,
}

#[derive(Deserialize)]
struct ApiErrorBody {
    message: Option<String>,
}

impl ResendRelay {
    /// Create a relay against `api_url` (no trailing `/emails`).
    ///
    /// # Errors
    ///
    /// Returns error if API key is empty.
    pub fn new(api_key: impl Into<String>, api_url: impl Into<String>) -> Result<Self, RelayError> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(RelayError::ApiKeyMissing);
        }

        Ok(Self {
            http: reqwest::Client::new(),
            api_key,
            api_url: api_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/emails", self.api_url)
    }
}

#[async_trait]
impl EmailRelay for ResendRelay {
    fn name(&self) -> &'static str {
        "resend"
    }

    async fn send(&self, email: &OutboundEmail) -> Result<SentEmail, RelayError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", self.api_key))
                .map_err(|_| RelayError::InvalidApiKey)?,
        );

        let request = SendRequest {
            from: &email.from,
            to: [&email.to],
            subject: &email.subject,
            html: &email.html,
            reply_to: &email.reply_to,
        };

        let response = self
            .http
            .post(self.endpoint())
            .headers(headers)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorBody>(&text)
                .ok()
                .and_then(|b| b.message)
                .unwrap_or(text);
            return Err(RelayError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json().await?)
    }
}
