//! Transports that carry an inquiry to the relay endpoint.

use std::time::Duration;

use async_trait::async_trait;

use crate::error::Result;
use crate::form::InquiryPayload;

/// Raw answer from the endpoint: status code and JSON body if it parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub status: u16,
    pub body: Option<serde_json::Value>,
}

impl Reply {
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Something that can post an inquiry and report what came back.
///
/// `Err` means no response was obtained; any response, whatever its status,
/// is `Ok`.
#[async_trait]
pub trait InquiryTransport: Send + Sync {
    /// Short name for logs.
    fn name(&self) -> &'static str;

    /// Make exactly one attempt.
    async fn post(&self, payload: &InquiryPayload) -> Result<Reply>;
}

/// Posts JSON to the relay endpoint over HTTP.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: reqwest::Client,
    endpoint: String,
}

impl HttpTransport {
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl InquiryTransport for HttpTransport {
    fn name(&self) -> &'static str {
        "http"
    }

    async fn post(&self, payload: &InquiryPayload) -> Result<Reply> {
        let response = self.http.post(&self.endpoint).json(payload).send().await?;

        let status = response.status().as_u16();
        let bytes = response.bytes().await?;
        let body = serde_json::from_slice(&bytes).ok();

        tracing::debug!(endpoint = %self.endpoint, status, "relay answered");

        Ok(Reply { status, body })
    }
}

/// Local stand-in for the relay used while developing the brochure.
///
/// Logs the payload, waits, then answers as a successful relay would.
#[derive(Debug, Clone)]
pub struct SimulatedTransport {
    delay: Duration,
}

impl SimulatedTransport {
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SimulatedTransport {
    fn default() -> Self {
        Self::new(Duration::from_millis(1500))
    }
}

#[async_trait]
impl InquiryTransport for SimulatedTransport {
    fn name(&self) -> &'static str {
        "simulated"
    }

    async fn post(&self, payload: &InquiryPayload) -> Result<Reply> {
        tracing::info!(?payload, "simulated submission");
        tokio::time::sleep(self.delay).await;

        Ok(Reply {
            status: 200,
            body: Some(serde_json::json!({
                "success": true,
                "message": "Consultation request simulated",
            })),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::InquiryForm;

    #[test]
    fn reply_success_range() {
        let reply = |status| Reply { status, body: None };
        assert!(reply(200).is_success());
        assert!(reply(204).is_success());
        assert!(!reply(199).is_success());
        assert!(!reply(400).is_success());
        assert!(!reply(500).is_success());
    }

    #[tokio::test]
    async fn simulated_transport_answers_success() {
        let transport = SimulatedTransport::new(Duration::from_millis(1));
        let reply = transport
            .post(&InquiryForm::default().to_payload())
            .await
            .unwrap();
        assert_eq!(reply.status, 200);
        assert_eq!(reply.body.unwrap()["success"], true);
    }

    #[tokio::test]
    async fn http_transport_reports_unreachable_endpoint_as_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let transport = HttpTransport::new(format!("http://{addr}/api/send-consultation"));
        let result = transport.post(&InquiryForm::default().to_payload()).await;
        assert!(result.is_err());
    }
}
