//! End-to-end tests: the booking submitter posting to a locally bound relay.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use inquiry_core::{
    FALLBACK_NETWORK, HttpTransport, InquiryForm, InquirySubmitter, ProjectType, SubmissionStatus,
};

use nirvana_studio::api::{AppState, CONSULTATION_PATH, router};
use nirvana_studio::config::Environment;
use nirvana_studio::core::{EmailRelay, OutboundEmail, RelayError, SentEmail};

/// Relay that keeps what it was asked to send.
#[derive(Default)]
struct Outbox {
    sent: Mutex<Vec<OutboundEmail>>,
}

#[async_trait]
impl EmailRelay for Outbox {
    fn name(&self) -> &'static str {
        "outbox"
    }

    async fn send(&self, email: &OutboundEmail) -> Result<SentEmail, RelayError> {
        self.sent.lock().unwrap().push(email.clone());
        Ok(SentEmail {
            id: Some("abc".to_string()),
        })
    }
}

/// Relay whose provider always refuses.
struct Refusing;

#[async_trait]
impl EmailRelay for Refusing {
    fn name(&self) -> &'static str {
        "refusing"
    }

    async fn send(&self, _email: &OutboundEmail) -> Result<SentEmail, RelayError> {
        Err(RelayError::Api {
            status: 422,
            message: "invalid from address".to_string(),
        })
    }
}

/// Bind the endpoint on an ephemeral port and return its URL.
async fn spawn_relay(relay: Option<Arc<dyn EmailRelay>>) -> String {
    let state = Arc::new(AppState {
        relay,
        sender: "Nirvana Interiors <inquiries@nirvanainteriors.studio>".to_string(),
        recipient: "studio@example.com".to_string(),
        environment: Environment::Development,
    });

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router(state)).await.unwrap();
    });

    format!("http://{addr}{CONSULTATION_PATH}")
}

fn asha() -> InquiryForm {
    InquiryForm {
        name: "Asha".to_string(),
        email: "asha@x.com".to_string(),
        project_type: ProjectType::Residential,
        budget: String::new(),
        message: "Need a kitchen redesign".to_string(),
    }
}

#[tokio::test]
async fn inquiry_reaches_the_studio_inbox() {
    let outbox = Arc::new(Outbox::default());
    let endpoint = spawn_relay(Some(outbox.clone())).await;
    let mut submitter = InquirySubmitter::new(Arc::new(HttpTransport::new(endpoint)));

    let status = submitter.submit(&asha()).await.clone();
    assert_eq!(status, SubmissionStatus::Succeeded);

    let sent = outbox.sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].subject, "New Residential Project Inquiry from Asha");
    assert_eq!(sent[0].reply_to, "asha@x.com");
    assert_eq!(sent[0].to, "studio@example.com");
    assert!(sent[0].html.contains("Need a kitchen redesign"));
    assert!(sent[0].html.contains("Not specified"));
}

#[tokio::test]
async fn resubmitting_sends_a_second_email() {
    let outbox = Arc::new(Outbox::default());
    let endpoint = spawn_relay(Some(outbox.clone())).await;
    let transport = Arc::new(HttpTransport::new(endpoint));

    // Two form instances, same content: no deduplication
    for _ in 0..2 {
        let mut submitter = InquirySubmitter::new(transport.clone());
        assert!(submitter.submit(&asha()).await.is_succeeded());
    }

    assert_eq!(outbox.sent.lock().unwrap().len(), 2);
}

#[tokio::test]
async fn missing_credential_surfaces_the_server_error() {
    let endpoint = spawn_relay(None).await;
    let mut submitter = InquirySubmitter::new(Arc::new(HttpTransport::new(endpoint)));

    let status = submitter.submit(&asha()).await.clone();
    assert_eq!(
        status,
        SubmissionStatus::Failed("Email service not configured".to_string())
    );
    assert!(!submitter.is_locked());
}

#[tokio::test]
async fn provider_failure_surfaces_the_server_error() {
    let endpoint = spawn_relay(Some(Arc::new(Refusing))).await;
    let mut submitter = InquirySubmitter::new(Arc::new(HttpTransport::new(endpoint)));

    let status = submitter.submit(&asha()).await.clone();
    assert_eq!(
        status,
        SubmissionStatus::Failed("Failed to send email".to_string())
    );
}

#[tokio::test]
async fn server_rejects_blank_fields_the_client_would_block() {
    let endpoint = spawn_relay(Some(Arc::new(Outbox::default()))).await;

    // Bypass client validation to check the server's own guard
    let response = reqwest::Client::new()
        .post(&endpoint)
        .json(&serde_json::json!({ "name": "Asha", "email": "", "type": "Other" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 400);
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .unwrap(),
        "*"
    );
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Missing required fields");
}

#[tokio::test]
async fn unreachable_endpoint_uses_the_network_fallback() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let transport = HttpTransport::new(format!("http://{addr}{CONSULTATION_PATH}"));
    let mut submitter = InquirySubmitter::new(Arc::new(transport));

    let status = submitter.submit(&asha()).await.clone();
    assert_eq!(status.error_message(), Some(FALLBACK_NETWORK));
}
