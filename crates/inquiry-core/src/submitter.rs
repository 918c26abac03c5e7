//! One booking form's submission lifecycle.
//!
//! ```text
//! Idle ──begin──▶ Submitting ──complete──▶ Succeeded
//!   ▲                 │
//!   └──── Failed ◀────┘   (editable, begin again to retry)
//! ```
//!
//! `begin` and `complete` are split so an interactive caller can run
//! [`PendingSubmission::send`] on a background task while it keeps drawing.

use std::sync::Arc;

use uuid::Uuid;

use crate::form::{InquiryForm, InquiryPayload};
use crate::status::{SubmissionStatus, reduce};
use crate::transport::InquiryTransport;

/// Drives one form instance through validation and a single remote call.
pub struct InquirySubmitter {
    transport: Arc<dyn InquiryTransport>,
    status: SubmissionStatus,
    in_flight: Option<Uuid>,
}

/// A validated inquiry ready to be posted.
pub struct PendingSubmission {
    attempt: Uuid,
    payload: InquiryPayload,
    transport: Arc<dyn InquiryTransport>,
}

/// Reduced result of one attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub attempt: Uuid,
    pub status: SubmissionStatus,
}

impl PendingSubmission {
    #[must_use]
    pub const fn attempt(&self) -> Uuid {
        self.attempt
    }

    #[must_use]
    pub const fn payload(&self) -> &InquiryPayload {
        &self.payload
    }

    /// Make the remote call and reduce its result.
    pub async fn send(self) -> Outcome {
        let result = self.transport.post(&self.payload).await;

        match &result {
            Ok(reply) => tracing::info!(
                attempt = %self.attempt,
                transport = self.transport.name(),
                status = reply.status,
                "inquiry submitted"
            ),
            Err(e) => tracing::warn!(
                attempt = %self.attempt,
                transport = self.transport.name(),
                error = %e,
                "inquiry submission failed"
            ),
        }

        Outcome {
            attempt: self.attempt,
            status: reduce(&result),
        }
    }
}

impl InquirySubmitter {
    #[must_use]
    pub fn new(transport: Arc<dyn InquiryTransport>) -> Self {
        Self {
            transport,
            status: SubmissionStatus::Idle,
            in_flight: None,
        }
    }

    #[must_use]
    pub const fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    /// Whether the submit trigger is disabled.
    #[must_use]
    pub const fn is_locked(&self) -> bool {
        matches!(
            self.status,
            SubmissionStatus::Submitting | SubmissionStatus::Succeeded
        )
    }

    /// Validate and enter `Submitting`.
    ///
    /// Returns `None` without contacting the transport when the trigger is
    /// locked or a required field is blank. A blank field moves the status to
    /// `Failed` with the validation message.
    pub fn begin(&mut self, form: &InquiryForm) -> Option<PendingSubmission> {
        if self.is_locked() {
            tracing::debug!(status = ?self.status, "submit ignored while locked");
            return None;
        }

        if let Err(e) = form.validate() {
            tracing::debug!(error = %e, "submit blocked by validation");
            self.status = SubmissionStatus::Failed(e.to_string());
            return None;
        }

        let attempt = Uuid::new_v4();
        self.in_flight = Some(attempt);
        self.status = SubmissionStatus::Submitting;

        Some(PendingSubmission {
            attempt,
            payload: form.to_payload(),
            transport: Arc::clone(&self.transport),
        })
    }

    /// Apply an outcome. Outcomes for any attempt other than the one in
    /// flight are dropped; returns whether it was applied.
    pub fn complete(&mut self, outcome: Outcome) -> bool {
        if self.in_flight != Some(outcome.attempt) {
            tracing::debug!(attempt = %outcome.attempt, "discarding stale outcome");
            return false;
        }

        self.in_flight = None;
        self.status = outcome.status;
        true
    }

    /// Validate, post and apply in one go.
    pub async fn submit(&mut self, form: &InquiryForm) -> &SubmissionStatus {
        if let Some(pending) = self.begin(form) {
            let outcome = pending.send().await;
            self.complete(outcome);
        }
        &self.status
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use serde_json::json;

    use super::*;
    use crate::error::{InquiryError, Result};
    use crate::form::ProjectType;
    use crate::status::{FALLBACK_FAILURE, FALLBACK_NETWORK};
    use crate::transport::Reply;

    /// Transport that answers with a fixed reply and counts calls.
    struct Scripted {
        reply: Option<Reply>,
        calls: AtomicUsize,
        seen: Mutex<Vec<InquiryPayload>>,
    }

    impl Scripted {
        fn answering(status: u16, body: Option<serde_json::Value>) -> Arc<Self> {
            Arc::new(Self {
                reply: Some(Reply { status, body }),
                calls: AtomicUsize::new(0),
                seen: Mutex::new(Vec::new()),
            })
        }

        fn unreachable() -> Arc<Self> {
            Arc::new(Self {
                reply: None,
                calls: AtomicUsize::new(0),
                seen: Mutex::new(Vec::new()),
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl InquiryTransport for Scripted {
        fn name(&self) -> &'static str {
            "scripted"
        }

        async fn post(&self, payload: &InquiryPayload) -> Result<Reply> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.seen.lock().unwrap().push(payload.clone());
            self.reply
                .clone()
                .ok_or_else(|| InquiryError::Transport("connection reset".to_string()))
        }
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
    async fn blank_required_field_never_reaches_transport() {
        for blank in ["name", "email", "message"] {
            let transport = Scripted::answering(200, Some(json!({"success": true})));
            let mut submitter = InquirySubmitter::new(transport.clone());
            let mut form = asha();
            match blank {
                "name" => form.name.clear(),
                "email" => form.email.clear(),
                _ => form.message.clear(),
            }

            let status = submitter.submit(&form).await.clone();

            assert_eq!(transport.calls(), 0, "{blank} blank must not post");
            let message = status.error_message().unwrap();
            assert!(message.contains(blank));
        }
    }

    #[tokio::test]
    async fn malformed_email_never_reaches_transport() {
        let transport = Scripted::answering(200, Some(json!({"success": true})));
        let mut submitter = InquirySubmitter::new(transport.clone());
        let form = InquiryForm {
            email: "asha".to_string(),
            ..asha()
        };

        let status = submitter.submit(&form).await.clone();

        assert_eq!(transport.calls(), 0);
        assert_eq!(
            status,
            SubmissionStatus::Failed("invalid email address: asha".to_string())
        );
        assert!(!submitter.is_locked());
    }

    #[tokio::test]
    async fn asha_example_succeeds() {
        let transport = Scripted::answering(200, Some(json!({"success": true, "id": "abc"})));
        let mut submitter = InquirySubmitter::new(transport.clone());

        let status = submitter.submit(&asha()).await;

        assert_eq!(*status, SubmissionStatus::Succeeded);
        assert_eq!(transport.calls(), 1);
        let seen = transport.seen.lock().unwrap();
        assert_eq!(seen[0].project_type(), "Residential");
        assert_eq!(seen[0].message(), "Need a kitchen redesign");
    }

    #[tokio::test]
    async fn server_error_is_surfaced_and_form_untouched() {
        let transport = Scripted::answering(500, Some(json!({"error": "Email service not configured"})));
        let mut submitter = InquirySubmitter::new(transport);
        let form = asha();

        let status = submitter.submit(&form).await.clone();

        assert_eq!(
            status,
            SubmissionStatus::Failed("Email service not configured".to_string())
        );
        assert_eq!(form, asha());
        assert!(!submitter.is_locked());
    }

    #[tokio::test]
    async fn bad_request_without_body_uses_fallback() {
        let transport = Scripted::answering(400, None);
        let mut submitter = InquirySubmitter::new(transport);

        let status = submitter.submit(&asha()).await;

        assert_eq!(status.error_message(), Some(FALLBACK_FAILURE));
    }

    #[tokio::test]
    async fn network_failure_is_a_status_not_a_panic() {
        let transport = Scripted::unreachable();
        let mut submitter = InquirySubmitter::new(transport.clone());

        let status = submitter.submit(&asha()).await;

        assert_eq!(status.error_message(), Some(FALLBACK_NETWORK));
        assert_eq!(transport.calls(), 1);
    }

    #[tokio::test]
    async fn second_begin_while_submitting_is_a_no_op() {
        let transport = Scripted::answering(200, Some(json!({"success": true})));
        let mut submitter = InquirySubmitter::new(transport.clone());

        let first = submitter.begin(&asha()).expect("first begin");
        assert!(submitter.status().is_submitting());
        assert!(submitter.begin(&asha()).is_none());

        let outcome = first.send().await;
        assert!(submitter.complete(outcome));
        assert_eq!(transport.calls(), 1);
        assert!(submitter.status().is_succeeded());
    }

    #[tokio::test]
    async fn failed_attempt_can_be_resubmitted() {
        let transport = Scripted::answering(500, None);
        let mut submitter = InquirySubmitter::new(transport.clone());

        submitter.submit(&asha()).await;
        assert!(submitter.status().error_message().is_some());

        let retry = submitter.begin(&asha());
        assert!(retry.is_some());
        assert!(submitter.status().is_submitting());
    }

    #[tokio::test]
    async fn succeeded_locks_the_form() {
        let transport = Scripted::answering(200, Some(json!({"success": true})));
        let mut submitter = InquirySubmitter::new(transport.clone());

        submitter.submit(&asha()).await;
        assert!(submitter.is_locked());
        assert!(submitter.begin(&asha()).is_none());
        assert_eq!(transport.calls(), 1);
    }

    #[tokio::test]
    async fn stale_outcome_is_discarded() {
        let transport = Scripted::answering(200, Some(json!({"success": true})));
        let mut submitter = InquirySubmitter::new(transport);

        let _pending = submitter.begin(&asha()).unwrap();
        let applied = submitter.complete(Outcome {
            attempt: Uuid::new_v4(),
            status: SubmissionStatus::Succeeded,
        });

        assert!(!applied);
        assert!(submitter.status().is_submitting());
    }
}
