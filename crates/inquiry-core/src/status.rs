//! Submission status and the reply reducer.

use crate::error::Result;
use crate::transport::Reply;

/// Shown when the endpoint fails without an `error` string.
pub const FALLBACK_FAILURE: &str = "Failed to send consultation request";

/// Shown when no usable response arrived at all.
pub const FALLBACK_NETWORK: &str = "Something went wrong. Please try again or email us directly.";

/// Where a booking form stands with respect to the relay.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    /// Failed with a user-facing message; the form stays editable.
    Failed(String),
}

impl SubmissionStatus {
    #[must_use]
    pub const fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    #[must_use]
    pub const fn is_succeeded(&self) -> bool {
        matches!(self, Self::Succeeded)
    }

    /// Inline error message, if the last attempt failed.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Reduce the outcome of one remote call to a status.
#[must_use]
pub fn reduce(result: &Result<Reply>) -> SubmissionStatus {
    let reply = match result {
        Ok(reply) => reply,
        Err(_) => return SubmissionStatus::Failed(FALLBACK_NETWORK.to_string()),
    };

    if reply.is_success() {
        return if reply.body.is_some() {
            SubmissionStatus::Succeeded
        } else {
            SubmissionStatus::Failed(FALLBACK_NETWORK.to_string())
        };
    }

    let message = reply
        .body
        .as_ref()
        .and_then(|body| body.get("error"))
        .and_then(serde_json::Value::as_str)
        .filter(|e| !e.is_empty())
        .unwrap_or(FALLBACK_FAILURE);

    SubmissionStatus::Failed(message.to_string())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::error::InquiryError;

    fn reply(status: u16, body: Option<serde_json::Value>) -> Result<Reply> {
        Ok(Reply { status, body })
    }

    #[test]
    fn ok_with_json_body_succeeds() {
        let status = reduce(&reply(200, Some(json!({"success": true, "id": "abc"}))));
        assert_eq!(status, SubmissionStatus::Succeeded);
    }

    #[test]
    fn ok_without_json_body_fails() {
        let status = reduce(&reply(200, None));
        assert_eq!(status.error_message(), Some(FALLBACK_NETWORK));
    }

    #[test]
    fn server_error_string_is_surfaced_verbatim() {
        let status = reduce(&reply(400, Some(json!({"error": "Missing required fields"}))));
        assert_eq!(status.error_message(), Some("Missing required fields"));

        let status = reduce(&reply(
            500,
            Some(json!({"error": "Failed to send email", "details": "boom"})),
        ));
        assert_eq!(status.error_message(), Some("Failed to send email"));
    }

    #[test]
    fn failure_without_error_string_uses_fallback() {
        assert_eq!(
            reduce(&reply(502, None)).error_message(),
            Some(FALLBACK_FAILURE)
        );
        assert_eq!(
            reduce(&reply(500, Some(json!({"error": 42})))).error_message(),
            Some(FALLBACK_FAILURE)
        );
    }

    #[test]
    fn transport_error_uses_network_fallback() {
        let status = reduce(&Err(InquiryError::Transport("connection refused".to_string())));
        assert_eq!(status.error_message(), Some(FALLBACK_NETWORK));
    }
}
