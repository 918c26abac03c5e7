//! Response bodies returned by the relay endpoint.

use serde::{Deserialize, Serialize};

/// Body of a 200 response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct RelaySuccess {
    pub success: bool,
    /// Provider-assigned id of the relayed email.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub message: String,
}

impl RelaySuccess {
    #[must_use]
    pub fn sent(id: Option<String>) -> Self {
        Self {
            success: true,
            id,
            message: "Consultation request sent successfully".to_string(),
        }
    }
}

/// Body of a 4xx/5xx response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct RelayFailure {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl RelayFailure {
    #[must_use]
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    #[must_use]
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_omits_missing_id() {
        let json = serde_json::to_string(&RelaySuccess::sent(None)).unwrap();
        assert!(json.contains(r#""success":true"#));
        assert!(!json.contains(r#""id""#));
    }

    #[test]
    fn failure_carries_details_when_set() {
        let json = serde_json::to_value(RelayFailure::new("Failed to send email").with_details("timeout"))
            .unwrap();
        assert_eq!(json["error"], "Failed to send email");
        assert_eq!(json["details"], "timeout");
    }
}
