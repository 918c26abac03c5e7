//! One-shot consultation request from the command line.

use inquiry_core::{InquiryForm, InquirySubmitter, SubmissionStatus};

use super::InquireArgs;
use crate::config::Config;

impl InquireArgs {
    #[must_use]
    pub fn to_form(&self) -> InquiryForm {
        InquiryForm {
            name: self.name.clone(),
            email: self.email.clone(),
            project_type: self.project_type,
            budget: self.budget.clone(),
            message: self.message.clone(),
        }
    }
}

/// Submit the inquiry once and return the final status.
pub async fn run(args: &InquireArgs, config: &Config) -> SubmissionStatus {
    let mut client = config.client.clone();
    if let Some(endpoint) = &args.endpoint {
        client.endpoint.clone_from(endpoint);
    }

    let transport = client.transport(args.simulate);
    tracing::info!(transport = transport.name(), endpoint = %client.endpoint, "sending inquiry");

    let mut submitter = InquirySubmitter::new(transport);
    submitter.submit(&args.to_form()).await.clone()
}

#[cfg(test)]
mod tests {
    use inquiry_core::ProjectType;

    use super::*;

    fn args() -> InquireArgs {
        InquireArgs {
            name: "Asha".to_string(),
            email: "asha@x.com".to_string(),
            project_type: ProjectType::Commercial,
            budget: "₹5L - ₹50L+".to_string(),
            message: "Need a kitchen redesign".to_string(),
            endpoint: None,
            simulate: true,
        }
    }

    #[test]
    fn args_map_onto_form() {
        let form = args().to_form();
        assert_eq!(form.project_type, ProjectType::Commercial);
        assert_eq!(form.budget, "₹5L - ₹50L+");
        assert!(form.validate().is_ok());
    }

    #[tokio::test]
    async fn simulated_run_succeeds() {
        let mut config = Config::default();
        config.client.simulate_delay_ms = 1;

        assert_eq!(run(&args(), &config).await, SubmissionStatus::Succeeded);
    }

    #[tokio::test]
    async fn blank_message_fails_locally() {
        let mut config = Config::default();
        config.client.simulate_delay_ms = 1;
        let args = InquireArgs {
            message: " ".to_string(),
            ..args()
        };

        let status = run(&args, &config).await;
        assert_eq!(
            status.error_message(),
            Some("missing required fields: message")
        );
    }
}
