//! Inquiry form model and its wire payload.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{InquiryError, Result};

/// Kind of project a prospective client is asking about.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, utoipa::ToSchema,
)]
pub enum ProjectType {
    #[default]
    Residential,
    Commercial,
    #[serde(rename = "Bespoke Art")]
    BespokeArt,
    Other,
}

impl ProjectType {
    /// Options in the order the form presents them.
    pub const ALL: [Self; 4] = [
        Self::Residential,
        Self::Commercial,
        Self::BespokeArt,
        Self::Other,
    ];

    /// Label sent on the wire and shown in the form.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Residential => "Residential",
            Self::Commercial => "Commercial",
            Self::BespokeArt => "Bespoke Art",
            Self::Other => "Other",
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|p| *p == self).unwrap_or(0)
    }

    /// Next option, wrapping around.
    #[must_use]
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous option, wrapping around.
    #[must_use]
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ProjectType {
    type Err = InquiryError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().replace(['-', '_'], " ");
        Self::ALL
            .into_iter()
            .find(|p| p.label().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| InquiryError::UnknownProjectType(s.to_string()))
    }
}

/// A prospective client's project request as entered in the booking form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InquiryForm {
    pub name: String,
    pub email: String,
    pub project_type: ProjectType,
    /// Free text, optional.
    pub budget: String,
    pub message: String,
}

impl InquiryForm {
    /// Names of the required fields that are blank, in form order.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("name", &self.name),
            ("email", &self.email),
            ("message", &self.message),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect()
    }

    /// Check the required fields, then the shape of the email address.
    pub fn validate(&self) -> Result<()> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(InquiryError::MissingFields(missing));
        }
        if !is_email_shaped(&self.email) {
            return Err(InquiryError::InvalidEmail(self.email.trim().to_string()));
        }
        Ok(())
    }

    /// Build the body posted to the relay endpoint.
    #[must_use]
    pub fn to_payload(&self) -> InquiryPayload {
        InquiryPayload {
            name: Some(self.name.clone()),
            email: Some(self.email.clone()),
            project_type: Some(self.project_type.label().to_string()),
            budget: Some(self.budget.clone()),
            message: Some(self.message.clone()),
        }
    }
}

/// One `@` with text on both sides and no whitespace.
fn is_email_shaped(email: &str) -> bool {
    let email = email.trim();
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !email.contains(char::is_whitespace)
        }
        None => false,
    }
}

/// JSON body of a consultation request.
///
/// Every field is optional on the wire so the relay can answer a missing field
/// with its own 400 instead of a deserialization rejection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(default)]
pub struct InquiryPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Declared project type label.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub project_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

fn is_blank(value: Option<&String>) -> bool {
    value.is_none_or(|v| v.trim().is_empty())
}

impl InquiryPayload {
    /// Whether any of name, email or message is absent or blank.
    #[must_use]
    pub fn is_missing_required(&self) -> bool {
        is_blank(self.name.as_ref()) || is_blank(self.email.as_ref()) || is_blank(self.message.as_ref())
    }

    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub fn email(&self) -> &str {
        self.email.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub fn project_type(&self) -> &str {
        self.project_type.as_deref().unwrap_or_default()
    }

    /// Budget, or `None` when absent or empty.
    #[must_use]
    pub fn budget(&self) -> Option<&str> {
        self.budget.as_deref().filter(|b| !b.is_empty())
    }

    #[must_use]
    pub fn message(&self) -> &str {
        self.message.as_deref().unwrap_or_default()
    }
}
