//! Inquiry error types.

/// Errors raised while validating or transmitting an inquiry.
#[derive(Debug, thiserror::Error)]
pub enum InquiryError {
    /// Required fields were left empty.
    #[error("missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    /// Email is not shaped like `local@domain`.
    #[error("invalid email address: {0}")]
    InvalidEmail(String),

    /// Project type label not recognised.
    #[error("unknown project type: {0}")]
    UnknownProjectType(String),

    /// HTTP request failed before a response was read.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Transport-level error.
    #[error("transport error: {0}")]
    Transport(String),
}

/// Result type for inquiry operations.
pub type Result<T> = std::result::Result<T, InquiryError>;
