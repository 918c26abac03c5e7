//! Consultation inquiry contract shared by the Nirvana brochure and relay.
//!
//! The brochure fills an [`InquiryForm`], hands it to an [`InquirySubmitter`],
//! and the submitter posts an [`InquiryPayload`] through an
//! [`InquiryTransport`]. The relay endpoint deserializes the same payload and
//! answers with [`RelaySuccess`] or [`RelayFailure`].

pub mod error;
pub mod form;
pub mod status;
pub mod submitter;
pub mod transport;
pub mod wire;

pub use error::{InquiryError, Result};
pub use form::{InquiryForm, InquiryPayload, ProjectType};
pub use status::{FALLBACK_FAILURE, FALLBACK_NETWORK, SubmissionStatus, reduce};
pub use submitter::{InquirySubmitter, Outcome, PendingSubmission};
pub use transport::{HttpTransport, InquiryTransport, Reply, SimulatedTransport};
pub use wire::{RelayFailure, RelaySuccess};
