//! Brochure and relay logic shared by the CLI, TUI and HTTP API.

pub mod content;
pub mod email;
pub mod relay;
pub mod view;

pub use email::{OutboundEmail, compose};
pub use relay::{EmailRelay, RelayError, ResendRelay, SentEmail};
pub use view::{Frame, ServiceKind, ViewSelector, ViewState};
