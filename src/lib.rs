//! Nirvana Interiors studio brochure and consultation relay.
//!
//! This library provides:
//! - a terminal brochure (home, service pages, booking form)
//! - the consultation relay HTTP endpoint
//! - CLI command parsing
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐  ┌─────────────┐  ┌─────────────┐
//! │     CLI     │  │     TUI     │  │  Relay API  │
//! └──────┬──────┘  └──────┬──────┘  └──────┬──────┘
//!        │                │  POST inquiry  │
//!        │                └───────────────▶│
//!        └────────────────┬────────────────┘
//!                  ┌──────┴──────┐
//!                  │    Core     │  view selector, content, email
//!                  └──────┬──────┘
//!                  ┌──────┴──────┐
//!                  │inquiry-core │  form, submitter, wire contract
//!                  └─────────────┘
//! ```

pub mod api;
pub mod build_info;
pub mod cli;
pub mod config;
pub mod core;
pub mod tui;

pub use config::Config;
pub use core::{ServiceKind, ViewSelector, ViewState};
