//! # tap-oncall
//!
//! A Rust-native Singer tap for an on-call/incident-management API.
//!
//! The tap extracts entity streams (incidents, users, severities, ...) and
//! emits them as Singer messages on stdout: a SCHEMA announcement per
//! stream followed by one RECORD message per extracted record. A catalog
//! manifest selects which streams, and which of their top-level fields,
//! are included.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                         Engine                             │
//! │   discover() → Catalog       sync(catalog) → messages      │
//! └────────────────────────────────────────────────────────────┘
//!          │               │                │
//! ┌────────┴─────┐ ┌───────┴───────┐ ┌──────┴────────┐
//! │   Registry   │ │  FieldFilter  │ │    Emitter    │
//! │ name→Stream  │ │ prunes schema │ │ JSON lines on │
//! │              │ │  and records  │ │    stdout     │
//! └──────────────┘ └───────────────┘ └───────────────┘
//! ```
//!
//! Streams pull their records from the source API through the
//! [`client::ApiClient`] trait, one cursor-paginated page at a time, fully
//! materializing the record set before field selection runs.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

/// Error types for the tap
pub mod error;

/// Common types and type aliases
pub mod types;

/// Tap configuration
pub mod config;

/// Schema model
pub mod schema;

/// Entity schemas
pub mod model;

/// API client boundary
pub mod client;

/// Stream abstraction, registry and field filter
pub mod stream;

/// Metadata and catalog model
pub mod catalog;

/// Output protocol emitter
pub mod output;

/// Orchestration of discovery and sync
pub mod engine;

/// Command-line interface
pub mod cli;

pub use error::{Error, Result};
pub use types::*;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
