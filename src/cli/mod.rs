//! Command-line interface
//!
//! Singer taps are invoked with either discovery mode (emit the catalog)
//! or sync mode (emit schemas and records, optionally filtered by a
//! catalog manifest).

mod commands;
mod runner;

pub use commands::{Cli, Commands};
pub use runner::Runner;
