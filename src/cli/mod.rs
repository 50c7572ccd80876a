//! Command-line interface
//!
//! Subcommands follow the usual connector protocol: `spec` prints the
//! configuration schema, `check` verifies credentials against the API,
//! `discover` prints the stream catalog, and `read` syncs records as NDJSON.

mod commands;
mod runner;

pub use commands::{Cli, Commands};
pub use runner::Runner;
