//! # HiBob Connector
//!
//! Extracts employee records from the HiBob HR API and emits them as
//! structured, schema-conformant NDJSON messages for downstream ingestion.
//!
//! The interesting part of the crate is the [`projection`] module: a single
//! data-driven engine that prunes arbitrarily nested API responses down to a
//! fixed allow-list of fields at every nesting level. Everything else —
//! transport, auth, pagination, schema declaration — is deliberately thin
//! plumbing around it.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use hibob_connector::catalog::Catalog;
//! use hibob_connector::config::Settings;
//! use hibob_connector::engine::SyncEngine;
//! use hibob_connector::http::HttpClient;
//!
//! #[tokio::main]
//! async fn main() -> hibob_connector::Result<()> {
//!     let settings = Settings::from_json(r#"{"authorization": "..."}"#)?;
//!     let catalog = Catalog::hibob();
//!     let client = HttpClient::for_settings(&settings);
//!
//!     let mut engine = SyncEngine::new(client);
//!     let messages = engine
//!         .sync_stream(&settings.api_url, catalog.get("employees")?)
//!         .await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! Catalog ──▶ StreamDefinition (allow-list, schema, request shape)
//!                   │
//!                   ▼
//! SyncEngine ──▶ request::build_request ──▶ HttpClient (retry/backoff, auth)
//!      │                                         │
//!      │◀──────── JsonDecoder (records) ◀────────┘
//!      │
//!      ├──▶ projection::project (allow-list pruning, per record)
//!      └──▶ Message stream ──▶ output::MessageWriter (NDJSON)
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

/// Error types for the connector
pub mod error;

/// Common types and type aliases
pub mod types;

/// Runtime configuration (credentials, base URL)
pub mod config;

/// Credential injection
pub mod auth;

/// HTTP client with retry and backoff
pub mod http;

/// Outbound request construction
pub mod request;

/// Response decoding and record extraction
pub mod decode;

/// Pagination strategies
pub mod pagination;

/// Field projection engine (allow-list pruning)
pub mod projection;

/// Output schema declaration
pub mod schema;

/// Stream catalog and schema registry
pub mod catalog;

/// Sync engine (page iteration and record emission)
pub mod engine;

/// NDJSON message output
pub mod output;

/// Command-line interface
pub mod cli;

pub use error::{Error, Result};
pub use types::*;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
