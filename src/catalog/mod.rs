//! Stream catalog and schema registry
//!
//! Declares, for each stream, its endpoint, primary key, request shape,
//! pagination, allow-list tree, and output schema. The catalog is built
//! explicitly at startup and is immutable afterwards; nothing in the sync
//! path registers or mutates streams.

pub mod employees;

use crate::error::{Error, Result};
use crate::pagination::PaginationConfig;
use crate::projection::AllowList;
use crate::request::RequestShape;
use crate::schema::StreamSchema;
use crate::types::SyncMode;

/// Definition of one logical record stream
#[derive(Debug, Clone)]
pub struct StreamDefinition {
    /// Stream name, tags every emitted record
    pub name: String,
    /// API endpoint path, appended to the base URL
    pub path: String,
    /// Primary key field(s) of the output records
    pub primary_key: Vec<String>,
    /// Replication strategy
    pub sync_mode: SyncMode,
    /// JSONPath to the record array inside the response body
    pub record_path: String,
    /// Outbound request shape
    pub request: RequestShape,
    /// Pagination behavior
    pub pagination: PaginationConfig,
    /// Allow-list tree applied to every raw record
    pub allow_list: AllowList,
    /// Output schema for projected records
    pub schema: StreamSchema,
    /// Dotted field paths for server-side field selection
    pub field_selection: Vec<String>,
}

/// The set of streams this connector replicates
#[derive(Debug, Clone)]
pub struct Catalog {
    streams: Vec<StreamDefinition>,
}

impl Catalog {
    /// Build the HiBob catalog
    pub fn hibob() -> Self {
        Self {
            streams: vec![employees::definition()],
        }
    }

    /// Build a catalog from explicit stream definitions (tests)
    pub fn from_streams(streams: Vec<StreamDefinition>) -> Self {
        Self { streams }
    }

    /// Look up a stream by name
    pub fn get(&self, name: &str) -> Result<&StreamDefinition> {
        self.streams
            .iter()
            .find(|s| s.name == name)
            .ok_or_else(|| Error::stream_not_found(name))
    }

    /// All declared streams
    pub fn streams(&self) -> &[StreamDefinition] {
        &self.streams
    }

    /// Names of all declared streams
    pub fn stream_names(&self) -> Vec<&str> {
        self.streams.iter().map(|s| s.name.as_str()).collect()
    }
}

#[cfg(test)]
mod tests;
