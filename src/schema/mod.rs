//! Output schema declaration
//!
//! JSON-schema-style type declarations for stream output. Schemas are
//! static: the catalog declares them once, the CLI prints them on
//! `discover`, and the engine emits them ahead of records. There is no
//! runtime inference.

mod types;

pub use types::{JsonType, SchemaProperty, StreamSchema};

#[cfg(test)]
mod tests;
