//! NDJSON message output
//!
//! Serializes engine messages as newline-delimited JSON on a `Write` sink,
//! one message per line. Data messages (`SCHEMA`, `RECORD`) go to the sink;
//! log messages are routed to `tracing` so the data stream stays clean for
//! downstream consumers.

mod writer;

pub use writer::MessageWriter;

#[cfg(test)]
mod tests;
