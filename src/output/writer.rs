//! Message writer implementation

use crate::engine::{LogLevel, Message};
use crate::error::{Error, Result};
use serde_json::json;
use std::io::Write;

/// Writes engine messages as NDJSON to any `Write` sink
pub struct MessageWriter<W: Write> {
    sink: W,
    /// Number of data messages written (logs excluded)
    written: usize,
}

impl<W: Write> MessageWriter<W> {
    /// Create a writer over a sink
    pub fn new(sink: W) -> Self {
        Self { sink, written: 0 }
    }

    /// Number of data messages written so far
    pub fn written(&self) -> usize {
        self.written
    }

    /// Write a single message.
    ///
    /// `Schema` and `Record` messages become one NDJSON line each. `Log`
    /// messages are forwarded to `tracing` and produce no output line.
    pub fn write_message(&mut self, message: &Message) -> Result<()> {
        let line = match message {
            Message::Schema {
                stream,
                schema,
                key_properties,
            } => json!({
                "type": "SCHEMA",
                "stream": stream,
                "schema": schema,
                "key_properties": key_properties,
            }),
            Message::Record { stream, record } => json!({
                "type": "RECORD",
                "stream": stream,
                "record": record,
            }),
            Message::Log { level, message } => {
                match level {
                    LogLevel::Debug => tracing::debug!("{message}"),
                    LogLevel::Info => tracing::info!("{message}"),
                    LogLevel::Warn => tracing::warn!("{message}"),
                }
                return Ok(());
            }
        };

        serde_json::to_writer(&mut self.sink, &line)?;
        self.sink
            .write_all(b"\n")
            .map_err(|e| Error::output(format!("Failed to write message: {e}")))?;
        self.written += 1;
        Ok(())
    }

    /// Write a batch of messages in order
    pub fn write_all(&mut self, messages: &[Message]) -> Result<()> {
        for message in messages {
            self.write_message(message)?;
        }
        Ok(())
    }

    /// Flush the underlying sink
    pub fn flush(&mut self) -> Result<()> {
        self.sink
            .flush()
            .map_err(|e| Error::output(format!("Failed to flush output: {e}")))
    }
}
