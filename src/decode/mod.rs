//! Response decoding and record extraction
//!
//! Parses response bodies and pulls individual raw records out of them.
//! A body that is not valid JSON, or that lacks the stream's record array,
//! is a fatal extraction error — retrying the same request would return the
//! same malformed payload.

mod decoders;

pub use decoders::JsonDecoder;

use crate::error::Result;
use crate::types::JsonValue;

/// Trait for decoding response bodies into records
pub trait RecordDecoder: Send + Sync {
    /// Decode the response body into a list of raw records
    fn decode(&self, body: &str) -> Result<Vec<JsonValue>>;

    /// Decode the response body into a single JSON value (full response)
    fn decode_raw(&self, body: &str) -> Result<JsonValue>;
}
