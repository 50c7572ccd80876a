//! HTTP client with retry and backoff
//!
//! Transport collaborator for the sync engine. Owns the retry policy:
//! transient failures (timeouts, connect errors, retryable 5xx, 429) are
//! retried with bounded backoff; everything else is surfaced immediately.

mod client;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder, RequestConfig};
