//! Sync engine
//!
//! The page iterator: drives successive requests for one stream, extracts
//! raw records from each response, projects every record through the
//! stream's allow-list, and emits the results in response order.
//!
//! One page is outstanding at a time. The upstream API defines the
//! pagination sequence, so there is nothing to gain from concurrent
//! fetches; sequential requests are the simplest correct design and keep
//! record order deterministic.

mod types;

pub use types::{LogLevel, Message, SyncConfig, SyncStats};

use crate::catalog::StreamDefinition;
use crate::decode::{JsonDecoder, RecordDecoder};
use crate::error::{Error, Result};
use crate::http::HttpClient;
use crate::pagination::{NextPage, PaginationState};
use crate::projection::project;
use crate::request::build_request;
use std::time::Instant;

/// Sync engine for orchestrating data extraction
pub struct SyncEngine {
    /// HTTP client
    client: HttpClient,
    /// Sync configuration
    config: SyncConfig,
    /// Statistics
    stats: SyncStats,
}

impl SyncEngine {
    /// Create a new sync engine
    pub fn new(client: HttpClient) -> Self {
        Self {
            client,
            config: SyncConfig::default(),
            stats: SyncStats::default(),
        }
    }

    /// Set sync configuration
    #[must_use]
    pub fn with_config(mut self, config: SyncConfig) -> Self {
        self.config = config;
        self
    }

    /// Get statistics
    pub fn stats(&self) -> &SyncStats {
        &self.stats
    }

    /// Reset statistics
    pub fn reset_stats(&mut self) {
        self.stats = SyncStats::default();
    }

    /// Sync a single stream to completion.
    ///
    /// Emits the stream's schema followed by one `Record` message per
    /// projected record, in response order. Any transport or decode error
    /// aborts the stream; there are no partial-success semantics.
    pub async fn sync_stream(
        &mut self,
        base_url: &str,
        stream: &StreamDefinition,
    ) -> Result<Vec<Message>> {
        let start = Instant::now();
        let mut messages = Vec::new();
        let stream_name = stream.name.as_str();

        messages.push(Message::info(format!(
            "Starting sync for stream: {stream_name}"
        )));
        messages.push(Message::schema(
            stream_name,
            stream.schema.to_value(),
            stream.primary_key.clone(),
        ));

        let decoder = JsonDecoder::with_path(&stream.record_path);
        let paginator = stream.pagination.build();
        let mut pagination_state = PaginationState::new();

        let mut emitted = 0usize;
        let mut page_count = 0usize;

        loop {
            let page_params = paginator.initial_params(&pagination_state);
            let request = build_request(base_url, stream, &page_params)?;

            let response = self.client.execute(&request).await?;
            page_count += 1;
            self.stats.add_page();

            let body_text = response
                .text()
                .await
                .map_err(|e| Error::decode(format!("Failed to read response body: {e}")))?;
            let body_json = decoder.decode_raw(&body_text)?;
            let records = decoder.decode(&body_text)?;
            let record_count = records.len();

            messages.push(Message::debug(format!(
                "Page {page_count}: fetched {record_count} records"
            )));

            for raw in &records {
                messages.push(Message::record(stream_name, project(&stream.allow_list, raw)));
                emitted += 1;
                self.stats.add_records(1);

                if self.config.max_records > 0 && emitted >= self.config.max_records {
                    break;
                }
            }

            if self.config.max_records > 0 && emitted >= self.config.max_records {
                break;
            }

            // An empty page ends the stream even if a token is present.
            if record_count == 0 {
                break;
            }

            let next_page =
                paginator.process_response(&body_json, record_count, &mut pagination_state);
            match next_page {
                NextPage::Continue { .. } => {}
                NextPage::Done => break,
            }
        }

        self.stats.add_stream();
        let duration = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
        self.stats.set_duration(duration);

        messages.push(Message::info(format!(
            "Completed sync for {stream_name}: {emitted} records in {page_count} pages"
        )));

        Ok(messages)
    }
}
