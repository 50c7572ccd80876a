//! CLI runner - executes commands

use crate::catalog::Catalog;
use crate::cli::commands::{Cli, Commands};
use crate::config::Settings;
use crate::engine::{SyncConfig, SyncEngine};
use crate::error::{Error, Result};
use crate::http::HttpClient;
use crate::output::MessageWriter;
use crate::request::build_request;
use serde_json::json;
use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Check { config_json } => self.check(config_json.as_deref()).await,
            Commands::Discover { config_json } => self.discover(config_json.as_deref()),
            Commands::Read {
                streams,
                config_json,
                output,
                max_records,
            } => {
                self.read(
                    streams.as_deref(),
                    config_json.as_deref(),
                    output.as_deref(),
                    *max_records,
                )
                .await
            }
            Commands::Spec => Self::spec(),
        }
    }

    /// Load settings, inline JSON taking precedence over the config file
    fn load_settings(&self, inline: Option<&str>) -> Result<Settings> {
        if let Some(json_str) = inline {
            return Settings::from_json(json_str);
        }
        if let Some(path) = &self.cli.config {
            return Settings::from_file(path);
        }
        Err(Error::config(
            "No configuration provided (use -C or --config-json)",
        ))
    }

    /// Check connection by issuing the employees request
    async fn check(&self, config_json: Option<&str>) -> Result<()> {
        let settings = self.load_settings(config_json)?;
        let catalog = Catalog::hibob();
        let stream = catalog.get("employees")?;

        tracing::info!("Checking connection to {}", settings.api_url);

        let client = HttpClient::for_settings(&settings);
        let request = build_request(&settings.api_url, stream, &HashMap::new())?;

        match client.execute(&request).await {
            Ok(_) => {
                Self::print_json(&json!({
                    "type": "CONNECTION_STATUS",
                    "connectionStatus": {
                        "status": "SUCCEEDED",
                        "message": "Connection successful"
                    }
                }));
            }
            Err(e) => {
                Self::print_json(&json!({
                    "type": "CONNECTION_STATUS",
                    "connectionStatus": {
                        "status": "FAILED",
                        "message": format!("Connection failed: {e}")
                    }
                }));
            }
        }

        Ok(())
    }

    /// Print the stream catalog
    fn discover(&self, config_json: Option<&str>) -> Result<()> {
        // Config is validated if supplied, but the catalog itself is static.
        if config_json.is_some() || self.cli.config.is_some() {
            self.load_settings(config_json)?;
        }

        let catalog = Catalog::hibob();
        let streams: Vec<_> = catalog
            .streams()
            .iter()
            .map(|stream| {
                json!({
                    "name": stream.name,
                    "json_schema": stream.schema.to_value(),
                    "supported_sync_modes": ["full_refresh"],
                    "source_defined_primary_key": stream
                        .primary_key
                        .iter()
                        .map(|k| vec![k.clone()])
                        .collect::<Vec<_>>(),
                })
            })
            .collect();

        Self::print_json(&json!({
            "type": "CATALOG",
            "catalog": { "streams": streams }
        }));

        Ok(())
    }

    /// Sync streams and write NDJSON messages
    async fn read(
        &self,
        streams: Option<&str>,
        config_json: Option<&str>,
        output: Option<&Path>,
        max_records: Option<usize>,
    ) -> Result<()> {
        let settings = self.load_settings(config_json)?;
        let catalog = Catalog::hibob();

        let stream_filter: Option<Vec<&str>> = streams.map(|s| s.split(',').collect());

        let mut sync_config = SyncConfig::new();
        if let Some(max) = max_records {
            sync_config = sync_config.with_max_records(max);
        }

        let client = HttpClient::for_settings(&settings);
        let mut engine = SyncEngine::new(client).with_config(sync_config);

        let sink: Box<dyn Write> = match output {
            Some(path) => {
                let file = File::create(path).map_err(|e| {
                    Error::output(format!("Failed to create {}: {e}", path.display()))
                })?;
                Box::new(BufWriter::new(file))
            }
            None => Box::new(io::stdout().lock()),
        };
        let mut writer = MessageWriter::new(sink);

        for stream in catalog.streams() {
            if let Some(ref filter) = stream_filter {
                if !filter.contains(&stream.name.as_str()) {
                    continue;
                }
            }

            let messages = engine.sync_stream(&settings.api_url, stream).await?;
            writer.write_all(&messages)?;
        }
        writer.flush()?;

        let stats = engine.stats();
        tracing::info!(
            "Sync complete: {} records across {} streams ({} pages)",
            stats.records_synced,
            stats.streams_synced,
            stats.pages_fetched
        );

        Ok(())
    }

    /// Print the configuration specification
    fn spec() -> Result<()> {
        Self::print_json(&json!({
            "type": "SPEC",
            "spec": {
                "connectionSpecification": Settings::spec()
            }
        }));
        Ok(())
    }

    /// Print a protocol message to stdout
    fn print_json(value: &serde_json::Value) {
        println!("{}", serde_json::to_string(value).unwrap_or_default());
    }
}
