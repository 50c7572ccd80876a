//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// HiBob employee-data connector CLI
#[derive(Parser, Debug)]
#[command(name = "hibob-connector")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (JSON)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Test connection to the API
    Check {
        /// Inline config JSON
        #[arg(long)]
        config_json: Option<String>,
    },

    /// Discover available streams
    Discover {
        /// Inline config JSON
        #[arg(long)]
        config_json: Option<String>,
    },

    /// Read data from streams
    Read {
        /// Streams to sync (comma-separated, empty = all)
        #[arg(long)]
        streams: Option<String>,

        /// Inline config JSON
        #[arg(long)]
        config_json: Option<String>,

        /// Output file for NDJSON messages (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Maximum records per stream
        #[arg(long)]
        max_records: Option<usize>,
    },

    /// Show the connector configuration specification
    Spec,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_read_command() {
        let cli = Cli::parse_from([
            "hibob-connector",
            "-C",
            "config.json",
            "read",
            "--streams",
            "employees",
            "--max-records",
            "100",
        ]);
        assert_eq!(cli.config.unwrap().to_str(), Some("config.json"));
        let Commands::Read {
            streams,
            max_records,
            ..
        } = cli.command
        else {
            panic!("expected read command");
        };
        assert_eq!(streams.as_deref(), Some("employees"));
        assert_eq!(max_records, Some(100));
    }

    #[test]
    fn test_parse_check_with_inline_config() {
        let cli = Cli::parse_from([
            "hibob-connector",
            "check",
            "--config-json",
            r#"{"authorization": "abc"}"#,
        ]);
        let Commands::Check { config_json } = cli.command else {
            panic!("expected check command");
        };
        assert!(config_json.unwrap().contains("authorization"));
    }

    #[test]
    fn test_parse_spec() {
        let cli = Cli::parse_from(["hibob-connector", "spec"]);
        assert!(matches!(cli.command, Commands::Spec));
    }
}
