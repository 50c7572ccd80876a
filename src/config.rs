//! Runtime configuration
//!
//! Connector settings supplied by the operator: credentials, optional start
//! date, and the API base URL. Loaded from a JSON file or inline JSON and
//! validated up front — a missing credential or unparseable URL is fatal
//! before any request is made.

use crate::error::{Error, Result};
use crate::types::JsonValue;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default HiBob API base URL
pub const DEFAULT_API_URL: &str = "https://api.hibob.com";

/// Connector settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Pre-encoded service-user credential, sent as `Authorization: Basic <token>`
    pub authorization: String,

    /// The earliest record date to sync. Accepted for forward compatibility;
    /// the people endpoint has no server-side date filter, so this is not
    /// applied anywhere yet.
    #[serde(default)]
    pub start_date: Option<DateTime<Utc>>,

    /// Base URL for the API service
    #[serde(default = "default_api_url")]
    pub api_url: String,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

impl Settings {
    /// Deserialize and validate settings from a JSON value
    pub fn from_value(value: &JsonValue) -> Result<Self> {
        if value.get("authorization").is_none() {
            return Err(Error::missing_field("authorization"));
        }
        let settings: Settings = serde_json::from_value(value.clone())
            .map_err(|e| Error::config(format!("Invalid config: {e}")))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Parse and validate settings from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let value: JsonValue = serde_json::from_str(json)
            .map_err(|e| Error::config(format!("Invalid config JSON: {e}")))?;
        Self::from_value(&value)
    }

    /// Load and validate settings from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            Error::config(format!("Failed to read config file {}: {e}", path.display()))
        })?;
        Self::from_json(&content)
    }

    /// Validate field values
    fn validate(&self) -> Result<()> {
        if self.authorization.trim().is_empty() {
            return Err(Error::invalid_value("authorization", "must not be empty"));
        }
        url::Url::parse(&self.api_url)
            .map_err(|e| Error::invalid_value("api_url", format!("not a valid URL: {e}")))?;
        Ok(())
    }

    /// The configuration specification, as a JSON schema
    pub fn spec() -> JsonValue {
        serde_json::json!({
            "type": "object",
            "required": ["authorization"],
            "properties": {
                "authorization": {
                    "type": "string",
                    "secret": true,
                    "description": "Service-user credential for the HiBob API"
                },
                "start_date": {
                    "type": "string",
                    "format": "date-time",
                    "description": "The earliest record date to sync"
                },
                "api_url": {
                    "type": "string",
                    "default": DEFAULT_API_URL,
                    "description": "The url for the API service"
                }
            }
        })
    }
}
