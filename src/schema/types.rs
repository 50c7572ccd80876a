//! Schema types

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// JSON Schema type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JsonType {
    String,
    Number,
    Integer,
    Boolean,
    Object,
    Array,
    Null,
}

impl std::fmt::Display for JsonType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JsonType::String => write!(f, "string"),
            JsonType::Number => write!(f, "number"),
            JsonType::Integer => write!(f, "integer"),
            JsonType::Boolean => write!(f, "boolean"),
            JsonType::Object => write!(f, "object"),
            JsonType::Array => write!(f, "array"),
            JsonType::Null => write!(f, "null"),
        }
    }
}

/// JSON Schema property definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaProperty {
    /// Property type
    #[serde(rename = "type")]
    pub json_type: JsonType,

    /// Format hint (e.g., "date-time")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    /// Description (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Nested properties (for objects)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<BTreeMap<String, SchemaProperty>>,
}

impl SchemaProperty {
    fn scalar(json_type: JsonType) -> Self {
        Self {
            json_type,
            format: None,
            description: None,
            properties: None,
        }
    }

    /// A string property
    pub fn string() -> Self {
        Self::scalar(JsonType::String)
    }

    /// An integer property
    pub fn integer() -> Self {
        Self::scalar(JsonType::Integer)
    }

    /// A boolean property
    pub fn boolean() -> Self {
        Self::scalar(JsonType::Boolean)
    }

    /// A date-time string property
    pub fn date_time() -> Self {
        Self {
            format: Some("date-time".to_string()),
            ..Self::scalar(JsonType::String)
        }
    }

    /// An object property with nested properties
    pub fn object<I, S>(properties: I) -> Self
    where
        I: IntoIterator<Item = (S, SchemaProperty)>,
        S: Into<String>,
    {
        Self {
            json_type: JsonType::Object,
            format: None,
            description: None,
            properties: Some(
                properties
                    .into_iter()
                    .map(|(name, prop)| (name.into(), prop))
                    .collect(),
            ),
        }
    }

    /// Attach a description
    #[must_use]
    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Schema for one stream's output records
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreamSchema {
    /// Always "object" for record streams
    #[serde(rename = "type")]
    pub json_type: JsonType,

    /// Top-level properties
    pub properties: BTreeMap<String, SchemaProperty>,
}

impl StreamSchema {
    /// Create a stream schema from top-level properties
    pub fn object<I, S>(properties: I) -> Self
    where
        I: IntoIterator<Item = (S, SchemaProperty)>,
        S: Into<String>,
    {
        Self {
            json_type: JsonType::Object,
            properties: properties
                .into_iter()
                .map(|(name, prop)| (name.into(), prop))
                .collect(),
        }
    }

    /// Serialize to a JSON value
    pub fn to_value(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}
