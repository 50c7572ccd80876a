//! Authenticator implementation
//!
//! Applies authentication to requests. The HiBob people API takes the
//! configured credential verbatim after a `Basic ` prefix — the value is a
//! service-user id/token pair the operator has already base64-encoded, so
//! the connector never re-encodes it.

use crate::config::Settings;
use crate::types::StringMap;
use reqwest::RequestBuilder;

/// Authentication configuration
#[derive(Debug, Clone, Default)]
pub enum AuthConfig {
    /// No authentication (tests and local mocks)
    #[default]
    None,

    /// HiBob service-user credential, pre-encoded, sent as `Basic <token>`
    Basic {
        /// The encoded credential
        token: String,
    },
}

impl AuthConfig {
    /// Create a basic-credential config
    pub fn basic(token: impl Into<String>) -> Self {
        Self::Basic {
            token: token.into(),
        }
    }
}

/// Authenticator handles applying authentication to HTTP requests
#[derive(Debug, Clone, Default)]
pub struct Authenticator {
    config: AuthConfig,
}

impl Authenticator {
    /// Create a new authenticator with the given config
    pub fn new(config: AuthConfig) -> Self {
        Self { config }
    }

    /// Build an authenticator from connector settings
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(AuthConfig::basic(settings.authorization.clone()))
    }

    /// Apply authentication to a request builder
    pub fn apply(&self, req: RequestBuilder) -> RequestBuilder {
        match &self.config {
            AuthConfig::None => req,
            AuthConfig::Basic { token } => req.header("Authorization", format!("Basic {token}")),
        }
    }

    /// The auth headers this authenticator would add
    pub fn headers(&self) -> StringMap {
        let mut headers = StringMap::new();
        if let AuthConfig::Basic { token } = &self.config {
            headers.insert("Authorization".to_string(), format!("Basic {token}"));
        }
        headers
    }
}
