//! Credential injection
//!
//! Builds the `Authorization` header for outbound requests. HiBob service
//! users authenticate with a single pre-encoded credential sent as
//! `Basic <token>`; there is no token refresh or expiry to manage.

mod authenticator;

pub use authenticator::{AuthConfig, Authenticator};

#[cfg(test)]
mod tests;
