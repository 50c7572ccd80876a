//! Auth tests

use super::{AuthConfig, Authenticator};
use crate::config::Settings;

#[test]
fn test_basic_header_format() {
    let auth = Authenticator::new(AuthConfig::basic("c2VydmljZTp0b2tlbg=="));
    let headers = auth.headers();
    assert_eq!(
        headers.get("Authorization").map(String::as_str),
        Some("Basic c2VydmljZTp0b2tlbg==")
    );
}

#[test]
fn test_none_adds_nothing() {
    let auth = Authenticator::new(AuthConfig::None);
    assert!(auth.headers().is_empty());
}

#[test]
fn test_from_settings_uses_authorization_verbatim() {
    let settings = Settings::from_json(r#"{"authorization": "already-encoded"}"#).unwrap();
    let auth = Authenticator::from_settings(&settings);
    assert_eq!(
        auth.headers().get("Authorization").map(String::as_str),
        Some("Basic already-encoded")
    );
}

#[test]
fn test_apply_sets_request_header() {
    let auth = Authenticator::new(AuthConfig::basic("tok"));
    let client = reqwest::Client::new();
    let req = auth
        .apply(client.get("http://localhost/v1/people"))
        .build()
        .unwrap();
    assert_eq!(
        req.headers().get("Authorization").unwrap(),
        "Basic tok"
    );
}
