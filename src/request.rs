//! Outbound request construction
//!
//! Pure construction of the request for one page of a stream: method, URL,
//! query parameters, headers, and optional JSON body. Transmission, retry,
//! and authentication belong to the HTTP client.
//!
//! Two request shapes exist on the HiBob people API. The plain listing
//! endpoint is a GET with query flags; the search endpoint is a POST whose
//! body carries the flags plus an explicit field-selection list. Which one a
//! stream uses is fixed configuration in its [`StreamDefinition`], not a
//! runtime decision.

use crate::catalog::StreamDefinition;
use crate::error::Result;
use crate::types::{JsonValue, Method, StringMap};
use serde_json::json;
use std::collections::HashMap;

/// Shape of the outbound request for a stream
#[derive(Debug, Clone)]
pub enum RequestShape {
    /// GET with static query parameters (e.g. `showInactive=true`)
    Query {
        /// Static query parameters sent with every page
        params: Vec<(String, String)>,
    },

    /// POST with a JSON body carrying flags plus the stream's
    /// field-selection list under `"fields"`
    JsonBody {
        /// Static body members sent with every page (e.g. `showInactive`)
        flags: Vec<(String, JsonValue)>,
    },
}

impl RequestShape {
    /// The HTTP method this shape implies
    pub fn method(&self) -> Method {
        match self {
            RequestShape::Query { .. } => Method::GET,
            RequestShape::JsonBody { .. } => Method::POST,
        }
    }
}

/// A fully constructed outbound request, ready for the HTTP client
#[derive(Debug, Clone)]
pub struct OutboundRequest {
    /// HTTP method
    pub method: Method,
    /// Absolute URL
    pub url: String,
    /// Query parameters, in insertion order
    pub query: Vec<(String, String)>,
    /// Request headers (auth is applied later by the client)
    pub headers: StringMap,
    /// JSON body, for the search shape
    pub body: Option<JsonValue>,
}

/// Build the request for one page of a stream.
///
/// `page_params` come from the stream's paginator and always ride the query
/// string, regardless of shape.
pub fn build_request(
    base_url: &str,
    stream: &StreamDefinition,
    page_params: &HashMap<String, String>,
) -> Result<OutboundRequest> {
    let url = format!(
        "{}{}",
        base_url.trim_end_matches('/'),
        stream.path.as_str()
    );

    let mut headers = StringMap::new();
    headers.insert("Content-Type".to_string(), "application/json".to_string());
    headers.insert("Accept".to_string(), "application/json".to_string());

    let mut query: Vec<(String, String)> = Vec::new();
    let mut body = None;

    match &stream.request {
        RequestShape::Query { params } => {
            query.extend(params.iter().cloned());
        }
        RequestShape::JsonBody { flags } => {
            let mut map = serde_json::Map::new();
            for (key, value) in flags {
                map.insert(key.clone(), value.clone());
            }
            map.insert("fields".to_string(), json!(stream.field_selection));
            body = Some(JsonValue::Object(map));
        }
    }

    for (key, value) in page_params {
        query.push((key.clone(), value.clone()));
    }

    Ok(OutboundRequest {
        method: stream.request.method(),
        url,
        query,
        headers,
        body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_employees_get_request() {
        let stream = catalog::employees::definition();
        let request = build_request("https://api.hibob.com", &stream, &HashMap::new()).unwrap();

        assert_eq!(request.method, Method::GET);
        assert_eq!(request.url, "https://api.hibob.com/v1/people");
        assert!(request.body.is_none());
        assert!(request
            .query
            .contains(&("showInactive".to_string(), "true".to_string())));
        assert!(request
            .query
            .contains(&("includeHumanReadable".to_string(), "true".to_string())));
        assert_eq!(
            request.headers.get("Content-Type").map(String::as_str),
            Some("application/json")
        );
        assert_eq!(
            request.headers.get("Accept").map(String::as_str),
            Some("application/json")
        );
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let stream = catalog::employees::definition();
        let request = build_request("https://api.hibob.com/", &stream, &HashMap::new()).unwrap();
        assert_eq!(request.url, "https://api.hibob.com/v1/people");
    }

    #[test]
    fn test_page_params_ride_the_query_string() {
        let stream = catalog::employees::definition();
        let mut page_params = HashMap::new();
        page_params.insert("page".to_string(), "tok-2".to_string());

        let request = build_request("https://api.hibob.com", &stream, &page_params).unwrap();
        assert!(request
            .query
            .contains(&("page".to_string(), "tok-2".to_string())));
    }

    #[test]
    fn test_search_shape_builds_post_body() {
        let stream = catalog::employees::search_definition();
        let request = build_request("https://api.hibob.com", &stream, &HashMap::new()).unwrap();

        assert_eq!(request.method, Method::POST);
        assert_eq!(request.url, "https://api.hibob.com/v1/people/search");
        assert!(request.query.is_empty());

        let body = request.body.unwrap();
        assert_eq!(body["showInactive"], serde_json::json!(true));
        assert_eq!(body["humanReadable"], serde_json::json!("append"));

        let fields = body["fields"].as_array().unwrap();
        assert!(fields.contains(&serde_json::json!("work.department")));
        assert!(fields.contains(&serde_json::json!("work.reportsTo.id")));
        assert!(fields.contains(&serde_json::json!("id")));
    }
}
