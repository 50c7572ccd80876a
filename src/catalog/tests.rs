//! Catalog tests

use super::{employees, Catalog};
use crate::error::Error;
use crate::pagination::PaginationConfig;
use crate::request::RequestShape;
use crate::schema::SchemaProperty;
use crate::types::{Method, SyncMode};
use std::collections::BTreeSet;

#[test]
fn test_catalog_declares_employees() {
    let catalog = Catalog::hibob();
    assert_eq!(catalog.stream_names(), vec!["employees"]);

    let stream = catalog.get("employees").unwrap();
    assert_eq!(stream.path, "/v1/people");
    assert_eq!(stream.primary_key, vec!["id"]);
    assert_eq!(stream.sync_mode, SyncMode::FullRefresh);
    assert_eq!(stream.record_path, "$.employees[*]");
    assert_eq!(stream.request.method(), Method::GET);
    assert!(matches!(stream.pagination, PaginationConfig::None));
}

#[test]
fn test_unknown_stream() {
    let catalog = Catalog::hibob();
    let err = catalog.get("payslips").unwrap_err();
    assert!(matches!(err, Error::StreamNotFound { ref stream } if stream == "payslips"));
}

#[test]
fn test_allow_list_top_level_keys() {
    let stream = employees::definition();
    let keys: BTreeSet<&str> = stream.allow_list.keys().collect();
    let expected: BTreeSet<&str> = [
        "id",
        "creationDateTime",
        "firstName",
        "surname",
        "fullName",
        "displayName",
        "companyId",
        "email",
        "work",
        "internal",
        "address",
        "payroll",
        "humanReadable",
    ]
    .into_iter()
    .collect();
    assert_eq!(keys, expected);
}

#[test]
fn test_schema_mirrors_allow_list() {
    // Every allow-list leaf must be declared in the schema, and vice versa.
    // Both were historically maintained by hand and drifted; deriving this
    // check keeps them locked together.
    let stream = employees::definition();

    fn schema_paths(
        prefix: Option<&str>,
        properties: &std::collections::BTreeMap<String, SchemaProperty>,
        out: &mut BTreeSet<String>,
    ) {
        for (name, prop) in properties {
            let path = match prefix {
                Some(prefix) => format!("{prefix}.{name}"),
                None => name.clone(),
            };
            match &prop.properties {
                Some(nested) if !nested.is_empty() => schema_paths(Some(&path), nested, out),
                _ => {
                    out.insert(path);
                }
            }
        }
    }

    let mut from_schema = BTreeSet::new();
    schema_paths(None, &stream.schema.properties, &mut from_schema);

    let from_allow_list: BTreeSet<String> = stream.allow_list.leaf_paths().into_iter().collect();
    assert_eq!(from_schema, from_allow_list);
}

#[test]
fn test_field_selection_derived_from_allow_list() {
    let stream = employees::definition();
    assert_eq!(stream.field_selection, stream.allow_list.leaf_paths());
    assert!(stream
        .field_selection
        .contains(&"work.reportsTo.id".to_string()));
    assert!(stream
        .field_selection
        .contains(&"humanReadable.work.custom.field_1667499039796".to_string()));
}

#[test]
fn test_search_variant() {
    let stream = employees::search_definition();
    assert_eq!(stream.path, "/v1/people/search");
    assert_eq!(stream.request.method(), Method::POST);
    assert!(matches!(stream.request, RequestShape::JsonBody { .. }));
    // Output contract is identical to the listing variant
    let listing = employees::definition();
    assert_eq!(stream.allow_list, listing.allow_list);
    assert_eq!(stream.schema, listing.schema);
}
