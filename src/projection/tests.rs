//! Projection engine tests
//!
//! Covers the soundness, completeness, idempotence, and tolerance
//! properties of `project`, plus the end-to-end scenario against the real
//! employees allow-list.

use super::{project, AllowList};
use crate::catalog;
use crate::types::JsonValue;
use pretty_assertions::assert_eq;
use serde_json::json;
use test_case::test_case;

fn work_node() -> AllowList {
    AllowList::new()
        .keep_all(["id", "email"])
        .nest(
            "work",
            AllowList::new()
                .keep_all(["department", "isManager"])
                .nest("reportsTo", AllowList::new().keep("id")),
        )
        .nest("internal", AllowList::new().keep("lifecycleStatus"))
}

/// Every key in the output must be reachable through the allow-list tree.
fn assert_sound(node: &AllowList, value: &JsonValue) {
    let JsonValue::Object(map) = value else {
        return;
    };
    for (key, nested) in map {
        assert!(node.keeps(key), "key '{key}' not declared in allow-list");
        if let Some(child) = node.child(key) {
            assert_sound(child, nested);
        }
    }
}

#[test]
fn test_soundness_no_undeclared_keys_survive() {
    let node = work_node();
    let record = json!({
        "id": "1",
        "email": "a@b.com",
        "secret": "x",
        "work": {
            "department": "Eng",
            "salary": 100,
            "reportsTo": {"id": "9", "name": "Bob", "ssn": "nope"}
        },
        "internal": {"lifecycleStatus": "Active", "notes": "y"}
    });

    let projected = project(&node, &record);
    assert_sound(&node, &projected);
    assert!(projected.get("secret").is_none());
    assert!(projected["work"].get("salary").is_none());
    assert!(projected["work"]["reportsTo"].get("name").is_none());
}

#[test]
fn test_completeness_present_declared_values_unchanged() {
    let node = work_node();
    let record = json!({
        "id": "1",
        "work": {
            "department": "Eng",
            "isManager": true,
            "reportsTo": {"id": "9"}
        }
    });

    let projected = project(&node, &record);
    assert_eq!(projected["id"], json!("1"));
    assert_eq!(projected["work"]["department"], json!("Eng"));
    assert_eq!(projected["work"]["isManager"], json!(true));
    assert_eq!(projected["work"]["reportsTo"]["id"], json!("9"));
}

#[test]
fn test_idempotence() {
    let node = work_node();
    let record = json!({
        "id": "1",
        "extra": "x",
        "work": {"department": "Eng", "secret": "y", "reportsTo": {"id": "9"}}
    });

    let once = project(&node, &record);
    let twice = project(&node, &once);
    assert_eq!(once, twice);
}

#[test]
fn test_missing_declared_object_is_omitted() {
    let node = work_node();
    let record = json!({"id": "1"});

    let projected = project(&node, &record);
    assert_eq!(projected, json!({"id": "1"}));
    assert!(projected.get("work").is_none());
}

// A field declared as an object may arrive as anything; projection must not
// fail and must not recurse.
#[test_case(json!("not an object") ; "string")]
#[test_case(json!(42) ; "number")]
#[test_case(json!(null) ; "null")]
#[test_case(json!([{"department": "Eng"}]) ; "array")]
fn test_malformed_declared_object_passes_through(work: JsonValue) {
    let node = work_node();
    let record = json!({"id": "1", "work": work});

    let projected = project(&node, &record);
    assert_eq!(projected["work"], record["work"]);
}

#[test]
fn test_non_object_record_returned_unchanged() {
    let node = work_node();
    for value in [json!(null), json!("x"), json!([1, 2, 3]), json!(7)] {
        assert_eq!(project(&node, &value), value);
    }
}

#[test]
fn test_input_not_mutated() {
    let node = work_node();
    let record = json!({"id": "1", "dropped": "x"});
    let before = record.clone();
    let _ = project(&node, &record);
    assert_eq!(record, before);
}

#[test]
fn test_empty_allow_list_drops_everything() {
    let node = AllowList::new();
    let record = json!({"id": "1", "work": {"department": "Eng"}});
    assert_eq!(project(&node, &record), json!({}));
}

#[test]
fn test_employees_end_to_end_scenario() {
    let stream = catalog::employees::definition();
    let record = json!({
        "id": "1",
        "extra": "x",
        "work": {
            "department": "Eng",
            "secret": "y",
            "reportsTo": {"id": "9", "name": "Bob"}
        }
    });

    let projected = project(&stream.allow_list, &record);
    assert_eq!(
        projected,
        json!({
            "id": "1",
            "work": {"department": "Eng", "reportsTo": {"id": "9"}}
        })
    );
}

#[test]
fn test_employees_custom_field_codes_survive() {
    let stream = catalog::employees::definition();
    let record = json!({
        "id": "7",
        "humanReadable": {
            "work": {
                "title": "Engineer",
                "custom": {
                    "field_1667499206086": "Acme",
                    "field_1667499039796": "A-42",
                    "field_9999999999999": "dropped"
                },
                "customColumns": {"column_1667499229415": "Platform"}
            },
            "custom": {
                "category_1673451690985": {
                    "field_1704464569961": "admin",
                    "unknown": "dropped"
                }
            },
            "personal": {"dropped": true}
        }
    });

    let projected = project(&stream.allow_list, &record);
    let hr = &projected["humanReadable"];
    assert_eq!(hr["work"]["custom"]["field_1667499206086"], json!("Acme"));
    assert_eq!(hr["work"]["custom"]["field_1667499039796"], json!("A-42"));
    assert!(hr["work"]["custom"].get("field_9999999999999").is_none());
    assert_eq!(
        hr["work"]["customColumns"]["column_1667499229415"],
        json!("Platform")
    );
    assert_eq!(
        hr["custom"]["category_1673451690985"]["field_1704464569961"],
        json!("admin")
    );
    assert!(hr["custom"]["category_1673451690985"].get("unknown").is_none());
    assert!(hr.get("personal").is_none());
}
