//! Schema declaration tests

use super::{JsonType, SchemaProperty, StreamSchema};
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn test_scalar_serialization() {
    assert_eq!(
        serde_json::to_value(SchemaProperty::string()).unwrap(),
        json!({"type": "string"})
    );
    assert_eq!(
        serde_json::to_value(SchemaProperty::date_time()).unwrap(),
        json!({"type": "string", "format": "date-time"})
    );
}

#[test]
fn test_nested_object_serialization() {
    let schema = StreamSchema::object([
        ("id", SchemaProperty::string()),
        (
            "work",
            SchemaProperty::object([
                ("isManager", SchemaProperty::boolean()),
                (
                    "reportsTo",
                    SchemaProperty::object([("id", SchemaProperty::string())]),
                ),
            ]),
        ),
    ]);

    assert_eq!(
        schema.to_value(),
        json!({
            "type": "object",
            "properties": {
                "id": {"type": "string"},
                "work": {
                    "type": "object",
                    "properties": {
                        "isManager": {"type": "boolean"},
                        "reportsTo": {
                            "type": "object",
                            "properties": {"id": {"type": "string"}}
                        }
                    }
                }
            }
        })
    );
}

#[test]
fn test_description_round_trip() {
    let prop = SchemaProperty::integer().describe("tenant company id");
    let value = serde_json::to_value(&prop).unwrap();
    let back: SchemaProperty = serde_json::from_value(value).unwrap();
    assert_eq!(back, prop);
    assert_eq!(back.json_type, JsonType::Integer);
}
