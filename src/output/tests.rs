//! Output writer tests

use super::MessageWriter;
use crate::engine::Message;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

fn lines(buf: &[u8]) -> Vec<Value> {
    std::str::from_utf8(buf)
        .unwrap()
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect()
}

#[test]
fn test_schema_and_record_lines() {
    let mut buf = Vec::new();
    let mut writer = MessageWriter::new(&mut buf);

    writer
        .write_message(&Message::schema(
            "employees",
            json!({"type": "object"}),
            vec!["id".to_string()],
        ))
        .unwrap();
    writer
        .write_message(&Message::record("employees", json!({"id": "1"})))
        .unwrap();
    writer.flush().unwrap();
    assert_eq!(writer.written(), 2);

    let lines = lines(&buf);
    assert_eq!(lines.len(), 2);
    assert_eq!(
        lines[0],
        json!({
            "type": "SCHEMA",
            "stream": "employees",
            "schema": {"type": "object"},
            "key_properties": ["id"],
        })
    );
    assert_eq!(
        lines[1],
        json!({
            "type": "RECORD",
            "stream": "employees",
            "record": {"id": "1"},
        })
    );
}

#[test]
fn test_log_messages_produce_no_output() {
    let mut buf = Vec::new();
    let mut writer = MessageWriter::new(&mut buf);

    writer
        .write_message(&Message::info("starting sync"))
        .unwrap();
    writer
        .write_message(&Message::debug("page 1: fetched 3 records"))
        .unwrap();

    let written = writer.written();
    assert!(buf.is_empty());
    assert_eq!(written, 0);
}

#[test]
fn test_write_all_preserves_order() {
    let mut buf = Vec::new();
    let mut writer = MessageWriter::new(&mut buf);

    let messages = vec![
        Message::info("starting"),
        Message::schema("employees", json!({"type": "object"}), vec!["id".to_string()]),
        Message::record("employees", json!({"id": "1"})),
        Message::record("employees", json!({"id": "2"})),
        Message::info("done"),
    ];
    writer.write_all(&messages).unwrap();

    let lines = lines(&buf);
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0]["type"], "SCHEMA");
    assert_eq!(lines[1]["record"]["id"], "1");
    assert_eq!(lines[2]["record"]["id"], "2");
}
