//! Tests for the canonical text codec: round-trip fidelity and permissive
//! parsing.
mod common;
use common::*;
use skein::prelude::*;
use skein::workflow;

#[test]
fn round_trips_a_plain_document() {
    let document = two_node_document();
    let text = serialize(&document).expect("serialize");
    let reparsed = parse(&text).expect("reparse");
    assert_eq!(reparsed, document);
}

#[test]
fn round_trips_optional_fields_and_opaque_bags() {
    let document = full_document();
    let text = serialize(&document).expect("serialize");
    let reparsed = parse(&text).expect("reparse");
    assert_eq!(reparsed, document);
}

#[test]
fn round_trips_every_builtin_document() {
    let mut documents = workflow::demo_documents();
    documents.push(workflow::default_document());
    for document in documents {
        let text = serialize(&document).expect("serialize");
        let reparsed = parse(&text).expect("reparse");
        assert_eq!(reparsed, document, "round-trip failed for {}", document.name);
    }
}

#[test]
fn preserves_unknown_keys() {
    let text = r#"{
  "name": "Mystery",
  "nodes": [
    { "id": "n1", "name": "A", "type": "x.y", "parameters": {}, "pinnedData": [1, 2] }
  ],
  "connections": {},
  "active": false,
  "settings": {},
  "versionId": "7f3a"
}"#;
    let document = parse(text).expect("parse");
    assert_eq!(document.extra["versionId"], serde_json::json!("7f3a"));
    assert_eq!(document.nodes[0].extra["pinnedData"], serde_json::json!([1, 2]));

    let reparsed = parse(&serialize(&document).expect("serialize")).expect("reparse");
    assert_eq!(reparsed, document);
}

#[test]
fn serializes_with_two_space_indentation() {
    let text = serialize(&two_node_document()).expect("serialize");
    assert!(text.starts_with("{\n  \"name\""));
    assert!(text.contains("\n    {\n      \"id\": \"n1\""));
}

#[test]
fn accepts_an_empty_object() {
    // Permissiveness policy: a partially specified or in-progress document
    // is not a parse error.
    let document = parse("{}").expect("empty object should parse");
    assert_eq!(document.name, "");
    assert!(document.nodes.is_empty());
    assert!(document.connections.is_empty());
    assert!(!document.active);
}

#[test]
fn accepts_a_document_without_a_name() {
    let document = parse(r#"{ "nodes": [], "connections": {} }"#).expect("parse");
    assert_eq!(document.name, "");
}

#[test]
fn tolerates_dangling_connection_references() {
    let text = r#"{
  "name": "Dangling",
  "nodes": [],
  "connections": {
    "Ghost": { "main": [[ { "node": "AlsoGhost", "type": "main", "index": 0 } ]] }
  }
}"#;
    let document = parse(text).expect("dangling references are not a parse error");
    assert_eq!(document.connections["Ghost"]["main"][0][0].node, "AlsoGhost");
}

#[test]
fn rejects_malformed_text() {
    assert!(matches!(
        parse("not json"),
        Err(CodecError::MalformedSyntax(_))
    ));
}

#[test]
fn rejects_trailing_commas() {
    assert!(matches!(
        parse(r#"{ "name": "Oops", }"#),
        Err(CodecError::MalformedSyntax(_))
    ));
}

#[test]
fn rejects_truncated_text() {
    assert!(matches!(
        parse(r#"{ "name": "Trunc"#),
        Err(CodecError::MalformedSyntax(_))
    ));
}

#[test]
fn preserves_connection_nesting_depth() {
    // Two output slots with fan-out inside the second slot. The three-level
    // structure must survive a round-trip level for level.
    let text = r#"{
  "name": "Branchy",
  "nodes": [
    { "id": "a", "name": "Branch", "type": "x.if", "parameters": {} },
    { "id": "b", "name": "Left", "type": "x.noOp", "parameters": {} },
    { "id": "c", "name": "Right", "type": "x.noOp", "parameters": {} }
  ],
  "connections": {
    "Branch": {
      "main": [
        [ { "node": "Left", "type": "main", "index": 0 } ],
        [ { "node": "Right", "type": "main", "index": 0 },
          { "node": "Left", "type": "main", "index": 1 } ]
      ]
    }
  }
}"#;
    let document = parse(text).expect("parse");
    let slots = &document.connections["Branch"]["main"];
    assert_eq!(slots.len(), 2);
    assert_eq!(slots[0].len(), 1);
    assert_eq!(slots[1].len(), 2);

    let reparsed = parse(&serialize(&document).expect("serialize")).expect("reparse");
    assert_eq!(reparsed.connections["Branch"]["main"], *slots);
}
