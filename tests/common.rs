//! Common test utilities for building workflow documents.
use skein::prelude::*;
use serde_json::json;

/// Two nodes `"A"` (id `n1`) and `"B"` (id `n2`) with a single main
/// connection `A -> B`.
#[allow(dead_code)]
pub fn two_node_document() -> WorkflowDocument {
    let mut document = WorkflowDocument {
        name: "Two Nodes".to_string(),
        nodes: vec![
            named_node("n1", "A", [100.0, 100.0]),
            named_node("n2", "B", [300.0, 100.0]),
        ],
        ..Default::default()
    };
    connect_main(&mut document, "A", "B");
    document
}

/// A document whose nodes carry no position at all.
#[allow(dead_code)]
pub fn unpositioned_document() -> WorkflowDocument {
    WorkflowDocument {
        name: "Unpositioned".to_string(),
        nodes: vec![
            node_without_position("n1", "First"),
            node_without_position("n2", "Second"),
            node_without_position("n3", "Third"),
        ],
        ..Default::default()
    }
}

#[allow(dead_code)]
pub fn named_node(id: &str, name: &str, position: [f64; 2]) -> WorkflowNode {
    WorkflowNode {
        id: id.to_string(),
        name: name.to_string(),
        node_type: "n8n-nodes-base.noOp".to_string(),
        position: Some(position),
        ..Default::default()
    }
}

#[allow(dead_code)]
pub fn node_without_position(id: &str, name: &str) -> WorkflowNode {
    WorkflowNode {
        id: id.to_string(),
        name: name.to_string(),
        node_type: "n8n-nodes-base.noOp".to_string(),
        ..Default::default()
    }
}

/// Adds a `source -> target` connection on the `"main"` port, slot 0.
#[allow(dead_code)]
pub fn connect_main(document: &mut WorkflowDocument, source: &str, target: &str) {
    document
        .connections
        .entry(source.to_string())
        .or_default()
        .entry("main".to_string())
        .or_default()
        .push(vec![ConnectionTarget::main(target)]);
}

/// A richer document exercising opaque bags and optional fields.
#[allow(dead_code)]
pub fn full_document() -> WorkflowDocument {
    let mut document = two_node_document();
    document.id = Some("wf_42".to_string());
    document.settings = serde_json::from_value(json!({ "executionOrder": "v1" }))
        .expect("settings object");
    document.static_data = Some(json!({ "lastRun": "2024-06-01T00:00:00Z" }));
    document.tags = Some(vec!["test".to_string(), "fixture".to_string()]);
    document.meta = Some(json!({ "instanceId": "abc123" }));
    document.nodes[0].parameters = serde_json::from_value(json!({
        "mode": "everyMinute",
        "options": { "retries": 3 }
    }))
    .expect("parameters object");
    document.nodes[0].notes = Some("entry point".to_string());
    document.nodes[1].disabled = Some(true);
    document.nodes[1].webhook_id = Some("hook-1".to_string());
    document
}
