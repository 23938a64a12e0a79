//! Built-in workflow documents: the default document every editing session
//! starts from, and a small demo library for the "Load Demo" path.

use super::document::{
    ConnectionTarget, Connections, NodeOutputs, WorkflowDocument, WorkflowNode,
};
use rand::Rng;
use serde_json::{json, Map, Value};

/// The document shown before the user has loaded or generated anything.
pub fn default_document() -> WorkflowDocument {
    WorkflowDocument {
        name: "Welcome to Workflow Studio".to_string(),
        nodes: vec![
            WorkflowNode {
                id: "start".to_string(),
                name: "Start Here".to_string(),
                node_type: "n8n-nodes-base.start".to_string(),
                position: Some([300.0, 300.0]),
                notes: Some("Click 'Load Demo' or generate a workflow from a prompt!".to_string()),
                ..Default::default()
            },
            WorkflowNode {
                id: "welcome".to_string(),
                name: "Welcome".to_string(),
                node_type: "n8n-nodes-base.noOp".to_string(),
                position: Some([500.0, 300.0]),
                notes: Some(
                    "This is your Workflow Studio. Use the sidebar to generate workflows with AI!"
                        .to_string(),
                ),
                ..Default::default()
            },
        ],
        connections: chain(&[("Start Here", "Welcome")]),
        active: false,
        settings: object(json!({ "executionOrder": "v1" })),
        tags: Some(vec!["demo".to_string(), "welcome".to_string()]),
        ..Default::default()
    }
}

/// The demo library. Small, self-contained documents whose node types mirror
/// common automation operators.
pub fn demo_documents() -> Vec<WorkflowDocument> {
    vec![email_to_slack(), website_monitor()]
}

/// Picks one demo document at random.
pub fn random_demo() -> WorkflowDocument {
    let mut demos = demo_documents();
    let index = rand::rng().random_range(0..demos.len());
    demos.swap_remove(index)
}

fn email_to_slack() -> WorkflowDocument {
    WorkflowDocument {
        name: "Email to Slack Notification".to_string(),
        nodes: vec![
            node("start", "Start", "n8n-nodes-base.start", [240.0, 300.0], json!({})),
            node(
                "email_trigger",
                "Email Trigger",
                "n8n-nodes-base.emailTrigger",
                [440.0, 300.0],
                json!({
                    "mailbox": "INBOX",
                    "format": "simple",
                    "options": {}
                }),
            ),
            node(
                "slack",
                "Slack",
                "n8n-nodes-base.slack",
                [640.0, 300.0],
                json!({
                    "operation": "postMessage",
                    "channel": "#general",
                    "text": "New email received: {{$node[\"Email Trigger\"].json[\"subject\"]}}"
                }),
            ),
        ],
        connections: chain(&[("Start", "Email Trigger"), ("Email Trigger", "Slack")]),
        tags: Some(tags(&["email", "slack", "notification"])),
        ..Default::default()
    }
}

fn website_monitor() -> WorkflowDocument {
    WorkflowDocument {
        name: "Website Monitor with SMS Alert".to_string(),
        nodes: vec![
            node(
                "start",
                "Cron",
                "n8n-nodes-base.cron",
                [240.0, 300.0],
                json!({
                    "cronExpression": "0 */5 * * * *",
                    "triggerAtStartup": true
                }),
            ),
            node(
                "http_request",
                "HTTP Request",
                "n8n-nodes-base.httpRequest",
                [440.0, 300.0],
                json!({
                    "url": "https://your-website.com",
                    "method": "GET",
                    "options": { "timeout": 10000 }
                }),
            ),
            node(
                "if",
                "IF",
                "n8n-nodes-base.if",
                [640.0, 300.0],
                json!({
                    "conditions": {
                        "number": [
                            {
                                "value1": "={{$node[\"HTTP Request\"].json[\"statusCode\"]}}",
                                "operation": "notEqual",
                                "value2": 200
                            }
                        ]
                    }
                }),
            ),
            node(
                "sms",
                "SMS",
                "n8n-nodes-base.sms",
                [840.0, 200.0],
                json!({
                    "message": "Website down! Status: {{$node[\"HTTP Request\"].json[\"statusCode\"]}}",
                    "to": "+1234567890"
                }),
            ),
        ],
        connections: chain(&[
            ("Cron", "HTTP Request"),
            ("HTTP Request", "IF"),
            ("IF", "SMS"),
        ]),
        tags: Some(tags(&["monitoring", "sms", "alert", "website"])),
        ..Default::default()
    }
}

fn node(id: &str, name: &str, node_type: &str, position: [f64; 2], parameters: Value) -> WorkflowNode {
    WorkflowNode {
        id: id.to_string(),
        name: name.to_string(),
        node_type: node_type.to_string(),
        position: Some(position),
        parameters: object(parameters),
        ..Default::default()
    }
}

/// Builds a main-port connection map from a list of `source -> target` links.
fn chain(links: &[(&str, &str)]) -> Connections {
    let mut connections = Connections::new();
    for (source, target) in links {
        let outputs: &mut NodeOutputs = connections.entry(source.to_string()).or_default();
        outputs
            .entry("main".to_string())
            .or_default()
            .push(vec![ConnectionTarget::main(*target)]);
    }
    connections
}

fn object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

fn tags(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}
