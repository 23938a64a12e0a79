use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// The targets fed by one output slot.
pub type SlotTargets = Vec<ConnectionTarget>;

/// The ordered output slots of a named output port. Multi-output operators
/// (branches, switches) use one slot per branch.
pub type OutputSlots = Vec<SlotTargets>;

/// Output-port-name -> output slots, for a single source node.
pub type NodeOutputs = BTreeMap<String, OutputSlots>;

/// Source-node-name -> named outputs. Connections address nodes by display
/// name, not by id; names that resolve to no node are tolerated and simply
/// render nothing.
pub type Connections = BTreeMap<String, NodeOutputs>;

/// The canonical workflow document. Everything else in the crate — the text
/// form and the presentation graph — is derived from this and regenerable.
///
/// Parsing is deliberately permissive: every field defaults, so a partially
/// specified document (even `{}`) is accepted. Fields this crate does not
/// interpret (`settings`, `staticData`, `meta`, unknown keys) are carried
/// through untouched.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WorkflowDocument {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub nodes: Vec<WorkflowNode>,
    pub connections: Connections,
    pub active: bool,
    pub settings: Map<String, Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub static_data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Value>,
    /// Keys this crate does not model, preserved across round-trips.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl WorkflowDocument {
    /// Looks up a node by its `id` (the identity key of the graph view).
    pub fn node_by_id(&self, id: &str) -> Option<&WorkflowNode> {
        self.nodes.iter().find(|node| node.id == id)
    }

    pub fn node_by_id_mut(&mut self, id: &str) -> Option<&mut WorkflowNode> {
        self.nodes.iter_mut().find(|node| node.id == id)
    }

    /// Looks up a node by its display `name` (the key space of `connections`).
    pub fn node_by_name(&self, name: &str) -> Option<&WorkflowNode> {
        self.nodes.iter().find(|node| node.name == name)
    }
}

/// One operator instance in the workflow.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WorkflowNode {
    pub id: String,
    pub name: String,
    /// Dotted operator identifier, e.g. `n8n-nodes-base.httpRequest`.
    /// Opaque beyond display use.
    #[serde(rename = "type")]
    pub node_type: String,
    /// Canvas coordinates. Absent or zero coordinates get a deterministic
    /// fallback layout at projection time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<[f64; 2]>,
    pub parameters: Map<String, Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credentials: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook_id: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A reference from a node's output slot to another node's input port.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConnectionTarget {
    /// Display name of the target node.
    pub node: String,
    /// Port-kind label, almost always `"main"`.
    #[serde(rename = "type")]
    pub port: String,
    /// Input port index on the target node.
    pub index: u32,
}

impl ConnectionTarget {
    pub fn main(node: impl Into<String>) -> Self {
        Self {
            node: node.into(),
            port: "main".to_string(),
            index: 0,
        }
    }
}
