//! Projection of a [`WorkflowDocument`] into a render-ready presentation
//! graph, plus the inverse direction: folding graph-view edits back into the
//! canonical document.
//!
//! `project` is pure and deterministic: the same document always yields the
//! same nodes, edges, identities, and ordering, so an interactive canvas can
//! preserve selection and animation state across re-projections.

mod edits;

pub use edits::{apply_edit, GraphEdit};

use crate::workflow::{WorkflowDocument, WorkflowNode};
use ahash::AHashMap;
use serde::Serialize;

/// Horizontal spacing of the fallback layout cascade.
const FALLBACK_X_STEP: f64 = 200.0;
/// Vertical spacing of the fallback layout cascade.
const FALLBACK_Y_STEP: f64 = 100.0;

/// One positioned node of the presentation graph.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphNode {
    pub id: String,
    pub x: f64,
    pub y: f64,
    /// The node's display name.
    pub label: String,
    /// Short operator kind, the last dotted segment of the node type.
    pub kind: String,
    pub disabled: bool,
}

/// One directed edge of the presentation graph. `source` and `target` are
/// node ids; `id` is stable across re-projections of an unchanged document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphEdge {
    pub id: String,
    pub source: String,
    pub target: String,
}

/// The derived node/edge structure consumed by the graph widget.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct PresentationGraph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

/// Projects a document into its presentation graph.
///
/// Nodes without usable coordinates fall back to a left-to-right cascade
/// (`x = i * 200`, `y = i * 100` at ordinal index `i`) so they render in a
/// stable spread instead of collapsing onto the origin. Connections whose
/// source or target name resolves to no node yield no edge — dangling
/// references are an expected transient state while the user edits, not an
/// error.
pub fn project(document: &WorkflowDocument) -> PresentationGraph {
    let nodes = document
        .nodes
        .iter()
        .enumerate()
        .map(|(index, node)| {
            let (x, y) = layout_position(node, index);
            GraphNode {
                id: node.id.clone(),
                x,
                y,
                label: node.name.clone(),
                kind: short_kind(&node.node_type),
                disabled: node.disabled.unwrap_or(false),
            }
        })
        .collect();

    // Name index for resolving connection references. Duplicate names are a
    // data-quality issue passed through unchanged; last write wins.
    let mut by_name: AHashMap<&str, &WorkflowNode> = AHashMap::new();
    for node in &document.nodes {
        by_name.insert(node.name.as_str(), node);
    }

    let mut edges = Vec::new();
    for (source_name, outputs) in &document.connections {
        for slots in outputs.values() {
            for (output_index, slot) in slots.iter().enumerate() {
                for target in slot {
                    let (Some(source), Some(dest)) = (
                        by_name.get(source_name.as_str()),
                        by_name.get(target.node.as_str()),
                    ) else {
                        continue;
                    };
                    edges.push(GraphEdge {
                        id: edge_id(&source.id, &dest.id, output_index, target.index),
                        source: source.id.clone(),
                        target: dest.id.clone(),
                    });
                }
            }
        }
    }

    PresentationGraph { nodes, edges }
}

/// Composite edge identity: source node id, target node id, output slot
/// index, and target input index.
pub fn edge_id(source_id: &str, target_id: &str, output_index: usize, input_index: u32) -> String {
    format!("{source_id}-{target_id}-{output_index}-{input_index}")
}

fn layout_position(node: &WorkflowNode, index: usize) -> (f64, f64) {
    let [px, py] = node.position.unwrap_or([0.0, 0.0]);
    // A zero coordinate counts as unset, per coordinate.
    let x = if px != 0.0 {
        px
    } else {
        index as f64 * FALLBACK_X_STEP
    };
    let y = if py != 0.0 {
        py
    } else {
        index as f64 * FALLBACK_Y_STEP
    };
    (x, y)
}

fn short_kind(node_type: &str) -> String {
    node_type
        .rsplit('.')
        .next()
        .unwrap_or(node_type)
        .to_string()
}
