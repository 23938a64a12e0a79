//! Graph-view edits folded back into the canonical document.
//!
//! The graph widget reports local mutations — a node dragged to a new spot, a
//! wire drawn or removed — addressed by node id and edge identity. Applying
//! them here rewrites `position` and `connections` on the document, so graph
//! edits are a mutation source symmetric to text edits.

use crate::workflow::{ConnectionTarget, WorkflowDocument};
use tracing::debug;

/// A local mutation reported by the graph widget.
#[derive(Debug, Clone, PartialEq)]
pub enum GraphEdit {
    /// The node was dragged to new canvas coordinates.
    MoveNode { id: String, x: f64, y: f64 },
    /// A wire was drawn from an output slot to an input port.
    Connect {
        source_id: String,
        target_id: String,
        /// Port-kind label on the source side, almost always `"main"`.
        port: String,
        output_index: usize,
        input_index: u32,
    },
    /// A wire matching this edge identity was removed.
    Disconnect {
        source_id: String,
        target_id: String,
        output_index: usize,
        input_index: u32,
    },
}

/// Applies one graph edit to the document. Returns `true` if the document
/// changed. Edits referencing unknown node ids are ignored: the widget may
/// lag one projection behind the document.
pub fn apply_edit(document: &mut WorkflowDocument, edit: &GraphEdit) -> bool {
    match edit {
        GraphEdit::MoveNode { id, x, y } => move_node(document, id, *x, *y),
        GraphEdit::Connect {
            source_id,
            target_id,
            port,
            output_index,
            input_index,
        } => connect(document, source_id, target_id, port, *output_index, *input_index),
        GraphEdit::Disconnect {
            source_id,
            target_id,
            output_index,
            input_index,
        } => disconnect(document, source_id, target_id, *output_index, *input_index),
    }
}

fn move_node(document: &mut WorkflowDocument, id: &str, x: f64, y: f64) -> bool {
    let Some(node) = document.node_by_id_mut(id) else {
        debug!(id, "move ignored: unknown node id");
        return false;
    };
    node.position = Some([x, y]);
    true
}

fn connect(
    document: &mut WorkflowDocument,
    source_id: &str,
    target_id: &str,
    port: &str,
    output_index: usize,
    input_index: u32,
) -> bool {
    let (Some(source), Some(target)) = (
        document.node_by_id(source_id),
        document.node_by_id(target_id),
    ) else {
        debug!(source_id, target_id, "connect ignored: unknown node id");
        return false;
    };
    let source_name = source.name.clone();
    let target_name = target.name.clone();

    let slots = document
        .connections
        .entry(source_name)
        .or_default()
        .entry(port.to_string())
        .or_default();
    // Slot positions are meaningful for multi-output operators; pad up to the
    // requested slot rather than compacting.
    while slots.len() <= output_index {
        slots.push(Vec::new());
    }
    slots[output_index].push(ConnectionTarget {
        node: target_name,
        port: port.to_string(),
        index: input_index,
    });
    true
}

fn disconnect(
    document: &mut WorkflowDocument,
    source_id: &str,
    target_id: &str,
    output_index: usize,
    input_index: u32,
) -> bool {
    let (Some(source), Some(target)) = (
        document.node_by_id(source_id),
        document.node_by_id(target_id),
    ) else {
        debug!(source_id, target_id, "disconnect ignored: unknown node id");
        return false;
    };
    let source_name = source.name.clone();
    let target_name = target.name.clone();

    let Some(outputs) = document.connections.get_mut(&source_name) else {
        return false;
    };

    // Edge identity does not carry the port name, so the match runs across
    // all ports of the source node.
    let mut removed = false;
    for slots in outputs.values_mut() {
        if let Some(slot) = slots.get_mut(output_index) {
            let before = slot.len();
            slot.retain(|candidate| {
                !(candidate.node == target_name && candidate.index == input_index)
            });
            removed |= slot.len() != before;
        }
    }
    removed
}
