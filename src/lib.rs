//! # Skein - Workflow Document Studio Core
//!
//! **Skein** is the document engine behind a two-view workflow editor: an
//! n8n-style automation workflow (a directed graph of typed nodes connected
//! by typed ports) edited either as raw JSON text or on an interactive node
//! canvas, with both views kept continuously and losslessly in sync.
//!
//! ## Core Workflow
//!
//! 1.  **Own the document**: a [`store::WorkflowStore`] holds the single
//!     authoritative [`workflow::WorkflowDocument`] for a session. The
//!     canonical text and the presentation graph are derived from it and
//!     regenerated on every change, never stored independently.
//! 2.  **Edit as text**: [`store::WorkflowStore::set_text`] follows every
//!     keystroke; the document only advances when the text parses, so the
//!     canvas keeps showing the last valid workflow through broken
//!     intermediate states.
//! 3.  **Edit on the canvas**: the graph widget consumes
//!     [`projection::PresentationGraph`] and reports drags and wire changes
//!     as [`projection::GraphEdit`]s, which the store folds back into the
//!     document and re-serializes.
//! 4.  **Generate**: a [`gateway::WorkflowGenerator`] turns a natural
//!     language prompt into a candidate document via OpenAI or Gemini; a
//!     successful result is installed exactly like a successful parse.
//!
//! ## Quick Start
//!
//! ```rust
//! use skein::prelude::*;
//!
//! let mut store = WorkflowStore::new();
//!
//! // Text edits parse into the canonical document...
//! store.set_text(r#"{
//!   "name": "Ping",
//!   "nodes": [
//!     { "id": "n1", "name": "Cron", "type": "n8n-nodes-base.cron", "parameters": {} },
//!     { "id": "n2", "name": "HTTP", "type": "n8n-nodes-base.httpRequest", "parameters": {} }
//!   ],
//!   "connections": {
//!     "Cron": { "main": [[ { "node": "HTTP", "type": "main", "index": 0 } ]] }
//!   },
//!   "active": false,
//!   "settings": {}
//! }"#);
//! assert!(store.error().is_none());
//!
//! // ...and project into a render-ready graph with stable edge identities.
//! let graph = store.graph();
//! assert_eq!(graph.edges[0].id, "n1-n2-0-0");
//!
//! // Graph edits flow back into the document and the text view.
//! store.apply_graph_edit(&GraphEdit::MoveNode {
//!     id: "n2".to_string(),
//!     x: 640.0,
//!     y: 320.0,
//! });
//! assert!(store.text().contains("640.0"));
//! ```
//!
//! ## Module Guide
//!
//! - [`workflow`] - Canonical document types and the built-in demo library
//! - [`codec`] - Pretty-printed JSON serialization and permissive parsing
//! - [`projection`] - Document-to-graph projection and graph-edit fold-back
//! - [`store`] - The synchronization store owning one session's state
//! - [`gateway`] - The LLM generation boundary and its HTTP implementation

pub mod codec;
pub mod error;
pub mod gateway;
pub mod prelude;
pub mod projection;
pub mod store;
pub mod workflow;
