//! Prelude module for convenient imports
//!
//! Re-exports the most commonly used types from the skein crate. Import this
//! module to get access to the core functionality without having to import
//! each type individually.
//!
//! # Example
//!
//! ```rust
//! use skein::prelude::*;
//!
//! let mut store = WorkflowStore::new();
//! store.load_demo();
//! let graph = store.graph();
//! assert!(!graph.nodes.is_empty());
//! ```

// The synchronization store
pub use crate::store::WorkflowStore;

// Document model
pub use crate::workflow::{
    ConnectionTarget, Connections, NodeOutputs, OutputSlots, SlotTargets, WorkflowDocument,
    WorkflowNode,
};

// Text codec
pub use crate::codec::{parse, serialize};

// Graph projection
pub use crate::projection::{project, GraphEdge, GraphEdit, GraphNode, PresentationGraph};

// Generation gateway
pub use crate::gateway::{HttpGateway, Provider, ProviderConfig, WorkflowGenerator};

// Error types
pub use crate::error::{CodecError, GatewayError, StoreError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
