//! Flowchart node model.

pub mod types;

pub use types::{Direction, Node, NodeId, NodeKind};
