//! Data structures for the flowchart node list.
//!
//! A flowchart is an ordered `Vec<Node>`: the start node first, every
//! connection pointing at a node that appears earlier in the list.

use std::fmt;

// ─── NodeId ──────────────────────────────────────────────────────────────────

/// Identifier issued once per node; displayed as `node-N`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub u32);

impl NodeId {
    pub fn number(self) -> u32 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node-{}", self.0)
    }
}

// ─── NodeKind ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NodeKind {
    #[default]
    Regular,
    /// Two distinct inbound connections joined by a horizontal merge line.
    Merge,
}

// ─── Direction ───────────────────────────────────────────────────────────────

/// Placement of a single-source node relative to its source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Down,
    Right,
}

// ─── Node ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub id: NodeId,
    /// Fitted text lines, at most two.
    pub lines: Vec<String>,
    pub kind: NodeKind,
    /// Source node ids this node receives from, in declaration order.
    pub connections: Vec<NodeId>,
    /// Only meaningful when `connections` has exactly one entry.
    pub direction: Direction,
    /// Earlier node this step loops back to; drawn as text, never as an edge.
    pub loop_target: Option<NodeId>,
    pub is_end: bool,
}

impl Node {
    /// The start node: no connections.
    pub fn start(id: NodeId, lines: Vec<String>) -> Self {
        Self {
            id,
            lines,
            kind: NodeKind::Regular,
            connections: Vec::new(),
            direction: Direction::Down,
            loop_target: None,
            is_end: false,
        }
    }

    pub fn step(id: NodeId, lines: Vec<String>, source: NodeId, direction: Direction) -> Self {
        Self {
            id,
            lines,
            kind: NodeKind::Regular,
            connections: vec![source],
            direction,
            loop_target: None,
            is_end: false,
        }
    }

    pub fn merge(id: NodeId, lines: Vec<String>, first: NodeId, second: NodeId) -> Self {
        Self {
            id,
            lines,
            kind: NodeKind::Merge,
            connections: vec![first, second],
            direction: Direction::Down,
            loop_target: None,
            is_end: false,
        }
    }

    /// The terminal node, fed by one or more sources.
    pub fn end(id: NodeId, sources: Vec<NodeId>) -> Self {
        Self {
            id,
            lines: vec![END_TEXT.to_string()],
            kind: NodeKind::Regular,
            connections: sources,
            direction: Direction::Down,
            loop_target: None,
            is_end: true,
        }
    }

    pub fn with_loop(mut self, target: NodeId) -> Self {
        self.loop_target = Some(target);
        self
    }

    pub fn is_loop(&self) -> bool {
        self.loop_target.is_some()
    }

    pub fn is_start(&self) -> bool {
        self.connections.is_empty()
    }

    /// First text line, used wherever another node refers to this one by name.
    pub fn label(&self) -> &str {
        self.lines.first().map(String::as_str).unwrap_or("")
    }

    /// Label shown in source pickers, e.g. `Begin (ID: 1)`.
    pub fn display_text(&self) -> String {
        format!("{} (ID: {})", self.label(), self.id.number())
    }
}

/// Text of the node appended by `end`.
pub const END_TEXT: &str = "End of Flowchart";

// ─── Tests ───────────────────────────────────────────────────────────────────
