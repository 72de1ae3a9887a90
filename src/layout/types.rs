//! Layout types: Point, Rect, LayoutNode, LayoutResult.

use std::collections::HashMap;

use crate::syntax::types::NodeId;

// ─── Point ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

// ─── Rect ────────────────────────────────────────────────────────────────────

/// A rectangle in character-grid coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
}

impl Rect {
    pub fn new(x: i64, y: i64, width: i64, height: i64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> i64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> i64 {
        self.y + self.height
    }

    pub fn center_x(&self) -> i64 {
        self.x + self.width / 2
    }

    pub fn center_y(&self) -> i64 {
        self.y + self.height / 2
    }

    /// Fixed-size box test: origins closer than one box in both axes.
    ///
    /// Uses this rectangle's width/height for both operands, which is exact
    /// while every node shares the same box size.
    pub fn overlaps(&self, other: &Rect) -> bool {
        (self.x - other.x).abs() < self.width && (self.y - other.y).abs() < self.height
    }
}

// ─── LayoutNode ──────────────────────────────────────────────────────────────

/// A node with its computed grid rectangle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutNode {
    pub id: NodeId,
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
}

impl LayoutNode {
    pub fn new(id: NodeId, rect: Rect) -> Self {
        Self {
            id,
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

// ─── LayoutResult ────────────────────────────────────────────────────────────

/// Positions of every placed node, kept in placement order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutResult {
    pub nodes: Vec<LayoutNode>,
    index: HashMap<NodeId, usize>,
}

impl LayoutResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a node's rectangle. A repeated id replaces the earlier entry.
    pub fn insert(&mut self, id: NodeId, rect: Rect) {
        let node = LayoutNode::new(id, rect);
        match self.index.get(&id) {
            Some(&i) => self.nodes[i] = node,
            None => {
                self.index.insert(id, self.nodes.len());
                self.nodes.push(node);
            }
        }
    }

    pub fn get(&self, id: NodeId) -> Option<&LayoutNode> {
        self.index.get(&id).map(|&i| &self.nodes[i])
    }

    pub fn rect(&self, id: NodeId) -> Option<Rect> {
        self.get(id).map(LayoutNode::rect)
    }

    pub fn position(&self, id: NodeId) -> Option<Point> {
        self.get(id).map(LayoutNode::position)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.index.contains_key(&id)
    }

    /// Plain `id → top-left` mapping.
    pub fn positions(&self) -> HashMap<NodeId, Point> {
        self.nodes.iter().map(|n| (n.id, n.position())).collect()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
