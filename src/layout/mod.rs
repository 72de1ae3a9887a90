//! Layout engine — assigns every node a fixed-size grid rectangle.
//!
//! Nodes are placed strictly in list order, so each node's sources are
//! already frozen when it is placed. A placed node is never moved again.

pub mod graph;
pub mod types;

pub use graph::FlowGraph;
pub use types::{LayoutNode, LayoutResult, Point, Rect};

use tracing::{debug, trace};

use crate::config::RenderConfig;
use crate::syntax::types::{Direction, Node};

/// Compute positions with the default box geometry.
pub fn compute_positions(nodes: &[Node]) -> LayoutResult {
    compute_positions_with_config(nodes, &RenderConfig::default())
}

/// Compute positions with a custom config.
///
/// Pure function of `nodes`: the same list always yields the same layout.
pub fn compute_positions_with_config(nodes: &[Node], config: &RenderConfig) -> LayoutResult {
    let mut layout = LayoutResult::new();
    for (i, node) in nodes.iter().enumerate() {
        let origin = if i == 0 {
            Point::new(0, 0)
        } else {
            initial_position(node, &layout, config)
        };
        let rect = Rect::new(origin.x, origin.y, config.width(), config.height());
        let rect = resolve_overlap(node, rect, &layout);
        trace!(node = %node.id, x = rect.x, y = rect.y, "placed node");
        layout.insert(node.id, rect);
    }
    layout
}

// ─── Private helpers ──────────────────────────────────────────────────────────

/// Position derived from the node's sources, before overlap resolution.
fn initial_position(node: &Node, layout: &LayoutResult, config: &RenderConfig) -> Point {
    let sources: Vec<Rect> = node
        .connections
        .iter()
        .filter_map(|&source| {
            let rect = layout.rect(source);
            if rect.is_none() {
                debug!(node = %node.id, %source, "source has no position, skipped");
            }
            rect
        })
        .collect();

    match node.connections.len() {
        0 => Point::new(0, 0),
        1 => match sources.first() {
            Some(source) => beside(source, node.direction, config),
            None => Point::new(0, 0),
        },
        _ => below_all(&sources, config).unwrap_or(Point::new(0, 0)),
    }
}

fn beside(source: &Rect, direction: Direction, config: &RenderConfig) -> Point {
    match direction {
        Direction::Down => Point::new(source.x, source.bottom() + config.vertical_gap()),
        Direction::Right => Point::new(source.right() + config.horizontal_gap(), source.y),
    }
}

/// Floor-averaged x of the sources, one gap below the lowest source bottom.
fn below_all(sources: &[Rect], config: &RenderConfig) -> Option<Point> {
    let lowest = sources.iter().map(Rect::bottom).max()?;
    let sum: i64 = sources.iter().map(|r| r.x).sum();
    let avg_x = sum.div_euclid(sources.len() as i64);
    Some(Point::new(avg_x, lowest + config.vertical_gap()))
}

/// Push `rect` down one row at a time until it clears every placed node.
fn resolve_overlap(node: &Node, mut rect: Rect, layout: &LayoutResult) -> Rect {
    let start_y = rect.y;
    while layout
        .nodes
        .iter()
        .any(|placed| placed.id != node.id && rect.overlaps(&placed.rect()))
    {
        rect.y += 1;
    }
    if rect.y != start_y {
        debug!(node = %node.id, from = start_y, to = rect.y, "moved down to clear overlap");
    }
    rect
}

// ─── Tests ───────────────────────────────────────────────────────────────────
