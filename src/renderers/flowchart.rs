//! Text renderer — paints node boxes, fitted text and connections onto a
//! sparse canvas, then serializes it.
//!
//! Paint order is fixed: every box with its text first, then every node's
//! inbound connections. Connections overwrite box borders where they touch.

use std::collections::HashMap;

use tracing::debug;

use super::canvas::Canvas;
use super::charset::BoxChars;
use super::text::{center, truncate};
use super::{EMPTY_CANVAS_PLACEHOLDER, NO_NODES_PLACEHOLDER, Renderer};
use crate::config::RenderConfig;
use crate::layout::types::{LayoutResult, Rect};
use crate::syntax::types::{Direction, Node, NodeId};

/// Prefix of the in-box loop annotation line.
pub const LOOP_PREFIX: &str = "*Loop to: ";

/// Renders a flowchart layout to text using box-drawing characters.
#[derive(Debug, Clone, Default)]
pub struct TextRenderer {
    pub config: RenderConfig,
}

impl TextRenderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }
}

impl Renderer for TextRenderer {
    fn render(&self, nodes: &[Node], layout: &LayoutResult) -> String {
        if layout.is_empty() {
            return NO_NODES_PLACEHOLDER.to_string();
        }
        let bc = BoxChars::for_charset(self.config.charset);
        let labels: HashMap<NodeId, &str> = nodes.iter().map(|n| (n.id, n.label())).collect();
        let mut canvas = Canvas::new();

        for node in nodes {
            let Some(placed) = layout.get(node.id) else {
                continue;
            };
            let rect = placed.rect();
            canvas.draw_box(rect, &bc);
            paint_text(&mut canvas, rect, &box_lines(node, &labels));
        }

        for node in nodes {
            paint_connections(&mut canvas, node, layout, &self.config, &bc);
        }

        if canvas.is_empty() {
            debug!(nodes = layout.len(), "nothing painted");
            return EMPTY_CANVAS_PLACEHOLDER.to_string();
        }
        canvas.render_to_string()
    }
}

// ─── Node text ────────────────────────────────────────────────────────────────

/// The node's lines plus its loop annotation, if the target can be named.
fn box_lines(node: &Node, labels: &HashMap<NodeId, &str>) -> Vec<String> {
    let mut lines = node.lines.clone();
    if let Some(target) = node.loop_target {
        match labels.get(&target) {
            Some(label) if !label.is_empty() => lines.push(format!("{LOOP_PREFIX}{label}")),
            _ => debug!(node = %node.id, %target, "loop target has no label, annotation skipped"),
        }
    }
    lines
}

/// Truncate, center and vertically center `lines` inside `rect`.
fn paint_text(canvas: &mut Canvas, rect: Rect, lines: &[String]) {
    let inner_w = (rect.width - 2).max(0) as usize;
    let start_y = rect.y + (rect.height - lines.len() as i64).div_euclid(2);
    for (i, line) in lines.iter().enumerate() {
        let display = center(&truncate(line, inner_w), inner_w);
        canvas.write_str(rect.x + 1, start_y + i as i64, &display);
    }
}

// ─── Connections ──────────────────────────────────────────────────────────────

fn paint_connections(
    canvas: &mut Canvas,
    node: &Node,
    layout: &LayoutResult,
    config: &RenderConfig,
    bc: &BoxChars,
) {
    let Some(target) = layout.rect(node.id) else {
        return;
    };
    match node.connections.as_slice() {
        [] => {}
        [source] => match layout.rect(*source) {
            Some(src) => paint_single(canvas, src, target, node.direction, bc),
            None => debug!(node = %node.id, %source, "source has no position, edge skipped"),
        },
        many => {
            let sources: Vec<Rect> = many.iter().filter_map(|&id| layout.rect(id)).collect();
            match sources.as_slice() {
                [] => debug!(node = %node.id, "no placed sources, edges skipped"),
                [only] => paint_single(canvas, *only, target, Direction::Down, bc),
                _ => paint_merge(canvas, &sources, target, config.vertical_gap(), bc),
            }
        }
    }
}

/// Straight run from `src` to `target`, arrow in the last gap cell.
fn paint_single(canvas: &mut Canvas, src: Rect, target: Rect, direction: Direction, bc: &BoxChars) {
    match direction {
        Direction::Down => {
            let x = src.center_x();
            canvas.vline(x, src.bottom()..target.y, bc.vertical);
            if target.y > src.bottom() {
                canvas.set(x, target.y - 1, bc.arrow_down);
            }
        }
        Direction::Right => {
            let y = src.center_y();
            canvas.hline(y, src.right()..target.x, bc.horizontal);
            if target.x > src.right() {
                canvas.set(target.x - 1, y, bc.arrow_right);
            }
        }
    }
}

/// Sources drop onto a shared merge row, one run descends into `target`.
fn paint_merge(canvas: &mut Canvas, sources: &[Rect], target: Rect, v_gap: i64, bc: &BoxChars) {
    let merge_y = target.y - v_gap / 2 - 1;
    let centers: Vec<i64> = sources.iter().map(Rect::center_x).collect();
    let (Some(&min_x), Some(&max_x)) = (centers.iter().min(), centers.iter().max()) else {
        return;
    };
    canvas.hline(merge_y, min_x..max_x + 1, bc.horizontal);

    for src in sources {
        let x = src.center_x();
        canvas.vline(x, src.bottom()..merge_y, bc.vertical);
        canvas.set(x, merge_y, bc.tee_up);
    }

    let x = target.center_x();
    canvas.vline(x, merge_y + 1..target.y, bc.vertical);
    canvas.set(x, target.y - 1, bc.arrow_down);
}

// ─── Tests ───────────────────────────────────────────────────────────────────
