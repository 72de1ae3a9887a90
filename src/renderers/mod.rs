//! Renderer trait and the text renderer.

pub mod canvas;
pub mod charset;
pub mod flowchart;
pub mod text;

pub use canvas::Canvas;
pub use charset::{BoxChars, CharSet};
pub use flowchart::TextRenderer;

use crate::layout::types::LayoutResult;
use crate::syntax::types::Node;

/// Output for a flowchart with no placed nodes.
pub const NO_NODES_PLACEHOLDER: &str = "No nodes to render.";

/// Output for placed nodes too small to paint anything.
pub const EMPTY_CANVAS_PLACEHOLDER: &str = "Empty flowchart.";

/// Trait for flowchart renderers.
pub trait Renderer {
    /// Render a laid-out node list to a string.
    fn render(&self, nodes: &[Node], layout: &LayoutResult) -> String;
}
