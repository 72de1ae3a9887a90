//! flowchart-ascii — incremental flowchart builder rendered as box-drawing text.
//!
//! Public API: `render()`, `render_with_config()`, `render_script()`.
//!
//! Pipeline: ordered node list → layout engine (grid rectangles) → text
//! renderer (sparse canvas → trimmed lines). The builder and the script
//! parser produce node lists that already satisfy the ordering rules.

pub mod builder;
pub mod config;
pub mod error;
pub mod layout;
pub mod parsers;
pub mod renderers;
pub mod syntax;

#[cfg(feature = "wasm")]
mod wasm;

pub use builder::{FlowchartBuilder, FlowchartState, StepLink, StepSpec};
pub use config::RenderConfig;
pub use error::{Error, Result};
pub use layout::{LayoutResult, compute_positions, compute_positions_with_config};
pub use renderers::{
    CharSet, EMPTY_CANVAS_PLACEHOLDER, NO_NODES_PLACEHOLDER, Renderer, TextRenderer,
};
pub use syntax::types::{Direction, Node, NodeId, NodeKind};

/// Lay out and render `nodes` with the default geometry.
pub fn render(nodes: &[Node]) -> String {
    render_with_config(nodes, &RenderConfig::default())
}

/// Lay out and render `nodes` with a custom config.
pub fn render_with_config(nodes: &[Node], config: &RenderConfig) -> String {
    let layout = compute_positions_with_config(nodes, config);
    TextRenderer::new(config.clone()).render(nodes, &layout)
}

/// Parse a flowchart script and render the resulting flowchart.
pub fn render_script(src: &str, config: &RenderConfig) -> Result<String> {
    let builder = parsers::build_with_config(src, config.clone())?;
    Ok(builder.render())
}
