//! WASM bindings for flowchart-ascii.
//!
//! Exposes `render` and `renderWithOptions` to JavaScript via wasm-bindgen.

use wasm_bindgen::prelude::*;

use crate::config::RenderConfig;
use crate::renderers::charset::CharSet;

/// Render a flowchart script with default settings.
#[wasm_bindgen]
pub fn render(src: &str) -> Result<String, JsError> {
    crate::render_script(src, &RenderConfig::default()).map_err(|e| JsError::new(&e.to_string()))
}

/// Render a flowchart script, optionally with plain ASCII glyphs.
#[wasm_bindgen(js_name = "renderWithOptions")]
pub fn render_with_options(src: &str, ascii: bool) -> Result<String, JsError> {
    let config = RenderConfig {
        charset: if ascii { CharSet::Ascii } else { CharSet::Unicode },
        ..RenderConfig::default()
    };
    crate::render_script(src, &config).map_err(|e| JsError::new(&e.to_string()))
}
