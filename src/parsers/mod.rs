//! Script parsing — turns a line-oriented command script into builder calls.

pub mod script;

pub use script::{Command, ScriptParser, Statement};

use crate::builder::FlowchartBuilder;
use crate::config::RenderConfig;
use crate::error::{Error, Result};

/// Trait for flowchart script parsers.
pub trait Parser {
    /// Parse the input source into statements, in source order.
    fn parse(&self, src: &str) -> Result<Vec<Statement>>;
}

/// Parse a script with the default parser.
pub fn parse(src: &str) -> Result<Vec<Statement>> {
    ScriptParser.parse(src)
}

/// Parse a script and replay it onto a fresh builder.
pub fn build(src: &str) -> Result<FlowchartBuilder> {
    build_with_config(src, RenderConfig::default())
}

/// Parse a script and replay it onto a builder using `config`.
///
/// The first failing command aborts the replay; its error carries the
/// script line number.
pub fn build_with_config(src: &str, config: RenderConfig) -> Result<FlowchartBuilder> {
    let mut builder = FlowchartBuilder::with_config(config);
    for stmt in parse(src)? {
        apply(&mut builder, stmt.command).map_err(|e| Error::Command {
            line: stmt.line,
            source: Box::new(e),
        })?;
    }
    Ok(builder)
}

fn apply(builder: &mut FlowchartBuilder, command: Command) -> Result<()> {
    match command {
        Command::Start { text } => builder.add_start(&text).map(drop),
        Command::Step(spec) => builder.add_step(spec).map(drop),
        Command::End { sources: Some(sources) } => builder.add_end(sources).map(drop),
        Command::End { sources: None } => builder.add_end_to_dangling().map(drop),
        Command::Delete => builder.delete_last().map(drop),
        Command::Reset => {
            builder.reset();
            Ok(())
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
