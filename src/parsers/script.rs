//! Line grammar for flowchart scripts.
//!
//! ```text
//! # comment
//! start <text>
//! step <text> from <id> [down|right] [loop <id>]
//! merge <text> from <id>, <id> [loop <id>]
//! end [from <id>[, <id>...]]
//! delete
//! reset
//! ```
//!
//! Ids are written `3` or `node-3`. A literal `\n` in text forces a line break.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::Parser;
use crate::builder::StepSpec;
use crate::error::{Error, Result};
use crate::syntax::types::{Direction, NodeId};

const ID: &str = r"(?:node-)?\d+";

static START_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^start\s+(?P<text>.+)$").expect("valid start pattern"));

static STEP_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)^step\s+(?P<text>.+?)\s+from\s+(?P<source>{ID})(?:\s+(?P<dir>down|right))?(?:\s+loop\s+(?P<loop>{ID}))?$"
    ))
    .expect("valid step pattern")
});

static MERGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)^merge\s+(?P<text>.+?)\s+from\s+(?P<first>{ID})\s*,\s*(?P<second>{ID})(?:\s+loop\s+(?P<loop>{ID}))?$"
    ))
    .expect("valid merge pattern")
});

static END_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)^end(?:\s+from\s+(?P<sources>{ID}(?:\s*,\s*{ID})*))?$"
    ))
    .expect("valid end pattern")
});

static BARE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(?P<word>delete|reset)$").expect("valid keyword pattern"));

// ─── Command ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Start { text: String },
    Step(StepSpec),
    /// `None` connects the end node to every dangling step.
    End { sources: Option<Vec<NodeId>> },
    Delete,
    Reset,
}

/// A command and the 1-based line it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    pub line: usize,
    pub command: Command,
}

// ─── ScriptParser ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default)]
pub struct ScriptParser;

impl Parser for ScriptParser {
    fn parse(&self, src: &str) -> Result<Vec<Statement>> {
        let mut out = Vec::new();
        for (i, raw) in src.lines().enumerate() {
            let line = i + 1;
            let trimmed = raw.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            let command = parse_line(trimmed, line)?;
            out.push(Statement { line, command });
        }
        Ok(out)
    }
}

fn parse_line(s: &str, line: usize) -> Result<Command> {
    if let Some(caps) = STEP_RE.captures(s) {
        let direction = match caps.name("dir").map(|m| m.as_str().to_ascii_lowercase()) {
            Some(d) if d == "right" => Direction::Right,
            _ => Direction::Down,
        };
        let source = capture_id(&caps, "source", line)?;
        let spec = StepSpec::regular(unescape(&caps["text"]), source, direction);
        return Ok(Command::Step(with_loop(spec, &caps, line)?));
    }
    if let Some(caps) = MERGE_RE.captures(s) {
        let first = capture_id(&caps, "first", line)?;
        let second = capture_id(&caps, "second", line)?;
        let spec = StepSpec::merge(unescape(&caps["text"]), first, second);
        return Ok(Command::Step(with_loop(spec, &caps, line)?));
    }
    if let Some(caps) = START_RE.captures(s) {
        return Ok(Command::Start {
            text: unescape(&caps["text"]),
        });
    }
    if let Some(caps) = END_RE.captures(s) {
        let sources = match caps.name("sources") {
            None => None,
            Some(m) => Some(
                m.as_str()
                    .split(',')
                    .map(|id| parse_id(id.trim(), line))
                    .collect::<Result<Vec<_>>>()?,
            ),
        };
        return Ok(Command::End { sources });
    }
    if let Some(caps) = BARE_RE.captures(s) {
        return Ok(match caps["word"].to_ascii_lowercase().as_str() {
            "delete" => Command::Delete,
            _ => Command::Reset,
        });
    }
    Err(Error::Parse {
        line,
        message: format!("unrecognized command: {s}"),
    })
}

fn with_loop(spec: StepSpec, caps: &Captures<'_>, line: usize) -> Result<StepSpec> {
    match caps.name("loop") {
        Some(m) => Ok(spec.looping_to(parse_id(m.as_str(), line)?)),
        None => Ok(spec),
    }
}

fn capture_id(caps: &Captures<'_>, name: &str, line: usize) -> Result<NodeId> {
    parse_id(&caps[name], line)
}

fn parse_id(s: &str, line: usize) -> Result<NodeId> {
    let digits = s
        .get(..5)
        .filter(|p| p.eq_ignore_ascii_case("node-"))
        .map_or(s, |_| &s[5..]);
    digits.parse::<u32>().map(NodeId).map_err(|_| Error::Parse {
        line,
        message: format!("invalid node id: {s}"),
    })
}

fn unescape(text: &str) -> String {
    text.replace("\\n", "\n")
}

// ─── Tests ───────────────────────────────────────────────────────────────────
