//! Box-drawing and arrow glyph sets.

// ─── CharSet ─────────────────────────────────────────────────────────────────

/// Which character set to use for box-drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CharSet {
    #[default]
    Unicode,
    Ascii,
}

// ─── BoxChars ─────────────────────────────────────────────────────────────────

/// Unicode or ASCII glyphs for boxes and connections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoxChars {
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    pub horizontal: char,
    pub vertical: char,
    pub tee_up: char, // ┴ where a source run meets the merge line
    pub arrow_right: char,
    pub arrow_down: char,
}

impl BoxChars {
    pub fn unicode() -> Self {
        Self {
            top_left: '┌',
            top_right: '┐',
            bottom_left: '└',
            bottom_right: '┘',
            horizontal: '─',
            vertical: '│',
            tee_up: '┴',
            arrow_right: '►',
            arrow_down: '▼',
        }
    }

    pub fn ascii() -> Self {
        Self {
            top_left: '+',
            top_right: '+',
            bottom_left: '+',
            bottom_right: '+',
            horizontal: '-',
            vertical: '|',
            tee_up: '+',
            arrow_right: '>',
            arrow_down: 'v',
        }
    }

    pub fn for_charset(cs: CharSet) -> Self {
        match cs {
            CharSet::Unicode => Self::unicode(),
            CharSet::Ascii => Self::ascii(),
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
