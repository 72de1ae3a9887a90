//! Canvas — sparse character grid for painting the diagram.
//!
//! Cells are keyed by `(x, y)`; an absent cell reads as a blank. Later writes
//! overwrite earlier ones.

use std::collections::HashMap;

use super::charset::BoxChars;
use crate::layout::types::Rect;

// ─── Canvas ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default)]
pub struct Canvas {
    cells: HashMap<(i64, i64), char>,
}

impl Canvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, x: i64, y: i64) -> char {
        self.cells.get(&(x, y)).copied().unwrap_or(' ')
    }

    pub fn set(&mut self, x: i64, y: i64, ch: char) {
        self.cells.insert((x, y), ch);
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Draw a horizontal run over `x_range` at row `y`.
    pub fn hline(&mut self, y: i64, x_range: std::ops::Range<i64>, ch: char) {
        for x in x_range {
            self.set(x, y, ch);
        }
    }

    /// Draw a vertical run over `y_range` at column `x`.
    pub fn vline(&mut self, x: i64, y_range: std::ops::Range<i64>, ch: char) {
        for y in y_range {
            self.set(x, y, ch);
        }
    }

    /// Draw a box outline using box-drawing characters from BoxChars.
    pub fn draw_box(&mut self, rect: Rect, bc: &BoxChars) {
        if rect.width < 2 || rect.height < 2 {
            return;
        }
        let (x0, y0) = (rect.x, rect.y);
        let (x1, y1) = (rect.right() - 1, rect.bottom() - 1);
        self.set(x0, y0, bc.top_left);
        self.set(x1, y0, bc.top_right);
        self.set(x0, y1, bc.bottom_left);
        self.set(x1, y1, bc.bottom_right);
        self.hline(y0, x0 + 1..x1, bc.horizontal);
        self.hline(y1, x0 + 1..x1, bc.horizontal);
        self.vline(x0, y0 + 1..y1, bc.vertical);
        self.vline(x1, y0 + 1..y1, bc.vertical);
    }

    /// Write the non-blank characters of `s` starting at `(x, y)`.
    ///
    /// Spaces are skipped, so whatever is already under them stays.
    pub fn write_str(&mut self, x: i64, y: i64, s: &str) {
        for (i, ch) in s.chars().enumerate() {
            if ch != ' ' {
                self.set(x + i as i64, y, ch);
            }
        }
    }

    /// Serialize rows `0..=max_y`, right-trimmed and joined with `\n`.
    ///
    /// Cells at negative coordinates are not emitted.
    pub fn render_to_string(&self) -> String {
        let Some(max_x) = self.cells.keys().map(|&(x, _)| x).max() else {
            return String::new();
        };
        let max_y = self.cells.keys().map(|&(_, y)| y).max().unwrap_or(0);

        (0..=max_y)
            .map(|y| {
                let row: String = (0..=max_x).map(|x| self.get(x, y)).collect();
                row.trim_end_matches(' ').to_string()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl std::fmt::Display for Canvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render_to_string())
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canvas_set_get() {
        let mut c = Canvas::new();
        c.set(2, 3, 'X');
        assert_eq!(c.get(2, 3), 'X');
        assert_eq!(c.get(0, 0), ' ');
    }

    #[test]
    fn test_canvas_set_overwrites() {
        let mut c = Canvas::new();
        c.set(1, 1, '─');
        c.set(1, 1, '┴');
        assert_eq!(c.get(1, 1), '┴');
    }

    #[test]
    fn test_canvas_hline_is_half_open() {
        let mut c = Canvas::new();
        c.hline(2, 1..5, '-');
        for x in 1..5 {
            assert_eq!(c.get(x, 2), '-');
        }
        assert_eq!(c.get(0, 2), ' ');
        assert_eq!(c.get(5, 2), ' ');
    }

    #[test]
    fn test_canvas_vline_empty_range() {
        let mut c = Canvas::new();
        c.vline(3, 4..4, '|');
        assert!(c.is_empty());
    }

    #[test]
    fn test_canvas_write_str_skips_spaces() {
        let mut c = Canvas::new();
        c.set(2, 0, '#');
        c.write_str(1, 0, "a b");
        assert_eq!(c.get(1, 0), 'a');
        assert_eq!(c.get(2, 0), '#');
        assert_eq!(c.get(3, 0), 'b');
    }

    #[test]
    fn test_canvas_draw_box() {
        let mut c = Canvas::new();
        let bc = BoxChars::unicode();
        c.draw_box(Rect::new(0, 0, 5, 3), &bc);
        assert_eq!(c.get(0, 0), '┌');
        assert_eq!(c.get(4, 0), '┐');
        assert_eq!(c.get(0, 2), '└');
        assert_eq!(c.get(4, 2), '┘');
        assert_eq!(c.get(1, 0), '─');
        assert_eq!(c.get(0, 1), '│');
        assert_eq!(c.get(2, 1), ' ');
    }

    #[test]
    fn test_canvas_to_string_trims() {
        let mut c = Canvas::new();
        c.set(0, 0, 'A');
        c.set(4, 1, 'B');
        assert_eq!(c.to_string(), "A\n    B");
    }

    #[test]
    fn test_canvas_to_string_keeps_blank_rows() {
        let mut c = Canvas::new();
        c.set(0, 2, 'Z');
        assert_eq!(c.render_to_string(), "\n\nZ");
    }

    #[test]
    fn test_empty_canvas_renders_empty() {
        assert_eq!(Canvas::new().render_to_string(), "");
    }
}
