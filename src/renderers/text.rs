//! Text fitting: wrap raw input into box-sized lines, truncate and center them.

/// Wrap `text` to lines of at most `width` characters.
///
/// Explicit newlines split first. Each piece is then filled greedily word by
/// word. A word longer than `width` is hard-broken: its head fills whatever
/// room is left on the current line and the rest is cut into `width`-sized
/// chunks, the last of which may take following words. Blank pieces produce
/// no line.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut out = Vec::new();

    for line in text.lines() {
        let mut current = String::new();
        let mut current_len = 0usize;

        for word in line.split_whitespace() {
            let word_len = word.chars().count();
            let needed = if current_len == 0 {
                word_len
            } else {
                current_len + 1 + word_len
            };
            if needed <= width {
                if current_len > 0 {
                    current.push(' ');
                }
                current.push_str(word);
                current_len = needed;
                continue;
            }
            if word_len <= width {
                out.push(std::mem::take(&mut current));
                current.push_str(word);
                current_len = word_len;
                continue;
            }

            let chars: Vec<char> = word.chars().collect();
            let mut rest = chars.as_slice();
            if current_len > 0 {
                let space_left = width.saturating_sub(current_len + 1);
                if space_left > 0 {
                    current.push(' ');
                    current.extend(&rest[..space_left]);
                    rest = &rest[space_left..];
                }
                out.push(std::mem::take(&mut current));
                current_len = 0;
            }
            let mut chunks = rest.chunks(width).peekable();
            while let Some(chunk) = chunks.next() {
                let piece: String = chunk.iter().collect();
                if chunks.peek().is_some() {
                    out.push(piece);
                } else {
                    current_len = chunk.len();
                    current = piece;
                }
            }
        }

        if current_len > 0 {
            out.push(current);
        }
    }
    out
}

/// Wrap and keep only the first `max_lines` lines.
pub fn fit_text(text: &str, width: usize, max_lines: usize) -> Vec<String> {
    let mut lines = wrap_text(text, width);
    lines.truncate(max_lines);
    lines
}

/// First `width` characters of `line`.
pub fn truncate(line: &str, width: usize) -> String {
    line.chars().take(width).collect()
}

/// Center `line` in a field of `width` characters.
///
/// When the padding is odd and the field width is odd, the extra space goes
/// on the left; otherwise on the right. Lines at least `width` long are
/// returned unchanged.
pub fn center(line: &str, width: usize) -> String {
    let len = line.chars().count();
    if len >= width {
        return line.to_string();
    }
    let margin = width - len;
    let left = margin / 2 + (margin & width & 1);
    let right = margin - left;
    format!("{}{}{}", " ".repeat(left), line, " ".repeat(right))
}

// ─── Tests ───────────────────────────────────────────────────────────────────
