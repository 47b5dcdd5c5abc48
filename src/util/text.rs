//! Unicode-aware helpers for single-line text fields.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Terminal cell width of a string
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Truncate to at most `max_cells` display cells, appending `…` when
/// anything was cut.
pub fn truncate_to_width(s: &str, max_cells: usize) -> String {
    if display_width(s) <= max_cells {
        return s.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for grapheme in s.graphemes(true) {
        let w = display_width(grapheme);
        if used + w > max_cells.saturating_sub(1) {
            break;
        }
        out.push_str(grapheme);
        used += w;
    }
    out.push('\u{2026}');
    out
}

/// A single-line text field: content plus a cursor at a grapheme boundary
/// (stored as a byte offset).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditBuffer {
    text: String,
    cursor: usize,
}

impl EditBuffer {
    pub fn new() -> Self {
        EditBuffer::default()
    }

    /// A buffer seeded with text, cursor at the end
    pub fn with_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.len();
        EditBuffer { text, cursor }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn set(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor = self.text.len();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Remove the grapheme before the cursor
    pub fn backspace(&mut self) {
        if let Some(prev) = prev_grapheme_boundary(&self.text, self.cursor) {
            self.text.replace_range(prev..self.cursor, "");
            self.cursor = prev;
        }
    }

    pub fn move_left(&mut self) {
        if let Some(prev) = prev_grapheme_boundary(&self.text, self.cursor) {
            self.cursor = prev;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(next) = next_grapheme_boundary(&self.text, self.cursor) {
            self.cursor = next;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    /// Display column of the cursor, for rendering
    pub fn cursor_col(&self) -> usize {
        display_width(&self.text[..self.cursor])
    }

    /// Characters before the cursor (for masked rendering, where every
    /// character draws as one mask cell)
    pub fn chars_before_cursor(&self) -> usize {
        self.text[..self.cursor].chars().count()
    }
}

/// Byte offset of the grapheme boundary after `byte_offset`, if any
fn next_grapheme_boundary(s: &str, byte_offset: usize) -> Option<usize> {
    s[byte_offset..]
        .grapheme_indices(true)
        .next()
        .map(|(_, g)| byte_offset + g.len())
}

/// Byte offset of the grapheme boundary before `byte_offset`, if any
fn prev_grapheme_boundary(s: &str, byte_offset: usize) -> Option<usize> {
    s[..byte_offset]
        .grapheme_indices(true)
        .next_back()
        .map(|(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typing_and_backspace() {
        let mut buf = EditBuffer::new();
        for c in "héllo".chars() {
            buf.insert_char(c);
        }
        assert_eq!(buf.text(), "héllo");
        buf.backspace();
        buf.backspace();
        assert_eq!(buf.text(), "hél");
    }

    #[test]
    fn backspace_removes_a_full_grapheme() {
        // é as e + combining acute: one grapheme, two chars
        let mut buf = EditBuffer::with_text("xe\u{301}");
        buf.backspace();
        assert_eq!(buf.text(), "x");
    }

    #[test]
    fn insert_in_the_middle() {
        let mut buf = EditBuffer::with_text("ab");
        buf.move_left();
        buf.insert_char('x');
        assert_eq!(buf.text(), "axb");
    }

    #[test]
    fn cursor_movement_clamps_at_the_ends() {
        let mut buf = EditBuffer::with_text("a");
        buf.move_right();
        buf.move_right();
        assert_eq!(buf.cursor_col(), 1);
        buf.move_left();
        buf.move_left();
        buf.move_left();
        assert_eq!(buf.cursor_col(), 0);
        buf.backspace(); // at offset 0: no-op
        assert_eq!(buf.text(), "a");
    }

    #[test]
    fn truncate_appends_an_ellipsis() {
        assert_eq!(truncate_to_width("hello", 10), "hello");
        assert_eq!(truncate_to_width("hello world", 6), "hello\u{2026}");
    }

    #[test]
    fn wide_characters_count_two_cells() {
        assert_eq!(display_width("日本"), 4);
        let buf = EditBuffer::with_text("日本");
        assert_eq!(buf.cursor_col(), 4);
    }
}
