use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Span;

use crate::util::text::display_width;

/// A `width` x `height` rect centered in `area`, clamped to fit
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}

/// Pad a span list with background-colored spaces out to `width` cells
pub fn pad_line(spans: &mut Vec<Span>, width: usize, bg: Color) {
    let used: usize = spans.iter().map(|s| display_width(&s.content)).sum();
    if used < width {
        spans.push(Span::styled(" ".repeat(width - used), Style::default().bg(bg)));
    }
}

/// Split a string at a display column (for drawing a cursor mid-field)
pub fn split_at_col(s: &str, col: usize) -> (String, String) {
    use unicode_segmentation::UnicodeSegmentation;

    let mut used = 0;
    for (i, grapheme) in s.grapheme_indices(true) {
        if used >= col {
            return (s[..i].to_string(), s[i..].to_string());
        }
        used += display_width(grapheme);
    }
    (s.to_string(), String::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_at_col_honors_wide_graphemes() {
        assert_eq!(split_at_col("abc", 1), ("a".into(), "bc".into()));
        assert_eq!(split_at_col("abc", 3), ("abc".into(), "".into()));
        assert_eq!(split_at_col("abc", 9), ("abc".into(), "".into()));
        // 日 is two cells wide
        assert_eq!(split_at_col("日本", 2), ("日".into(), "本".into()));
    }
}
