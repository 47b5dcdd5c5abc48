use ratatui::style::Color;

use crate::model::{Priority, Status, UiConfig};

/// Parsed color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub text_bright: Color,
    pub highlight: Color,
    pub dim: Color,
    pub red: Color,
    pub yellow: Color,
    pub green: Color,
    pub cyan: Color,
    pub blue: Color,
    pub purple: Color,
    pub selection_bg: Color,
    pub search_match_bg: Color,
    pub search_match_fg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: Color::Rgb(0x10, 0x10, 0x18),
            text: Color::Rgb(0xC8, 0xC8, 0xD8),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            highlight: Color::Rgb(0x4D, 0x9C, 0xF5),
            dim: Color::Rgb(0x6A, 0x6A, 0x85),
            red: Color::Rgb(0xE5, 0x48, 0x56),
            yellow: Color::Rgb(0xF0, 0xC6, 0x43),
            green: Color::Rgb(0x4C, 0xC2, 0x6E),
            cyan: Color::Rgb(0x4F, 0xD0, 0xE0),
            blue: Color::Rgb(0x4D, 0x9C, 0xF5),
            purple: Color::Rgb(0xB0, 0x73, 0xEE),
            selection_bg: Color::Rgb(0x2A, 0x2A, 0x45),
            search_match_bg: Color::Rgb(0xF0, 0xC6, 0x43),
            search_match_fg: Color::Rgb(0x10, 0x10, 0x18),
        }
    }
}

/// Parse a hex color string like "#FF4444" into an RGB Color
fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

impl Theme {
    /// Create a theme from the UI config, falling back to defaults
    pub fn from_config(ui: &UiConfig) -> Self {
        let mut theme = Theme::default();

        for (key, value) in &ui.colors {
            if let Some(color) = parse_hex_color(value) {
                match key.as_str() {
                    "background" => theme.background = color,
                    "text" => theme.text = color,
                    "text_bright" => theme.text_bright = color,
                    "highlight" => theme.highlight = color,
                    "dim" => theme.dim = color,
                    "red" => theme.red = color,
                    "yellow" => theme.yellow = color,
                    "green" => theme.green = color,
                    "cyan" => theme.cyan = color,
                    "blue" => theme.blue = color,
                    "purple" => theme.purple = color,
                    "selection_bg" => theme.selection_bg = color,
                    "search_match_bg" => theme.search_match_bg = color,
                    "search_match_fg" => theme.search_match_fg = color,
                    _ => {}
                }
            }
        }

        theme
    }

    /// Color for a task status (open blue, complete green)
    pub fn status_color(&self, status: Status) -> Color {
        match status {
            Status::Open => self.blue,
            Status::Complete => self.green,
        }
    }

    /// Color for a priority (high red, normal blue, low yellow)
    pub fn priority_color(&self, priority: Priority) -> Color {
        match priority {
            Priority::High => self.red,
            Priority::Normal => self.blue,
            Priority::Low => self.yellow,
        }
    }
}
