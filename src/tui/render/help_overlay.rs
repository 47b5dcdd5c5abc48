use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::tui::app::App;

use super::helpers::centered_rect;

const KEYS: &[(&str, &str)] = &[
    ("j / k", "move"),
    ("a", "add task"),
    ("e / Enter", "edit task"),
    ("space / x", "toggle complete"),
    ("d", "delete task"),
    ("/", "search"),
    ("f", "cycle status filter"),
    ("r", "refresh"),
    ("1 / 2 / Tab", "switch tab"),
    ("q", "quit"),
];

/// Render the help overlay; any key dismisses it
pub fn render_help_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let rect = centered_rect(40, KEYS.len() as u16 + 5, area);

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Keys",
        Style::default()
            .fg(app.theme.text_bright)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));

    for (key, action) in KEYS {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {:<14}", key),
                Style::default().fg(app.theme.cyan).bg(bg),
            ),
            Span::styled(*action, Style::default().fg(app.theme.text).bg(bg)),
        ]));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.dim).bg(bg))
        .style(Style::default().bg(bg));

    frame.render_widget(Clear, rect);
    frame.render_widget(Paragraph::new(lines).block(block), rect);
}
