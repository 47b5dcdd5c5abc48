use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::tui::app::App;

use super::helpers::centered_rect;

/// Render the blocking alert. Input is intercepted until it is dismissed.
pub fn render_alert_popup(frame: &mut Frame, app: &App, area: Rect) {
    let alert = match &app.alert {
        Some(alert) => alert,
        None => return,
    };

    let bg = app.theme.background;
    let rect = centered_rect(44, 8, area);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", alert.title),
            Style::default()
                .fg(app.theme.red)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", alert.message),
            Style::default().fg(app.theme.text_bright).bg(bg),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "  Enter dismiss",
            Style::default().fg(app.theme.dim).bg(bg),
        )),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.red).bg(bg))
        .style(Style::default().bg(bg));

    frame.render_widget(Clear, rect);
    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }).block(block),
        rect,
    );
}
