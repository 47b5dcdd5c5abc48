use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::tui::app::{App, Mode, Tab};

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;

    let line = if let Some(message) = &app.status_message {
        Line::from(Span::styled(
            format!(" {}", message),
            Style::default().fg(app.theme.green).bg(bg),
        ))
    } else {
        let hint = match app.mode {
            Mode::Navigate if app.tab == Tab::Tasks => {
                if app.config.ui.show_key_hints {
                    " a add  e edit  space toggle  d delete  / search  f filter  r refresh  ? help"
                } else {
                    ""
                }
            }
            Mode::Navigate => {
                if app.config.ui.show_key_hints {
                    " e edit  Ctrl+O photo  1 tasks  q quit"
                } else {
                    ""
                }
            }
            Mode::Search => " typing narrows the list  Enter keep  Esc clear",
            Mode::Form => " Enter save  Esc cancel  Tab next field",
            Mode::Profile => " Enter save  Esc back  Ctrl+O choose photo",
        };
        Line::from(Span::styled(
            hint,
            Style::default().fg(app.theme.dim).bg(bg),
        ))
    };

    let paragraph = Paragraph::new(line).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
