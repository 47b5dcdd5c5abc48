pub mod alert_popup;
pub mod help_overlay;
pub mod helpers;
pub mod login_view;
pub mod profile_view;
pub mod status_row;
pub mod tab_bar;
pub mod task_form;
pub mod tasks_view;
#[cfg(test)]
pub mod test_helpers;

use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::text::Span;
use ratatui::widgets::Block;
use ratatui::Frame;
use regex::Regex;

use super::app::{App, Tab};

/// Main render function, dispatching to sub-renderers
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    if !app.session.is_authenticated() {
        login_view::render_login_view(frame, app, area);
    } else {
        // Layout: tab bar (2 rows) | content | status row (1 row)
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Min(1),
                Constraint::Length(1),
            ])
            .split(area);

        tab_bar::render_tab_bar(frame, app, chunks[0]);

        match app.tab {
            Tab::Tasks => tasks_view::render_tasks_view(frame, app, chunks[1]),
            Tab::Profile => profile_view::render_profile_view(frame, app, chunks[1]),
        }

        status_row::render_status_row(frame, app, chunks[2]);

        // Task form popup (rendered over the content)
        if app.form.is_some() {
            task_form::render_task_form(frame, app, area);
        }
    }

    // Help overlay
    if app.show_help {
        help_overlay::render_help_overlay(frame, app, area);
    }

    // Blocking alert, always on top
    if app.alert.is_some() {
        alert_popup::render_alert_popup(frame, app, area);
    }
}

/// Split `text` into spans, highlighting regex matches. Pushes one plain
/// span when there is no regex or no match.
pub(super) fn push_highlighted_spans<'a>(
    spans: &mut Vec<Span<'a>>,
    text: &str,
    base_style: Style,
    highlight_style: Style,
    search_re: Option<&Regex>,
) {
    let re = match search_re {
        Some(re) => re,
        None => {
            spans.push(Span::styled(text.to_string(), base_style));
            return;
        }
    };

    let mut last_end = 0;
    for m in re.find_iter(text) {
        if m.start() > last_end {
            spans.push(Span::styled(text[last_end..m.start()].to_string(), base_style));
        }
        spans.push(Span::styled(
            text[m.start()..m.end()].to_string(),
            highlight_style,
        ));
        last_end = m.end();
    }
    if last_end == 0 {
        spans.push(Span::styled(text.to_string(), base_style));
    } else if last_end < text.len() {
        spans.push(Span::styled(text[last_end..].to_string(), base_style));
    }
}
