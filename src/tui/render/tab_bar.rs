use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::tasks::StatusFilter;
use crate::tui::app::{App, Tab};
use crate::util::text::display_width;

/// Render the tab bar: Tasks and Profile tabs, with separator line below
pub fn render_tab_bar(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // tabs
            Constraint::Length(1), // separator
        ])
        .split(area);

    let sep_cols = render_tabs(frame, app, chunks[0]);
    render_separator(frame, app, chunks[1], &sep_cols);
}

/// Render tabs and return the column positions of each separator character
fn render_tabs(frame: &mut Frame, app: &App, area: Rect) -> Vec<usize> {
    let bg_style = Style::default().bg(app.theme.background);
    let mut spans: Vec<Span> = Vec::new();
    let mut sep_cols: Vec<usize> = Vec::new();
    let sep = Span::styled(
        "\u{2502}",
        Style::default().fg(app.theme.dim).bg(app.theme.background),
    );

    // Leading icon
    spans.push(Span::styled(" ", bg_style));
    spans.push(Span::styled(
        "\u{25B6}",
        Style::default()
            .fg(app.theme.purple)
            .bg(app.theme.background),
    ));
    spans.push(Span::styled(" ", bg_style));

    for (tab, name) in [(Tab::Tasks, "Tasks"), (Tab::Profile, "Profile")] {
        let is_current = app.tab == tab;
        spans.push(Span::styled(format!(" {} ", name), tab_style(app, is_current)));
        sep_cols.push(spans.iter().map(|s| display_width(&s.content)).sum());
        spans.push(sep.clone());
    }

    let tabs = Paragraph::new(Line::from(spans)).style(bg_style);
    frame.render_widget(tabs, area);
    sep_cols
}

/// The separator row carries the active filter/search indicator on its
/// right edge when the Tasks tab has a constraint applied
fn render_separator(frame: &mut Frame, app: &App, area: Rect, sep_cols: &[usize]) {
    let width = area.width as usize;
    let bg = app.theme.background;
    let dim = app.theme.dim;

    let mut indicator_spans: Vec<Span> = Vec::new();
    if app.tab == Tab::Tasks {
        if app.filter != StatusFilter::All {
            indicator_spans.push(Span::styled(
                "filter: ",
                Style::default().fg(app.theme.purple).bg(bg),
            ));
            indicator_spans.push(Span::styled(
                app.filter.label(),
                Style::default().fg(app.theme.highlight).bg(bg),
            ));
        }
        if !app.search.text().trim().is_empty() {
            if !indicator_spans.is_empty() {
                indicator_spans.push(Span::styled("  ", Style::default().bg(bg)));
            }
            indicator_spans.push(Span::styled(
                format!("/{}", app.search.text()),
                Style::default().fg(app.theme.yellow).bg(bg),
            ));
        }
    }

    if indicator_spans.is_empty() {
        let mut line = String::with_capacity(width * 3);
        for col in 0..width {
            if sep_cols.contains(&col) {
                line.push('\u{2534}');
            } else {
                line.push('\u{2500}');
            }
        }
        let widget = Paragraph::new(line).style(Style::default().fg(dim).bg(bg));
        frame.render_widget(widget, area);
        return;
    }

    let indicator_width: usize = indicator_spans
        .iter()
        .map(|s| display_width(&s.content))
        .sum();
    let separator_end = width.saturating_sub(indicator_width + 2);

    let mut spans: Vec<Span> = Vec::new();
    let mut sep_text = String::with_capacity(separator_end * 3);
    for col in 0..separator_end {
        if sep_cols.contains(&col) {
            sep_text.push('\u{2534}');
        } else {
            sep_text.push('\u{2500}');
        }
    }
    spans.push(Span::styled(sep_text, Style::default().fg(dim).bg(bg)));
    spans.push(Span::styled(" ", Style::default().bg(bg)));
    spans.extend(indicator_spans);
    spans.push(Span::styled(" ", Style::default().bg(bg)));

    let widget = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(widget, area);
}

/// Style for a tab: highlighted if current, normal otherwise
fn tab_style(app: &App, is_current: bool) -> Style {
    if is_current {
        Style::default()
            .fg(app.theme.text_bright)
            .bg(app.theme.selection_bg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(app.theme.text).bg(app.theme.background)
    }
}
