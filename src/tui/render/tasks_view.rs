use chrono::Local;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::model::{Status, Task};
use crate::tasks::StatusFilter;
use crate::tui::app::{App, Mode};
use crate::util::text::display_width;

use super::helpers::pad_line;
use super::push_highlighted_spans;

/// Render the Tasks tab: search row, filter row, then the derived view
pub fn render_tasks_view(frame: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // search row
            Constraint::Length(1), // filter row
            Constraint::Min(1),    // list
        ])
        .split(area);

    render_search_row(frame, app, chunks[0]);
    render_filter_row(frame, app, chunks[1]);
    render_list(frame, app, chunks[2]);
}

fn render_search_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let mut spans: Vec<Span> = Vec::new();

    spans.push(Span::styled(
        " Search: ",
        Style::default().fg(app.theme.dim).bg(bg),
    ));
    let text_style = if app.mode == Mode::Search {
        Style::default().fg(app.theme.text_bright).bg(bg)
    } else {
        Style::default().fg(app.theme.text).bg(bg)
    };
    spans.push(Span::styled(app.search.text().to_string(), text_style));
    if app.mode == Mode::Search {
        spans.push(Span::styled(
            "\u{258C}",
            Style::default().fg(app.theme.highlight).bg(bg),
        ));
    }
    pad_line(&mut spans, area.width as usize, bg);

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_filter_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let mut spans: Vec<Span> = vec![Span::styled(" ", Style::default().bg(bg))];

    for filter in [StatusFilter::All, StatusFilter::Open, StatusFilter::Complete] {
        let active = app.filter == filter;
        let style = if active {
            Style::default()
                .fg(app.theme.background)
                .bg(app.theme.highlight)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.text).bg(bg)
        };
        spans.push(Span::styled(format!(" {} ", filter.label()), style));
        spans.push(Span::styled(" ", Style::default().bg(bg)));
    }

    if app.is_refreshing() {
        let label = "refreshing\u{2026} ";
        let used: usize = spans.iter().map(|s| display_width(&s.content)).sum();
        let width = area.width as usize;
        let label_w = display_width(label);
        if used + label_w < width {
            spans.push(Span::styled(
                " ".repeat(width - used - label_w),
                Style::default().bg(bg),
            ));
            spans.push(Span::styled(
                label,
                Style::default().fg(app.theme.yellow).bg(bg),
            ));
        }
    } else {
        pad_line(&mut spans, area.width as usize, bg);
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_list(frame: &mut Frame, app: &mut App, area: Rect) {
    let visible = app.visible();

    if visible.is_empty() {
        let empty = Paragraph::new(" No tasks to show")
            .style(Style::default().fg(app.theme.dim).bg(app.theme.background));
        frame.render_widget(empty, area);
        return;
    }

    let cursor = app.cursor.min(visible.len() - 1);
    let search_re = app.active_search_re();
    let today = Local::now().date_naive();
    let width = area.width as usize;

    // Build all display lines tagged with their item index, then scroll so
    // the cursor item is fully in view
    let mut display_lines: Vec<(Option<usize>, Line)> = Vec::new();
    for (i, task) in visible.iter().enumerate() {
        if i > 0 {
            display_lines.push((None, Line::from("")));
        }
        let is_cursor = i == cursor;
        for line in task_lines(app, task, is_cursor, search_re.as_ref(), today, width) {
            display_lines.push((Some(i), line));
        }
    }

    let height = area.height as usize;
    let first = display_lines
        .iter()
        .position(|(idx, _)| *idx == Some(cursor))
        .unwrap_or(0);
    let last = display_lines
        .iter()
        .rposition(|(idx, _)| *idx == Some(cursor))
        .unwrap_or(first);

    let mut scroll = app.scroll_offset.min(display_lines.len().saturating_sub(1));
    if first < scroll {
        scroll = first;
    }
    if height > 0 && last >= scroll + height {
        scroll = last + 1 - height;
    }
    app.scroll_offset = scroll;

    let lines: Vec<Line> = display_lines
        .into_iter()
        .skip(scroll)
        .take(height)
        .map(|(_, line)| line)
        .collect();

    frame.render_widget(
        Paragraph::new(lines).style(Style::default().bg(app.theme.background)),
        area,
    );
}

/// The two or three lines a task occupies in the list
fn task_lines<'a>(
    app: &App,
    task: &Task,
    is_cursor: bool,
    search_re: Option<&regex::Regex>,
    today: chrono::NaiveDate,
    width: usize,
) -> Vec<Line<'a>> {
    let bg = if is_cursor {
        app.theme.selection_bg
    } else {
        app.theme.background
    };
    let mut lines = Vec::new();

    // Title line: checkbox, id, title (search matches highlighted)
    let checkbox = match task.status {
        Status::Open => "[ ]",
        Status::Complete => "[x]",
    };
    let mut spans: Vec<Span> = Vec::new();
    spans.push(Span::styled(
        format!(" {} ", checkbox),
        Style::default().fg(app.theme.status_color(task.status)).bg(bg),
    ));
    spans.push(Span::styled(
        format!("{} ", task.id),
        Style::default().fg(app.theme.dim).bg(bg),
    ));

    let title_style = if task.status == Status::Complete {
        Style::default()
            .fg(app.theme.dim)
            .bg(bg)
            .add_modifier(Modifier::CROSSED_OUT)
    } else if is_cursor {
        Style::default()
            .fg(app.theme.text_bright)
            .bg(bg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(app.theme.text_bright).bg(bg)
    };
    let match_style = Style::default()
        .fg(app.theme.search_match_fg)
        .bg(app.theme.search_match_bg);
    push_highlighted_spans(&mut spans, &task.title, title_style, match_style, search_re);
    if is_cursor {
        pad_line(&mut spans, width, bg);
    }
    lines.push(Line::from(spans));

    // Description line, when present
    if !task.description.is_empty() {
        let mut spans = vec![
            Span::styled("       ", Style::default().bg(bg)),
            Span::styled(
                task.description.clone(),
                Style::default().fg(app.theme.dim).bg(bg),
            ),
        ];
        if is_cursor {
            pad_line(&mut spans, width, bg);
        }
        lines.push(Line::from(spans));
    }

    // Meta line: due, priority, status
    let due_text = match task.due.as_deref() {
        Some(due) => format!("due: {}", due),
        None => "due: n/a".to_string(),
    };
    let due_style = if task.is_overdue(today) {
        Style::default().fg(app.theme.red).bg(bg)
    } else {
        Style::default().fg(app.theme.dim).bg(bg)
    };
    let mut spans = vec![
        Span::styled("       ", Style::default().bg(bg)),
        Span::styled(due_text, due_style),
        Span::styled("   ", Style::default().bg(bg)),
        Span::styled(
            format!("priority: {}", task.priority),
            Style::default().fg(app.theme.priority_color(task.priority)).bg(bg),
        ),
        Span::styled("   ", Style::default().bg(bg)),
        Span::styled(
            format!("status: {}", task.status),
            Style::default().fg(app.theme.status_color(task.status)).bg(bg),
        ),
    ];
    if is_cursor {
        pad_line(&mut spans, width, bg);
    }
    lines.push(Line::from(spans));

    lines
}
