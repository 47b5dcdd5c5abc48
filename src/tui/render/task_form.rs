use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::tui::app::{App, FormField, FormState};
use crate::util::text::truncate_to_width;

use super::helpers::{centered_rect, split_at_col};

const POPUP_W: u16 = 56;
const POPUP_H: u16 = 13;

/// Render the add/edit form as a centered popup over the task list
pub fn render_task_form(frame: &mut Frame, app: &App, area: Rect) {
    let form = match &app.form {
        Some(form) => form,
        None => return,
    };

    let bg = app.theme.background;
    let rect = centered_rect(POPUP_W, POPUP_H, area);
    let inner_w = rect.width.saturating_sub(2) as usize;

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(
        format!("  {}", form.heading()),
        Style::default()
            .fg(app.theme.text_bright)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));

    lines.push(text_field(app, form, FormField::Title, "Title", inner_w));
    lines.push(Line::from(""));
    lines.push(text_field(app, form, FormField::Description, "Description", inner_w));
    lines.push(Line::from(""));
    lines.push(text_field(app, form, FormField::Due, "Due (YYYY-MM-DD)", inner_w));
    lines.push(Line::from(""));
    lines.push(priority_field(app, form));
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(
        "  Enter save   Esc cancel   Tab next field",
        Style::default().fg(app.theme.dim).bg(bg),
    )));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.highlight).bg(bg))
        .style(Style::default().bg(bg));

    frame.render_widget(Clear, rect);
    frame.render_widget(Paragraph::new(lines).block(block), rect);
}

fn text_field<'a>(
    app: &App,
    form: &FormState,
    field: FormField,
    label: &'a str,
    width: usize,
) -> Line<'a> {
    let bg = app.theme.background;
    let focused = form.focus == field;
    let buffer = match field {
        FormField::Title => &form.title,
        FormField::Description => &form.description,
        FormField::Due => &form.due,
        FormField::Priority => unreachable!("priority is not a text field"),
    };

    let label_style = if focused {
        Style::default().fg(app.theme.highlight).bg(bg)
    } else {
        Style::default().fg(app.theme.dim).bg(bg)
    };
    let value_style = Style::default().fg(app.theme.text_bright).bg(bg);

    let mut spans = vec![Span::styled(format!("  {:<18}", label), label_style)];
    let avail = width.saturating_sub(22);

    if focused {
        let (before, after) = split_at_col(buffer.text(), buffer.cursor_col());
        spans.push(Span::styled(truncate_to_width(&before, avail), value_style));
        spans.push(Span::styled(
            "\u{258C}",
            Style::default().fg(app.theme.highlight).bg(bg),
        ));
        spans.push(Span::styled(after, value_style));
    } else {
        spans.push(Span::styled(
            truncate_to_width(buffer.text(), avail),
            value_style,
        ));
    }
    Line::from(spans)
}

/// The priority selector: `‹ normal ›` cycling through the three values
fn priority_field<'a>(app: &App, form: &FormState) -> Line<'a> {
    let bg = app.theme.background;
    let focused = form.focus == FormField::Priority;

    let label_style = if focused {
        Style::default().fg(app.theme.highlight).bg(bg)
    } else {
        Style::default().fg(app.theme.dim).bg(bg)
    };
    let arrow_style = if focused {
        Style::default().fg(app.theme.highlight).bg(bg)
    } else {
        Style::default().fg(app.theme.dim).bg(bg)
    };

    Line::from(vec![
        Span::styled(format!("  {:<18}", "Priority"), label_style),
        Span::styled("\u{2039} ", arrow_style),
        Span::styled(
            form.priority.label().to_string(),
            Style::default()
                .fg(app.theme.priority_color(form.priority))
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" \u{203A}", arrow_style),
    ])
}
