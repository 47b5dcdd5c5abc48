use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::media::picker::image_dimensions;
use crate::tui::app::{App, Mode, ProfileField};
use crate::util::text::truncate_to_width;

use super::helpers::split_at_col;

/// Render the Profile tab: avatar, then the record in display or form mode
pub fn render_profile_view(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(
        "  Profile",
        Style::default()
            .fg(app.theme.text_bright)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));

    lines.push(avatar_line(app, area.width as usize));
    lines.push(Line::from(""));

    if app.mode == Mode::Profile {
        lines.push(form_field(app, ProfileField::FullName, "Full Name"));
        lines.push(Line::from(""));
        lines.push(form_field(app, ProfileField::Age, "Age"));
        lines.push(Line::from(""));
        lines.push(form_field(app, ProfileField::Gender, "Gender"));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "  Enter save   Ctrl+O choose photo   Esc back",
            Style::default().fg(app.theme.dim).bg(bg),
        )));
    } else {
        lines.push(display_field(app, "Full Name", &app.profile.full_name));
        lines.push(Line::from(""));
        lines.push(display_field(app, "Age", &app.profile.age));
        lines.push(Line::from(""));
        lines.push(display_field(app, "Gender", &app.profile.gender));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "  e edit   Ctrl+O choose photo",
            Style::default().fg(app.theme.dim).bg(bg),
        )));
    }

    let widget = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(widget, area);
}

/// The avatar row: picked image path with its pixel dimensions when the
/// header is readable, or an initials placeholder
fn avatar_line<'a>(app: &App, width: usize) -> Line<'a> {
    let bg = app.theme.background;
    let label = Span::styled(
        format!("  {:<12}", "Avatar"),
        Style::default().fg(app.theme.dim).bg(bg),
    );

    match &app.profile.avatar {
        Some(path) => {
            let shown = truncate_to_width(&path.display().to_string(), width.saturating_sub(26));
            let mut spans = vec![
                label,
                Span::styled(shown, Style::default().fg(app.theme.cyan).bg(bg)),
            ];
            if let Some((w, h)) = image_dimensions(path) {
                spans.push(Span::styled(
                    format!("  {}\u{00D7}{}", w, h),
                    Style::default().fg(app.theme.dim).bg(bg),
                ));
            }
            Line::from(spans)
        }
        None => Line::from(vec![
            label,
            Span::styled(
                format!("({})", app.profile.initials()),
                Style::default()
                    .fg(app.theme.background)
                    .bg(app.theme.purple)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                "  no photo picked",
                Style::default().fg(app.theme.dim).bg(bg),
            ),
        ]),
    }
}

fn display_field<'a>(app: &App, label: &'a str, value: &str) -> Line<'a> {
    let bg = app.theme.background;
    Line::from(vec![
        Span::styled(
            format!("  {:<12}", label),
            Style::default().fg(app.theme.dim).bg(bg),
        ),
        Span::styled(
            value.to_string(),
            Style::default().fg(app.theme.text_bright).bg(bg),
        ),
    ])
}

fn form_field<'a>(app: &App, field: ProfileField, label: &'a str) -> Line<'a> {
    let bg = app.theme.background;
    let focused = app.profile_form.focus == field;
    let buffer = match field {
        ProfileField::FullName => &app.profile_form.full_name,
        ProfileField::Age => &app.profile_form.age,
        ProfileField::Gender => &app.profile_form.gender,
    };

    let label_style = if focused {
        Style::default().fg(app.theme.highlight).bg(bg)
    } else {
        Style::default().fg(app.theme.dim).bg(bg)
    };
    let value_style = Style::default().fg(app.theme.text_bright).bg(bg);

    let mut spans = vec![Span::styled(format!("  {:<12}", label), label_style)];
    if focused {
        let (before, after) = split_at_col(buffer.text(), buffer.cursor_col());
        spans.push(Span::styled(before, value_style));
        spans.push(Span::styled(
            "\u{258C}",
            Style::default().fg(app.theme.highlight).bg(bg),
        ));
        spans.push(Span::styled(after, value_style));
    } else {
        spans.push(Span::styled(buffer.text().to_string(), value_style));
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use crate::tui::actions;
    use crate::tui::app::Tab;
    use crate::tui::render::test_helpers::{authed_app, render_to_string, TERM_H, TERM_W};

    #[test]
    fn unsaved_profile_opens_as_a_form_with_placeholder_avatar() {
        let mut app = authed_app();
        actions::begin_edit_profile(&mut app);
        let out = render_to_string(&mut app, TERM_W, TERM_H);
        assert!(out.contains("Profile"));
        assert!(out.contains("Full Name"));
        assert!(out.contains("(U)"));
        assert!(out.contains("Enter save"));
    }

    #[test]
    fn saved_profile_renders_read_only_values() {
        let mut app = authed_app();
        app.profile.full_name = "Ada Lovelace".into();
        app.profile.age = "36".into();
        app.profile_saved = true;
        app.tab = Tab::Profile;

        let out = render_to_string(&mut app, TERM_W, TERM_H);
        assert!(out.contains("Ada Lovelace"));
        assert!(out.contains("36"));
        assert!(out.contains("e edit"));
        // Initials come from the record now
        assert!(out.contains("(AL)"));
    }
}
