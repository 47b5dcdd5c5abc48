use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::tui::app::{App, LoginField};
use crate::util::text::truncate_to_width;

use super::helpers::{centered_rect, split_at_col};

const BOX_W: u16 = 46;

/// Render the login view: two fields and the two sign-in paths
pub fn render_login_view(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let rect = centered_rect(BOX_W, 12, area);
    let inner_w = rect.width as usize;

    let mut lines: Vec<Line> = Vec::new();

    let title_style = Style::default()
        .fg(app.theme.text_bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    lines.push(Line::from(Span::styled("Welcome to taskpad", title_style)).centered());
    lines.push(Line::from(""));

    lines.push(field_line(
        app,
        "Email",
        app.login.email.text(),
        app.login.email.cursor_col(),
        app.login.focus == LoginField::Email,
        inner_w,
    ));
    lines.push(Line::from(""));

    // Password rendered masked; the mask is one cell per character, so the
    // cursor column is the character count before the cursor
    let masked = "\u{2022}".repeat(app.login.password.text().chars().count());
    lines.push(field_line(
        app,
        "Password",
        &masked,
        app.login.password.chars_before_cursor(),
        app.login.focus == LoginField::Password,
        inner_w,
    ));
    lines.push(Line::from(""));

    // Buttons row: direct sign-in, then the federated path (dimmed while
    // the OAuth client is not configured)
    let button_style = Style::default()
        .fg(app.theme.background)
        .bg(app.theme.highlight);
    let federated_style = if app.config.auth.federated_configured() {
        Style::default().fg(app.theme.background).bg(app.theme.red)
    } else {
        Style::default().fg(app.theme.dim).bg(app.theme.selection_bg)
    };
    lines.push(Line::from(vec![
        Span::styled(" Sign in (Enter) ", button_style),
        Span::styled("  ", Style::default().bg(bg)),
        Span::styled(" Google (Ctrl+G) ", federated_style),
    ]));
    lines.push(Line::from(""));

    if app.login.pending {
        lines.push(Line::from(Span::styled(
            "signing in\u{2026}",
            Style::default().fg(app.theme.yellow).bg(bg),
        )));
    } else {
        lines.push(Line::from(Span::styled(
            "Tab switch field   Esc quit",
            Style::default().fg(app.theme.dim).bg(bg),
        )));
    }

    let widget = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(widget, rect);
}

/// One labeled field: `Label:    val▌ue`, cursor shown on the focused field
fn field_line<'a>(
    app: &App,
    label: &'a str,
    value: &str,
    cursor_col: usize,
    focused: bool,
    width: usize,
) -> Line<'a> {
    let bg = app.theme.background;
    let label_style = Style::default().fg(app.theme.dim).bg(bg);
    let value_style = if focused {
        Style::default().fg(app.theme.text_bright).bg(bg)
    } else {
        Style::default().fg(app.theme.text).bg(bg)
    };

    let mut spans = vec![Span::styled(
        format!("{:<10}", format!("{}:", label)),
        label_style,
    )];
    let avail = width.saturating_sub(12);

    if focused {
        let (before, after) = split_at_col(value, cursor_col);
        spans.push(Span::styled(truncate_to_width(&before, avail), value_style));
        spans.push(Span::styled(
            "\u{258C}",
            Style::default().fg(app.theme.highlight).bg(bg),
        ));
        spans.push(Span::styled(after, value_style));
    } else {
        spans.push(Span::styled(truncate_to_width(value, avail), value_style));
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use crate::tui::render::test_helpers::{render_to_string, test_app, TERM_H, TERM_W};

    #[test]
    fn anonymous_session_renders_the_login_view() {
        let mut app = test_app();
        let out = render_to_string(&mut app, TERM_W, TERM_H);
        assert!(out.contains("Welcome to taskpad"));
        assert!(out.contains("Email:"));
        assert!(out.contains("Password:"));
        assert!(out.contains("Sign in (Enter)"));
    }

    #[test]
    fn password_renders_masked() {
        let mut app = test_app();
        for c in "hunter2".chars() {
            app.login.password.insert_char(c);
        }
        let out = render_to_string(&mut app, TERM_W, TERM_H);
        assert!(!out.contains("hunter2"));
        assert!(out.contains("\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}"));
    }

    #[test]
    fn authenticated_session_leaves_the_login_view() {
        let mut app = test_app();
        app.session.on_login();
        let out = render_to_string(&mut app, TERM_W, TERM_H);
        assert!(!out.contains("Welcome to taskpad"));
        assert!(out.contains("Tasks"));
    }
}
