use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::actions;
use crate::tui::app::{App, FormField};

pub(super) fn handle_form(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (_, KeyCode::Esc) => {
            actions::cancel_form(app);
            return;
        }
        (_, KeyCode::Enter) => {
            actions::submit_form(app);
            return;
        }
        _ => {}
    }

    let form = match app.form.as_mut() {
        Some(form) => form,
        None => return,
    };

    match (key.modifiers, key.code) {
        (_, KeyCode::Tab) | (_, KeyCode::Down) => {
            form.focus = next_field(form.focus);
        }
        (_, KeyCode::BackTab) | (_, KeyCode::Up) => {
            form.focus = prev_field(form.focus);
        }

        // The priority field is a selector, not a text field: Left/Right
        // (or Space) cycle through the three values.
        (_, KeyCode::Left) if form.focus == FormField::Priority => {
            form.priority = form.priority.prev();
        }
        (_, KeyCode::Right) | (_, KeyCode::Char(' ')) if form.focus == FormField::Priority => {
            form.priority = form.priority.next();
        }

        (_, KeyCode::Backspace) => {
            if let Some(buffer) = form.focused_buffer_mut() {
                buffer.backspace();
            }
        }
        (_, KeyCode::Left) => {
            if let Some(buffer) = form.focused_buffer_mut() {
                buffer.move_left();
            }
        }
        (_, KeyCode::Right) => {
            if let Some(buffer) = form.focused_buffer_mut() {
                buffer.move_right();
            }
        }
        (_, KeyCode::Home) => {
            if let Some(buffer) = form.focused_buffer_mut() {
                buffer.move_home();
            }
        }
        (_, KeyCode::End) => {
            if let Some(buffer) = form.focused_buffer_mut() {
                buffer.move_end();
            }
        }

        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => {
            if let Some(buffer) = form.focused_buffer_mut() {
                buffer.insert_char(c);
            }
        }

        _ => {}
    }
}

fn next_field(field: FormField) -> FormField {
    match field {
        FormField::Title => FormField::Description,
        FormField::Description => FormField::Due,
        FormField::Due => FormField::Priority,
        FormField::Priority => FormField::Title,
    }
}

fn prev_field(field: FormField) -> FormField {
    match field {
        FormField::Title => FormField::Priority,
        FormField::Description => FormField::Title,
        FormField::Due => FormField::Description,
        FormField::Priority => FormField::Due,
    }
}
