use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::actions;
use crate::tui::app::{App, Mode, ProfileField, Tab};

/// Profile form input (Mode::Profile). Display mode is handled by the
/// navigate handler.
pub(super) fn handle_profile(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('o')) => {
            actions::pick_avatar(app);
            return;
        }
        (_, KeyCode::Enter) => {
            actions::save_profile(app);
            return;
        }
        // Leave the form without saving. Unsaved edits are discarded on
        // re-entry (the form re-seeds from the record); display mode only
        // exists once a profile document does.
        (_, KeyCode::Esc) => {
            app.mode = Mode::Navigate;
            if app.profile_on_disk {
                app.profile_saved = true;
            } else {
                app.tab = Tab::Tasks;
            }
            return;
        }
        _ => {}
    }

    match (key.modifiers, key.code) {
        (_, KeyCode::Tab) | (_, KeyCode::Down) => {
            app.profile_form.focus = next_field(app.profile_form.focus);
        }
        (_, KeyCode::BackTab) | (_, KeyCode::Up) => {
            app.profile_form.focus = prev_field(app.profile_form.focus);
        }

        (_, KeyCode::Backspace) => app.profile_form.focused_buffer_mut().backspace(),
        (_, KeyCode::Left) => app.profile_form.focused_buffer_mut().move_left(),
        (_, KeyCode::Right) => app.profile_form.focused_buffer_mut().move_right(),
        (_, KeyCode::Home) => app.profile_form.focused_buffer_mut().move_home(),
        (_, KeyCode::End) => app.profile_form.focused_buffer_mut().move_end(),

        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => {
            app.profile_form.focused_buffer_mut().insert_char(c);
        }

        _ => {}
    }
}

fn next_field(field: ProfileField) -> ProfileField {
    match field {
        ProfileField::FullName => ProfileField::Age,
        ProfileField::Age => ProfileField::Gender,
        ProfileField::Gender => ProfileField::FullName,
    }
}

fn prev_field(field: ProfileField) -> ProfileField {
    match field {
        ProfileField::FullName => ProfileField::Gender,
        ProfileField::Age => ProfileField::FullName,
        ProfileField::Gender => ProfileField::Age,
    }
}
