use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, Mode};

/// Search input. The view narrows live as the string changes; Enter keeps
/// the search active, Esc clears it.
pub(super) fn handle_search(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (_, KeyCode::Esc) => {
            app.search.clear();
            app.mode = Mode::Navigate;
            app.clamp_cursor();
        }
        (_, KeyCode::Enter) => {
            app.mode = Mode::Navigate;
        }

        (_, KeyCode::Backspace) => {
            app.search.backspace();
            app.clamp_cursor();
        }
        (_, KeyCode::Left) => app.search.move_left(),
        (_, KeyCode::Right) => app.search.move_right(),
        (_, KeyCode::Home) => app.search.move_home(),
        (_, KeyCode::End) => app.search.move_end(),

        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => {
            app.search.insert_char(c);
            app.clamp_cursor();
        }

        _ => {}
    }
}
