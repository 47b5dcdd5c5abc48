use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::actions;
use crate::tui::app::{App, LoginField};
use crate::util::text::EditBuffer;

pub(super) fn handle_login(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        // Federated sign-in; ignored while the OAuth client is unconfigured
        (KeyModifiers::CONTROL, KeyCode::Char('g')) => actions::federated_login(app),

        (_, KeyCode::Esc) => app.should_quit = true,
        (_, KeyCode::Enter) => actions::submit_login(app),

        (_, KeyCode::Tab) | (_, KeyCode::Down) | (_, KeyCode::BackTab) | (_, KeyCode::Up) => {
            app.login.focus = match app.login.focus {
                LoginField::Email => LoginField::Password,
                LoginField::Password => LoginField::Email,
            };
        }

        (_, KeyCode::Backspace) => focused(app).backspace(),
        (_, KeyCode::Left) => focused(app).move_left(),
        (_, KeyCode::Right) => focused(app).move_right(),
        (_, KeyCode::Home) => focused(app).move_home(),
        (_, KeyCode::End) => focused(app).move_end(),

        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => {
            focused(app).insert_char(c);
        }

        _ => {}
    }
}

fn focused(app: &mut App) -> &mut EditBuffer {
    match app.login.focus {
        LoginField::Email => &mut app.login.email,
        LoginField::Password => &mut app.login.password,
    }
}
