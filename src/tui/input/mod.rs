mod form;
mod login;
mod navigate;
mod profile;
mod search;

use crossterm::event::{KeyCode, KeyEvent};

use super::app::{App, Mode};

/// Handle a key event in the current mode
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }
    app.status_message = None;

    // A blocking alert intercepts all input until dismissed
    if app.alert.is_some() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
            app.alert = None;
        }
        return;
    }

    // Help overlay: any key dismisses
    if app.show_help {
        app.show_help = false;
        return;
    }

    // The session gate decides which surface gets the key
    if !app.session.is_authenticated() {
        login::handle_login(app, key);
        return;
    }

    match app.mode {
        Mode::Navigate => navigate::handle_navigate(app, key),
        Mode::Search => search::handle_search(app, key),
        Mode::Form => form::handle_form(app, key),
        Mode::Profile => profile::handle_profile(app, key),
    }
}
