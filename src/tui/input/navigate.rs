use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::actions;
use crate::tui::app::{App, Mode, Tab};

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    // Keys shared by both tabs
    match (key.modifiers, key.code) {
        (_, KeyCode::Char('q')) => {
            app.should_quit = true;
            return;
        }
        (_, KeyCode::Char('?')) => {
            app.show_help = true;
            return;
        }
        (_, KeyCode::Char('1')) => {
            switch_tab(app, Tab::Tasks);
            return;
        }
        (_, KeyCode::Char('2')) => {
            switch_tab(app, Tab::Profile);
            return;
        }
        (_, KeyCode::Tab) => {
            let other = match app.tab {
                Tab::Tasks => Tab::Profile,
                Tab::Profile => Tab::Tasks,
            };
            switch_tab(app, other);
            return;
        }
        _ => {}
    }

    match app.tab {
        Tab::Tasks => handle_tasks_tab(app, key),
        Tab::Profile => handle_profile_tab(app, key),
    }
}

fn handle_tasks_tab(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (_, KeyCode::Char('j')) | (_, KeyCode::Down) => {
            let len = app.visible().len();
            if len > 0 && app.cursor + 1 < len {
                app.cursor += 1;
            }
        }
        (_, KeyCode::Char('k')) | (_, KeyCode::Up) => {
            app.cursor = app.cursor.saturating_sub(1);
        }

        (_, KeyCode::Char('a')) => actions::open_create_form(app),
        (_, KeyCode::Char('e')) | (_, KeyCode::Enter) => actions::begin_edit_selected(app),
        (_, KeyCode::Char(' ')) | (_, KeyCode::Char('x')) => actions::toggle_selected(app),
        (_, KeyCode::Char('d')) => actions::delete_selected(app),
        (_, KeyCode::Char('f')) => actions::cycle_filter(app),
        (_, KeyCode::Char('r')) => actions::start_refresh(app),
        (_, KeyCode::Char('/')) => app.mode = Mode::Search,

        _ => {}
    }
}

/// Profile tab in display mode (a saved profile exists)
fn handle_profile_tab(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (_, KeyCode::Char('e')) => actions::begin_edit_profile(app),
        (KeyModifiers::CONTROL, KeyCode::Char('o')) => actions::pick_avatar(app),
        _ => {}
    }
}

/// Switch tabs. The Profile tab has no display mode until a profile has
/// been saved, so it opens straight into the form.
fn switch_tab(app: &mut App, tab: Tab) {
    app.tab = tab;
    if tab == Tab::Profile && !app.profile_saved {
        actions::begin_edit_profile(app);
    } else {
        app.mode = Mode::Navigate;
    }
}
