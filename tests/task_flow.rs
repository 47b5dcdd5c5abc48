//! End-to-end task flows driven through the application actions, the way
//! key handlers drive them.

use std::path::PathBuf;

use pretty_assertions::assert_eq;

use taskpad::auth::{AuthError, IdentityProvider};
use taskpad::media::{MediaPicker, Permission, Selection};
use taskpad::model::{AppConfig, Priority, Status};
use taskpad::tasks::StatusFilter;
use taskpad::tui::actions;
use taskpad::tui::app::App;

struct NoAuth;

impl IdentityProvider for NoAuth {
    fn sign_in_with_password(&self, _: &str, _: &str) -> Result<(), AuthError> {
        Ok(())
    }
    fn sign_in_with_id_token(&self, _: &str) -> Result<(), AuthError> {
        Ok(())
    }
}

struct NoPick;

impl MediaPicker for NoPick {
    fn request_permission(&self) -> Permission {
        Permission::Granted
    }
    fn pick_image(&self) -> Selection {
        Selection::Cancelled
    }
}

/// An authenticated app with stub boundaries and no stored profile
fn app() -> App {
    let mut app = App::new(
        AppConfig::default(),
        Box::new(NoAuth),
        Box::new(NoPick),
        PathBuf::from("/tmp/taskpad-task-flow/does-not-exist/profile.json"),
    );
    app.session.on_login();
    app
}

/// Create a task the way the form does: open, type a title, submit
fn create_task(app: &mut App, title: &str) -> String {
    actions::open_create_form(app);
    app.form.as_mut().unwrap().title.set(title);
    actions::submit_form(app);
    app.tasks.tasks().last().unwrap().id.clone()
}

fn visible_titles(app: &App) -> Vec<String> {
    app.visible().iter().map(|t| t.title.clone()).collect()
}

#[test]
fn scenario_create_then_filter_by_status() {
    let mut app = app();

    actions::open_create_form(&mut app);
    {
        let form = app.form.as_mut().unwrap();
        form.title.set("Buy milk");
        assert_eq!(form.priority, Priority::Normal);
    }
    actions::submit_form(&mut app);

    assert!(app.form.is_none());
    assert_eq!(app.tasks.len(), 1);
    assert_eq!(app.tasks.tasks()[0].status, Status::Open);
    assert_eq!(app.tasks.tasks()[0].priority, Priority::Normal);

    app.filter = StatusFilter::Open;
    assert_eq!(visible_titles(&app), vec!["Buy milk"]);

    app.filter = StatusFilter::Complete;
    assert!(visible_titles(&app).is_empty());
}

#[test]
fn scenario_toggle_moves_a_task_between_filters() {
    let mut app = app();
    create_task(&mut app, "Buy milk");

    actions::toggle_selected(&mut app);
    assert_eq!(app.tasks.tasks()[0].status, Status::Complete);

    app.filter = StatusFilter::Open;
    assert!(visible_titles(&app).is_empty());

    app.filter = StatusFilter::Complete;
    assert_eq!(visible_titles(&app), vec!["Buy milk"]);
}

#[test]
fn scenario_search_narrows_the_view() {
    let mut app = app();
    create_task(&mut app, "Buy milk");
    create_task(&mut app, "Walk dog");

    app.search.set("milk");
    assert_eq!(visible_titles(&app), vec!["Buy milk"]);

    app.search.set("");
    assert_eq!(visible_titles(&app), vec!["Buy milk", "Walk dog"]);
}

#[test]
fn scenario_edit_replaces_fields_in_place() {
    let mut app = app();
    let id = create_task(&mut app, "Buy milk");

    app.cursor = 0;
    actions::begin_edit_selected(&mut app);
    {
        let form = app.form.as_mut().unwrap();
        // Draft was seeded from the record
        assert_eq!(form.title.text(), "Buy milk");
        form.title.set("Buy bread");
    }
    actions::submit_form(&mut app);

    assert_eq!(app.tasks.len(), 1);
    let task = app.tasks.get(&id).unwrap();
    assert_eq!(task.id, id);
    assert_eq!(task.title, "Buy bread");
}

#[test]
fn scenario_cancel_discards_the_draft() {
    let mut app = app();
    let id = create_task(&mut app, "Buy milk");

    actions::begin_edit_selected(&mut app);
    app.form.as_mut().unwrap().title.set("Something else");
    actions::cancel_form(&mut app);

    assert!(app.form.is_none());
    assert_eq!(app.tasks.get(&id).unwrap().title, "Buy milk");
}

#[test]
fn creates_yield_unique_ids_and_open_status() {
    let mut app = app();
    for title in ["a", "b", "c", "d"] {
        create_task(&mut app, title);
    }
    assert_eq!(app.tasks.len(), 4);

    let mut ids: Vec<String> = app.tasks.tasks().iter().map(|t| t.id.clone()).collect();
    for task in app.tasks.tasks() {
        assert_eq!(task.status, Status::Open);
    }
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 4);
}

#[test]
fn empty_title_is_rejected_with_an_alert() {
    let mut app = app();

    actions::open_create_form(&mut app);
    app.form.as_mut().unwrap().title.set("   ");
    actions::submit_form(&mut app);

    // Collection untouched, failure reported, form still open for re-input
    assert_eq!(app.tasks.len(), 0);
    let alert = app.alert.as_ref().expect("validation alert");
    assert_eq!(alert.message, "Title is required");
    assert!(app.form.is_some());
}

#[test]
fn delete_is_idempotent_through_the_ui() {
    let mut app = app();
    create_task(&mut app, "Buy milk");
    create_task(&mut app, "Walk dog");

    app.cursor = 0;
    actions::delete_selected(&mut app);
    assert_eq!(visible_titles(&app), vec!["Walk dog"]);

    // Deleting the same id again directly is a no-op
    app.tasks.delete("T-001");
    assert_eq!(visible_titles(&app), vec!["Walk dog"]);
}

#[test]
fn update_after_the_target_vanished_is_a_no_op() {
    let mut app = app();
    let id = create_task(&mut app, "Buy milk");

    actions::begin_edit_selected(&mut app);
    app.form.as_mut().unwrap().title.set("Buy bread");
    // The record disappears while the form is open
    app.tasks.delete(&id);
    actions::submit_form(&mut app);

    assert!(app.form.is_none());
    assert!(app.tasks.is_empty());
}

#[test]
fn view_is_a_pure_function_of_its_inputs() {
    let mut app = app();
    create_task(&mut app, "Buy milk");
    create_task(&mut app, "Buy milkshake");
    create_task(&mut app, "Walk dog");
    actions::toggle_selected(&mut app); // completes "Buy milk" (cursor 0)

    app.filter = StatusFilter::Open;
    app.search.set("buy");

    let first = visible_titles(&app);
    let second = visible_titles(&app);
    assert_eq!(first, second);
    assert_eq!(first, vec!["Buy milkshake"]);
}

#[test]
fn cursor_stays_inside_the_visible_list() {
    let mut app = app();
    create_task(&mut app, "a");
    create_task(&mut app, "b");
    app.cursor = 1;

    actions::delete_selected(&mut app);
    assert_eq!(app.cursor, 0);

    actions::delete_selected(&mut app);
    assert!(app.tasks.is_empty());
    assert_eq!(app.selected_task_id(), None);
}

#[test]
fn refresh_sets_a_timed_indicator_and_nothing_else() {
    let mut app = app();
    create_task(&mut app, "Buy milk");
    let before: Vec<String> = visible_titles(&app);

    actions::start_refresh(&mut app);
    assert!(app.is_refreshing());
    // No data is fetched; the collection is untouched
    assert_eq!(visible_titles(&app), before);
}
