//! Semantic actions over the application state. Input handlers translate
//! keys into these; tests drive them directly.

use std::time::{Duration, Instant};

use crate::auth::federated::ConsentFlow;
use crate::media::{Permission, Selection};
use crate::model::DraftMode;
use crate::store::profile_io;
use crate::tasks::TaskError;

use super::app::{App, FormState, Mode, ProfileFormState, Tab};

/// Fixed visible delay for the cosmetic refresh
const REFRESH_DELAY: Duration = Duration::from_millis(1000);

// ---------------------------------------------------------------------------
// Login
// ---------------------------------------------------------------------------

/// Direct credential submission. Empty fields are reported without an
/// external call; a rejection's message is surfaced verbatim; success
/// raises the session gate and drops the typed credentials.
pub fn submit_login(app: &mut App) {
    if app.login.pending {
        return;
    }
    if app.login.email.is_empty() || app.login.password.is_empty() {
        app.show_alert("Login failed", "Please enter username and password");
        return;
    }

    app.login.pending = true;
    let result = app
        .provider
        .sign_in_with_password(app.login.email.text(), app.login.password.text());
    app.login.pending = false;

    match result {
        Ok(()) => finish_login(app),
        Err(e) => app.show_alert("Login failed", e.to_string()),
    }
}

/// Federated sign-in. Ignored while the OAuth client is not configured
/// (the control renders disabled); otherwise runs the consent flow and
/// hands the returned id token to the identity service.
pub fn federated_login(app: &mut App) {
    if app.login.pending || !app.config.auth.federated_configured() {
        return;
    }

    let flow = ConsentFlow::new(
        app.config.auth.google_client_id.clone().unwrap_or_default(),
        app.config.auth.google_client_secret.clone().unwrap_or_default(),
    );

    app.login.pending = true;
    let result = flow
        .obtain_id_token()
        .and_then(|token| app.provider.sign_in_with_id_token(&token));
    app.login.pending = false;

    match result {
        Ok(()) => finish_login(app),
        Err(e) => app.show_alert("Login failed", e.to_string()),
    }
}

fn finish_login(app: &mut App) {
    app.session.on_login();
    // The form keeps no session detail, not even the credentials
    app.login.email.clear();
    app.login.password.clear();
}

// ---------------------------------------------------------------------------
// Task list
// ---------------------------------------------------------------------------

/// Open the form with an empty draft in create mode
pub fn open_create_form(app: &mut App) {
    app.form = Some(FormState::create());
    app.mode = Mode::Form;
}

/// Seed the draft from the task under the cursor and open the form in
/// edit mode
pub fn begin_edit_selected(app: &mut App) {
    let id = match app.selected_task_id() {
        Some(id) => id,
        None => return,
    };
    if let Some(task) = app.tasks.get(&id) {
        app.form = Some(FormState::edit(task));
        app.mode = Mode::Form;
    }
}

/// Submit the open form: create or update according to the draft's mode.
/// The only reportable failure is a missing title on create.
pub fn submit_form(app: &mut App) {
    let form = match &app.form {
        Some(form) => form,
        None => return,
    };
    let draft = form.to_draft();

    match &draft.mode {
        DraftMode::Create => {
            if let Err(e @ TaskError::TitleRequired) = app.tasks.create(&draft) {
                app.show_alert("Validation", e.to_string());
                return;
            }
        }
        DraftMode::Edit { target } => {
            // A vanished target (deleted while the form was open) is a no-op
            app.tasks.update(target, &draft);
        }
    }

    app.form = None;
    app.mode = Mode::Navigate;
    app.clamp_cursor();
}

/// Discard the draft and close the form without touching the collection
pub fn cancel_form(app: &mut App) {
    app.form = None;
    app.mode = Mode::Navigate;
}

/// Flip the selected task between open and complete
pub fn toggle_selected(app: &mut App) {
    if let Some(id) = app.selected_task_id() {
        app.tasks.toggle_complete(&id);
        app.clamp_cursor();
    }
}

/// Delete the selected task. There is no confirmation step.
pub fn delete_selected(app: &mut App) {
    if let Some(id) = app.selected_task_id() {
        app.tasks.delete(&id);
        app.clamp_cursor();
    }
}

/// Advance the status filter through all → open → complete
pub fn cycle_filter(app: &mut App) {
    app.filter = app.filter.cycled();
    app.clamp_cursor();
    app.status_message = Some(format!("filter: {}", app.filter.label()));
}

/// Start the cosmetic refresh. There is no backing store to fetch from;
/// the indicator simply clears after a fixed delay.
pub fn start_refresh(app: &mut App) {
    app.refreshing_until = Some(Instant::now() + REFRESH_DELAY);
}

// ---------------------------------------------------------------------------
// Profile
// ---------------------------------------------------------------------------

/// Switch the Profile tab into form mode, keeping current field values
pub fn begin_edit_profile(app: &mut App) {
    app.profile_form = ProfileFormState::seeded_from(&app.profile);
    app.profile_saved = false;
    app.tab = Tab::Profile;
    app.mode = Mode::Profile;
}

/// Write the form into the record, persist it, and return to display mode
pub fn save_profile(app: &mut App) {
    app.profile.full_name = app.profile_form.full_name.text().to_string();
    app.profile.age = app.profile_form.age.text().to_string();
    app.profile.gender = app.profile_form.gender.text().to_string();

    match profile_io::write_profile(&app.profile_path, &app.profile) {
        Ok(()) => {
            app.profile_saved = true;
            app.profile_on_disk = true;
            app.mode = Mode::Navigate;
            app.show_alert("Profile", "Profile saved!");
        }
        Err(e) => app.show_alert("Profile", e.to_string()),
    }
}

/// Ask the media boundary for an avatar. Denied permission is a non-fatal
/// warning; a cancelled dialog changes nothing; a pick replaces the
/// avatar in memory (persisted on the next save, like every other field).
pub fn pick_avatar(app: &mut App) {
    match app.picker.request_permission() {
        Permission::Denied => {
            app.show_alert(
                "Permission needed",
                "Permission to access the gallery is required",
            );
        }
        Permission::Granted => match app.picker.pick_image() {
            Selection::Cancelled => {}
            Selection::Picked(path) => {
                app.profile.avatar = Some(path);
                app.status_message = Some("avatar updated".to_string());
            }
        },
    }
}
