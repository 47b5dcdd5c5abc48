use std::path::PathBuf;

use ratatui::backend::TestBackend;
use ratatui::Terminal;

use crate::auth::{AuthError, IdentityProvider};
use crate::media::{MediaPicker, Permission, Selection};
use crate::model::AppConfig;
use crate::tui::app::App;

pub const TERM_W: u16 = 80;
pub const TERM_H: u16 = 24;

/// Identity provider that accepts every attempt
pub struct AcceptingProvider;

impl IdentityProvider for AcceptingProvider {
    fn sign_in_with_password(&self, _email: &str, _password: &str) -> Result<(), AuthError> {
        Ok(())
    }

    fn sign_in_with_id_token(&self, _id_token: &str) -> Result<(), AuthError> {
        Ok(())
    }
}

/// Media picker with canned answers
pub struct StubPicker {
    pub permission: Permission,
    pub selection: Selection,
}

impl MediaPicker for StubPicker {
    fn request_permission(&self) -> Permission {
        self.permission
    }

    fn pick_image(&self) -> Selection {
        self.selection.clone()
    }
}

/// An app with stub boundaries and no stored profile
pub fn test_app() -> App {
    App::new(
        AppConfig::default(),
        Box::new(AcceptingProvider),
        Box::new(StubPicker {
            permission: Permission::Granted,
            selection: Selection::Cancelled,
        }),
        PathBuf::from("/tmp/taskpad-tests/does-not-exist/profile.json"),
    )
}

/// An app that is already past the session gate
pub fn authed_app() -> App {
    let mut app = test_app();
    app.session.on_login();
    app
}

/// Render the whole app into an in-memory buffer and return plain text
/// (no styles), trailing blanks trimmed.
pub fn render_to_string(app: &mut App, w: u16, h: u16) -> String {
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| super::render(frame, app))
        .unwrap();

    let buf = terminal.backend().buffer().clone();
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}
