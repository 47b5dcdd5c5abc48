use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use regex::Regex;

use crate::auth::rest::RestIdentityProvider;
use crate::auth::{IdentityProvider, Session};
use crate::media::{FileDialogPicker, MediaPicker};
use crate::model::{AppConfig, DraftMode, Priority, Profile, Task, TaskDraft};
use crate::store::{config_io, profile_io};
use crate::tasks::{visible_tasks, StatusFilter, TaskList};
use crate::util::text::EditBuffer;

use super::input;
use super::render;
use super::theme::Theme;

/// Which tab of the main view is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Tasks,
    Profile,
}

/// Current interaction mode (once authenticated)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    Search,
    /// The add/edit task form is open
    Form,
    /// The profile form is being edited
    Profile,
}

/// Which login field has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginField {
    Email,
    Password,
}

/// Login form state: two text fields and a pending-request flag. Nothing
/// else survives a successful sign-in.
#[derive(Debug, Default)]
pub struct LoginState {
    pub email: EditBuffer,
    pub password: EditBuffer,
    pub focus: LoginField,
    pub pending: bool,
}

impl Default for LoginField {
    fn default() -> Self {
        LoginField::Email
    }
}

/// Which task-form field has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Description,
    Due,
    Priority,
}

/// The open add/edit form: edit buffers over the draft fields plus the
/// explicit create/edit mode.
#[derive(Debug)]
pub struct FormState {
    pub mode: DraftMode,
    pub title: EditBuffer,
    pub description: EditBuffer,
    pub due: EditBuffer,
    pub priority: Priority,
    pub focus: FormField,
}

impl FormState {
    /// An empty form in create mode
    pub fn create() -> Self {
        FormState {
            mode: DraftMode::Create,
            title: EditBuffer::new(),
            description: EditBuffer::new(),
            due: EditBuffer::new(),
            priority: Priority::default(),
            focus: FormField::Title,
        }
    }

    /// A form seeded from an existing record, in edit mode
    pub fn edit(task: &Task) -> Self {
        FormState {
            mode: DraftMode::Edit {
                target: task.id.clone(),
            },
            title: EditBuffer::with_text(task.title.clone()),
            description: EditBuffer::with_text(task.description.clone()),
            due: EditBuffer::with_text(task.due.clone().unwrap_or_default()),
            priority: task.priority,
            focus: FormField::Title,
        }
    }

    /// Snapshot the buffers into a draft for the collection operations
    pub fn to_draft(&self) -> TaskDraft {
        TaskDraft {
            title: self.title.text().to_string(),
            description: self.description.text().to_string(),
            due: self.due.text().to_string(),
            priority: self.priority,
            mode: self.mode.clone(),
        }
    }

    /// The text buffer under focus, if the focused field is a text field
    pub fn focused_buffer_mut(&mut self) -> Option<&mut EditBuffer> {
        match self.focus {
            FormField::Title => Some(&mut self.title),
            FormField::Description => Some(&mut self.description),
            FormField::Due => Some(&mut self.due),
            FormField::Priority => None,
        }
    }

    pub fn heading(&self) -> String {
        match &self.mode {
            DraftMode::Create => "New Task".to_string(),
            DraftMode::Edit { target } => format!("Edit {}", target),
        }
    }
}

/// Which profile-form field has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    FullName,
    Age,
    Gender,
}

/// Edit buffers over the profile record
#[derive(Debug, Default)]
pub struct ProfileFormState {
    pub full_name: EditBuffer,
    pub age: EditBuffer,
    pub gender: EditBuffer,
    pub focus: ProfileField,
}

impl Default for ProfileField {
    fn default() -> Self {
        ProfileField::FullName
    }
}

impl ProfileFormState {
    pub fn seeded_from(profile: &Profile) -> Self {
        ProfileFormState {
            full_name: EditBuffer::with_text(profile.full_name.clone()),
            age: EditBuffer::with_text(profile.age.clone()),
            gender: EditBuffer::with_text(profile.gender.clone()),
            focus: ProfileField::FullName,
        }
    }

    pub fn focused_buffer_mut(&mut self) -> &mut EditBuffer {
        match self.focus {
            ProfileField::FullName => &mut self.full_name,
            ProfileField::Age => &mut self.age,
            ProfileField::Gender => &mut self.gender,
        }
    }
}

/// A blocking notification. Rendered over everything; dismissed with
/// Enter or Esc before any other input is handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

/// Main application state
pub struct App {
    pub config: AppConfig,
    pub theme: Theme,

    pub session: Session,
    pub login: LoginState,

    pub tab: Tab,
    pub mode: Mode,

    pub tasks: TaskList,
    pub filter: StatusFilter,
    pub search: EditBuffer,
    /// Cursor index into the visible (filtered) list
    pub cursor: usize,
    pub scroll_offset: usize,
    pub form: Option<FormState>,
    /// Cosmetic refresh indicator; cleared by `tick` once the deadline passes
    pub refreshing_until: Option<Instant>,

    pub profile: Profile,
    /// false = the profile form is the source of the Profile tab
    pub profile_saved: bool,
    /// A profile document has ever been read or written; leaving the form
    /// without saving falls back to display mode only when this is set
    pub profile_on_disk: bool,
    pub profile_form: ProfileFormState,
    pub profile_path: PathBuf,

    pub alert: Option<Alert>,
    pub status_message: Option<String>,
    pub show_help: bool,
    pub should_quit: bool,

    pub provider: Box<dyn IdentityProvider>,
    pub picker: Box<dyn MediaPicker>,
}

impl App {
    pub fn new(
        config: AppConfig,
        provider: Box<dyn IdentityProvider>,
        picker: Box<dyn MediaPicker>,
        profile_path: PathBuf,
    ) -> Self {
        let theme = Theme::from_config(&config.ui);

        // A stored profile starts the Profile tab in display mode
        let stored = profile_io::read_profile(&profile_path);
        let profile_saved = stored.is_some();
        let profile = stored.unwrap_or_default();
        let profile_form = ProfileFormState::seeded_from(&profile);

        App {
            config,
            theme,
            session: Session::default(),
            login: LoginState::default(),
            tab: Tab::Tasks,
            mode: Mode::Navigate,
            tasks: TaskList::new(),
            filter: StatusFilter::default(),
            search: EditBuffer::new(),
            cursor: 0,
            scroll_offset: 0,
            form: None,
            refreshing_until: None,
            profile,
            profile_saved,
            profile_on_disk: profile_saved,
            profile_form,
            profile_path,
            alert: None,
            status_message: None,
            show_help: false,
            should_quit: false,
            provider,
            picker,
        }
    }

    /// The displayed sequence: a pure function of (collection, filter,
    /// search), recomputed on demand and never stored
    pub fn visible(&self) -> Vec<&Task> {
        visible_tasks(self.tasks.tasks(), self.filter, self.search.text())
    }

    /// Id of the task under the cursor, if any
    pub fn selected_task_id(&self) -> Option<String> {
        self.visible().get(self.cursor).map(|t| t.id.clone())
    }

    /// Keep the cursor inside the visible list after any mutation
    pub fn clamp_cursor(&mut self) {
        let len = self.visible().len();
        if len == 0 {
            self.cursor = 0;
        } else if self.cursor >= len {
            self.cursor = len - 1;
        }
    }

    /// Case-insensitive regex for highlighting the search term in titles.
    /// The term is escaped: search is a substring match, not a pattern.
    pub fn active_search_re(&self) -> Option<Regex> {
        let pattern = self.search.text().trim();
        if pattern.is_empty() {
            return None;
        }
        Regex::new(&format!("(?i){}", regex::escape(pattern))).ok()
    }

    pub fn is_refreshing(&self) -> bool {
        self.refreshing_until.is_some()
    }

    /// Clear timed state whose deadline has passed
    pub fn tick(&mut self) {
        if let Some(until) = self.refreshing_until {
            if Instant::now() >= until {
                self.refreshing_until = None;
            }
        }
    }

    pub fn show_alert(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.alert = Some(Alert {
            title: title.into(),
            message: message.into(),
        });
    }
}

/// Run the TUI application
pub fn run(config_path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let config_path = config_path
        .map(Path::to_path_buf)
        .unwrap_or_else(config_io::default_config_path);
    let config = config_io::read_config(&config_path)?;

    let provider = RestIdentityProvider::new(&config.auth);
    let mut app = App::new(
        config,
        Box::new(provider),
        Box::new(FileDialogPicker),
        profile_io::default_profile_path(),
    );

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        app.tick();
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    input::handle_key(app, key);
                }
            }
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
