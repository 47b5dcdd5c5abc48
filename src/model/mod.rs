pub mod config;
pub mod draft;
pub mod profile;
pub mod task;

pub use config::{AppConfig, AuthConfig, UiConfig};
pub use draft::{DraftMode, TaskDraft};
pub use profile::Profile;
pub use task::{Priority, Status, Task};
