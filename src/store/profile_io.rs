use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::model::Profile;

/// Error type for profile persistence
#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    #[error("could not write profile to {path}: {source}")]
    WriteError {
        path: PathBuf,
        source: io::Error,
    },
    #[error("could not encode profile: {0}")]
    EncodeError(#[from] serde_json::Error),
}

/// Default location of the profile document:
/// `<data_dir>/taskpad/profile.json`
pub fn default_profile_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("taskpad")
        .join("profile.json")
}

/// Read the stored profile. Missing or malformed documents read as None;
/// the app then starts in edit mode with empty fields.
pub fn read_profile(path: &Path) -> Option<Profile> {
    let content = fs::read_to_string(path).ok()?;
    serde_json::from_str(&content).ok()
}

/// Write the profile document, replacing atomically via a temp file so a
/// crash mid-write never leaves a truncated record behind.
pub fn write_profile(path: &Path, profile: &Profile) -> Result<(), ProfileError> {
    let content = serde_json::to_string_pretty(profile)?;
    let dir = path.parent().unwrap_or(Path::new("."));
    fs::create_dir_all(dir).map_err(|e| ProfileError::WriteError {
        path: path.to_path_buf(),
        source: e,
    })?;

    let write = || -> io::Result<()> {
        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(content.as_bytes())?;
        tmp.flush()?;
        tmp.persist(path).map_err(|e| e.error)?;
        Ok(())
    };
    write().map_err(|e| ProfileError::WriteError {
        path: path.to_path_buf(),
        source: e,
    })?;

    tracing::debug!(path = %path.display(), "profile saved");
    Ok(())
}
