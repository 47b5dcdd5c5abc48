use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::model::AppConfig;

/// Error type for config I/O
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: io::Error,
    },
    #[error("could not parse {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("could not write {path}: {source}")]
    WriteError {
        path: PathBuf,
        source: io::Error,
    },
    #[error("config already exists at {0}")]
    AlreadyExists(PathBuf),
}

/// Default location: `<config_dir>/taskpad/config.toml`
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("taskpad")
        .join("config.toml")
}

/// Read the config file. A missing file yields defaults; a present but
/// unparseable file is an error the user should see.
pub fn read_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(AppConfig::default()),
        Err(e) => {
            return Err(ConfigError::ReadError {
                path: path.to_path_buf(),
                source: e,
            });
        }
    };
    toml::from_str(&content).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Scaffold written by `tp init`
const CONFIG_TEMPLATE: &str = "\
# taskpad configuration

[auth]
# Identity Toolkit REST endpoint and the hosting project's web API key.
# Sign-in fails with a configuration message until api_key is set.
endpoint = \"https://identitytoolkit.googleapis.com\"
api_key = \"\"

# OAuth client for \"Sign in with Google\". The login view keeps the
# federated button disabled until both values are set.
# google_client_id = \"1234567890.apps.googleusercontent.com\"
# google_client_secret = \"...\"

[ui]
show_key_hints = false

# Theme overrides, hex colors keyed by slot name:
# [ui.colors]
# background = \"#0C001B\"
# highlight = \"#FB4196\"
";

/// Write the config scaffold for `tp init`. Refuses to clobber an
/// existing file.
pub fn write_config_template(path: &Path) -> Result<(), ConfigError> {
    if path.exists() {
        return Err(ConfigError::AlreadyExists(path.to_path_buf()));
    }
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(|e| ConfigError::WriteError {
            path: path.to_path_buf(),
            source: e,
        })?;
    }
    fs::write(path, CONFIG_TEMPLATE).map_err(|e| ConfigError::WriteError {
        path: path.to_path_buf(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let config = read_config(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config.auth.api_key, "");
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "auth = 3").unwrap();
        assert!(read_config(&path).is_err());
    }

    #[test]
    fn template_round_trips_through_the_parser() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        write_config_template(&path).unwrap();
        let config = read_config(&path).unwrap();
        assert_eq!(config.auth.endpoint, "https://identitytoolkit.googleapis.com");
        assert!(!config.auth.federated_configured());
    }

    #[test]
    fn template_refuses_to_clobber() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        write_config_template(&path).unwrap();
        assert!(matches!(
            write_config_template(&path),
            Err(ConfigError::AlreadyExists(_))
        ));
    }
}
