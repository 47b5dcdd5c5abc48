use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Configuration from config.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Identity service settings. The endpoint speaks the Identity Toolkit
/// REST dialect; the api key is issued by the hosting project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default)]
    pub api_key: String,
    /// OAuth client for federated sign-in; the control stays disabled
    /// until both of these are set.
    #[serde(default)]
    pub google_client_id: Option<String>,
    #[serde(default)]
    pub google_client_secret: Option<String>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        AuthConfig {
            endpoint: default_endpoint(),
            api_key: String::new(),
            google_client_id: None,
            google_client_secret: None,
        }
    }
}

fn default_endpoint() -> String {
    "https://identitytoolkit.googleapis.com".to_string()
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default)]
    pub show_key_hints: bool,
    /// Hex color overrides keyed by theme slot name (e.g. "background")
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

impl AuthConfig {
    /// Both halves of the federated OAuth client are configured
    pub fn federated_configured(&self) -> bool {
        self.google_client_id.as_deref().is_some_and(|s| !s.is_empty())
            && self
                .google_client_secret
                .as_deref()
                .is_some_and(|s| !s.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_toml_fills_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.auth.endpoint, "https://identitytoolkit.googleapis.com");
        assert_eq!(config.auth.api_key, "");
        assert!(!config.auth.federated_configured());
        assert!(config.ui.colors.is_empty());
        assert!(!config.ui.show_key_hints);
    }

    #[test]
    fn parses_auth_and_ui_sections() {
        let config: AppConfig = toml::from_str(
            r##"
[auth]
endpoint = "https://id.example.test"
api_key = "k-123"
google_client_id = "cid"
google_client_secret = "secret"

[ui]
show_key_hints = true

[ui.colors]
background = "#101010"
"##,
        )
        .unwrap();
        assert_eq!(config.auth.endpoint, "https://id.example.test");
        assert_eq!(config.auth.api_key, "k-123");
        assert!(config.auth.federated_configured());
        assert!(config.ui.show_key_hints);
        assert_eq!(config.ui.colors.get("background").unwrap(), "#101010");
    }

    #[test]
    fn federated_needs_both_id_and_secret() {
        let config: AppConfig = toml::from_str(
            r#"
[auth]
google_client_id = "cid"
"#,
        )
        .unwrap();
        assert!(!config.auth.federated_configured());
    }
}
