use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// The personal profile record. Persisted as a single JSON document; all
/// fields are free text on purpose; age in particular is collected but
/// never validated as numeric.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub age: String,
    #[serde(default)]
    pub gender: String,
    /// Path of the picked avatar image, if any
    #[serde(default)]
    pub avatar: Option<PathBuf>,
}

impl Profile {
    /// Uppercase initials derived from the full name, for the placeholder
    /// avatar shown when no image has been picked. Falls back to "U".
    pub fn initials(&self) -> String {
        let initials: String = self
            .full_name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect();
        if initials.is_empty() {
            "U".to_string()
        } else {
            initials
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_take_the_first_two_words() {
        let profile = Profile {
            full_name: "ada byron lovelace".into(),
            ..Default::default()
        };
        assert_eq!(profile.initials(), "AB");
    }

    #[test]
    fn initials_fall_back_to_u() {
        assert_eq!(Profile::default().initials(), "U");
        let profile = Profile {
            full_name: "   ".into(),
            ..Default::default()
        };
        assert_eq!(profile.initials(), "U");
    }

    #[test]
    fn serde_defaults_on_minimal_object() {
        let profile: Profile = serde_json::from_str(r#"{"full_name":"Sam"}"#).unwrap();
        assert_eq!(profile.full_name, "Sam");
        assert_eq!(profile.age, "");
        assert_eq!(profile.gender, "");
        assert!(profile.avatar.is_none());
    }
}
