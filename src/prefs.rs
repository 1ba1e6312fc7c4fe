// src/prefs.rs

use std::{fs, path::PathBuf};

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

use crate::errors::PreferenceError;

pub const PREFS_FILE_NAME: &str = "winoptimize.json";

/// UI language. Unrecognized persisted values fall back to Chinese.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display, EnumString, EnumIter,
)]
#[strum(serialize_all = "lowercase")]
pub enum Language {
    #[default]
    Cn,
    En,
}

/// UI theme. Unrecognized persisted values fall back to light.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display, EnumString, EnumIter,
)]
#[strum(serialize_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// The persisted user preference governing all UI presentation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Preference {
    pub language: Language,
    pub theme: Theme,
}

/// On-disk shape of the preference file. Fields are kept as plain strings
/// so that a single malformed value degrades to its default instead of
/// discarding the rest of the file.
#[derive(Serialize, Deserialize, Default)]
struct PreferenceFile {
    language: Option<String>,
    theme: Option<String>,
}

impl From<PreferenceFile> for Preference {
    fn from(file: PreferenceFile) -> Self {
        Self {
            language: file
                .language
                .and_then(|raw| raw.parse().ok())
                .unwrap_or_default(),
            theme: file
                .theme
                .and_then(|raw| raw.parse().ok())
                .unwrap_or_default(),
        }
    }
}

impl From<&Preference> for PreferenceFile {
    fn from(prefs: &Preference) -> Self {
        Self {
            language: Some(prefs.language.to_string()),
            theme: Some(prefs.theme.to_string()),
        }
    }
}

static DEFAULT_PREFS_PATH: Lazy<PathBuf> = Lazy::new(|| {
    // Kept next to the executable, like the original tool.
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(PREFS_FILE_NAME)))
        .unwrap_or_else(|| PathBuf::from(PREFS_FILE_NAME))
});

/// Synchronous file-backed store for the single [`Preference`] record.
#[derive(Clone, Debug)]
pub struct PreferenceStore {
    path: PathBuf,
}

impl Default for PreferenceStore {
    fn default() -> Self {
        Self::at(DEFAULT_PREFS_PATH.clone())
    }
}

impl PreferenceStore {
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Loads the persisted preference. Never fails: a missing, unreadable
    /// or malformed file yields the defaults (cn, light).
    pub fn load(&self) -> Preference {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::debug!(
                    "No preference file at {:?} ({}), using defaults",
                    self.path,
                    e
                );
                return Preference::default();
            }
        };

        match serde_json::from_str::<PreferenceFile>(&raw) {
            Ok(file) => Preference::from(file),
            Err(e) => {
                tracing::warn!(
                    "Preference file {:?} is malformed ({}), using defaults",
                    self.path,
                    e
                );
                Preference::default()
            }
        }
    }

    /// Persists the preference, overwriting the file in place. Callers log
    /// failures and keep the in-memory value; a failed save is never a
    /// blocking error for the UI.
    pub fn save(&self, prefs: &Preference) -> Result<(), PreferenceError> {
        let contents = serde_json::to_string_pretty(&PreferenceFile::from(prefs))?;
        fs::write(&self.path, contents)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> PreferenceStore {
        PreferenceStore::at(dir.path().join(PREFS_FILE_NAME))
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let prefs = store_in(&dir).load();
        assert_eq!(prefs, Preference::default());
        assert_eq!(prefs.language, Language::Cn);
        assert_eq!(prefs.theme, Theme::Light);
    }

    #[test]
    fn malformed_json_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), "{not json").unwrap();
        assert_eq!(store.load(), Preference::default());
    }

    #[test]
    fn round_trip_all_combinations() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        for language in Language::iter() {
            for theme in Theme::iter() {
                let prefs = Preference { language, theme };
                store.save(&prefs).unwrap();
                assert_eq!(store.load(), prefs);
            }
        }
    }

    #[test]
    fn unknown_language_falls_back_without_clobbering_theme() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), r#"{"language": "klingon", "theme": "dark"}"#).unwrap();
        let prefs = store.load();
        assert_eq!(prefs.language, Language::Cn);
        assert_eq!(prefs.theme, Theme::Dark);
    }

    #[test]
    fn unknown_theme_falls_back_without_clobbering_language() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), r#"{"language": "en", "theme": "sepia"}"#).unwrap();
        let prefs = store.load();
        assert_eq!(prefs.language, Language::En);
        assert_eq!(prefs.theme, Theme::Light);
    }

    #[test]
    fn missing_fields_fall_back_individually() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), r#"{"theme": "dark"}"#).unwrap();
        let prefs = store.load();
        assert_eq!(prefs.language, Language::Cn);
        assert_eq!(prefs.theme, Theme::Dark);
    }

    #[test]
    fn save_failure_surfaces_as_error() {
        let dir = tempfile::tempdir().unwrap();
        // A directory component that is actually a file.
        let bogus = dir.path().join("not_a_dir").join(PREFS_FILE_NAME);
        let store = PreferenceStore::at(bogus);
        assert!(store.save(&Preference::default()).is_err());
    }
}
