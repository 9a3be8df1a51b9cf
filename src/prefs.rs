use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use log::warn;
use serde_yaml::{Mapping, Value};

use crate::env::{primary_subtag, Environment};

/// Languages the question backend can serve.
pub const LANGUAGES: &[&str] = &["de", "en"];

/// Fallback when no supported locale is reported.
pub const DEFAULT_LANGUAGE: &str = "de";

const PREFS_FILE: &str = "preferences.yaml";

/// The three persisted preference values.
#[derive(Debug, Clone, PartialEq)]
pub struct Preferences {
    pub index: usize,
    pub language: Option<String>,
    pub dark_mode: bool,
}

/// Durable store for the user preferences.
///
/// Opening merges any persisted record with defaults computed from the
/// environment and silently repairs invalid fields; every setter writes
/// the record straight back to disk. One instance lives for the whole
/// application, owned by the root and passed down by reference.
#[derive(Debug)]
pub struct PreferenceStore {
    path: PathBuf,
    prefs: Preferences,
    // persisted keys this version does not know about, carried across
    // save cycles
    extra: Mapping,
}

/// First reported locale if its primary subtag is supported, otherwise
/// the fixed default. Only the first tag is consulted.
pub fn resolve_language(locales: &[String]) -> String {
    if let Some(first) = locales.first() {
        let primary = primary_subtag(first);
        if LANGUAGES.contains(&primary) {
            return primary.to_string();
        }
    }
    DEFAULT_LANGUAGE.to_string()
}

impl PreferenceStore {
    /// Opens the per-user record in the platform config directory.
    pub fn open(env: &Environment) -> Result<Self, String> {
        let dirs = ProjectDirs::from("", "", "quizcore")
            .ok_or_else(|| "Cannot determine config directory".to_string())?;
        Self::open_at(dirs.config_dir().join(PREFS_FILE), env)
    }

    /// Opens the record at an explicit path.
    pub fn open_at(path: impl AsRef<Path>, env: &Environment) -> Result<Self, String> {
        let path = path.as_ref().to_path_buf();
        let default_language = resolve_language(&env.locales);
        let default_dark = env.prefers_dark;

        let mut prefs = Preferences {
            index: 0,
            language: Some(default_language.clone()),
            dark_mode: default_dark,
        };
        let mut extra = Mapping::new();

        if path.exists() {
            let content = fs::read_to_string(&path)
                .map_err(|e| format!("Cannot read {}: {}", path.display(), e))?;
            match serde_yaml::from_str::<Value>(&content) {
                Ok(Value::Mapping(record)) => {
                    for (key, value) in record {
                        if key == "index" {
                            // anything that is not a number resets to 0
                            prefs.index = value.as_u64().map(|v| v as usize).unwrap_or(0);
                        } else if key == "language" {
                            prefs.language = Some(match value.as_str() {
                                Some(lang) if LANGUAGES.contains(&lang) => lang.to_string(),
                                _ => default_language.clone(),
                            });
                        } else if key == "darkMode" {
                            prefs.dark_mode = value.as_bool().unwrap_or(default_dark);
                        } else {
                            extra.insert(key, value);
                        }
                    }
                }
                _ => {
                    warn!(
                        "preference record at {} is corrupt, using defaults",
                        path.display()
                    );
                }
            }
        }

        let store = Self { path, prefs, extra };
        store.save()?;
        Ok(store)
    }

    pub fn preferences(&self) -> &Preferences {
        &self.prefs
    }

    pub fn index(&self) -> usize {
        self.prefs.index
    }

    pub fn language(&self) -> Option<&str> {
        self.prefs.language.as_deref()
    }

    pub fn dark_mode(&self) -> bool {
        self.prefs.dark_mode
    }

    /// Remembers the last viewed question index.
    pub fn set_index(&mut self, index: usize) -> Result<(), String> {
        self.prefs.index = index;
        self.save()
    }

    pub fn set_language(&mut self, language: impl Into<String>) -> Result<(), String> {
        self.prefs.language = Some(language.into());
        self.save()
    }

    pub fn set_dark_mode(&mut self, dark_mode: bool) -> Result<(), String> {
        self.prefs.dark_mode = dark_mode;
        self.save()
    }

    fn save(&self) -> Result<(), String> {
        let mut record = self.extra.clone();
        record.insert("index".into(), Value::from(self.prefs.index as u64));
        if let Some(language) = &self.prefs.language {
            record.insert("language".into(), Value::from(language.as_str()));
        }
        record.insert("darkMode".into(), Value::from(self.prefs.dark_mode));

        let yaml = serde_yaml::to_string(&Value::Mapping(record))
            .map_err(|e| format!("Cannot serialize preferences: {}", e))?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Cannot create {}: {}", parent.display(), e))?;
        }
        atomic_write(&self.path, &yaml)
    }
}

fn atomic_write(path: &Path, content: &str) -> Result<(), String> {
    let tmp = path.with_extension("tmp");
    fs::write(&tmp, content).map_err(|e| format!("Cannot write {}: {}", tmp.display(), e))?;
    fs::rename(&tmp, path).map_err(|e| format!("Cannot rename: {}", e))?;
    Ok(())
}
