//! Key-value settings store
//!
//! The app persists only small preferences here, currently the selected
//! display language. Favorites are deliberately not stored.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::TourspotError;

/// Settings key holding the language code
pub const LANGUAGE_KEY: &str = "language";

/// Display language of the app
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "zh-Hant")]
    TraditionalChinese,
    #[serde(rename = "en")]
    English,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::TraditionalChinese, Language::English];

    /// Language code as stored in settings
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Language::TraditionalChinese => "zh-Hant",
            Language::English => "en",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = TourspotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::ALL
            .into_iter()
            .find(|lang| lang.code() == s)
            .ok_or_else(|| TourspotError::validation(format!("Unsupported language code '{s}'")))
    }
}

/// Persistent string key-value storage
pub trait SettingsStore: fmt::Debug {
    fn get(&self, key: &str) -> crate::Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> crate::Result<()>;
}

/// Settings kept in memory only
#[derive(Debug, Default)]
pub struct MemorySettings {
    values: HashMap<String, String>,
}

impl MemorySettings {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SettingsStore for MemorySettings {
    fn get(&self, key: &str) -> crate::Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> crate::Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Settings stored as a flat JSON object in a single file
#[derive(Debug)]
pub struct FileSettings {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FileSettings {
    /// Open the settings file at `path`. A missing file is an empty store.
    pub fn open(path: impl AsRef<Path>) -> crate::Result<Self> {
        let path = path.as_ref().to_path_buf();
        let values = if path.exists() {
            let content = fs::read_to_string(&path)?;
            let values: BTreeMap<String, String> = serde_json::from_str(&content)?;
            debug!("Loaded {} settings from {}", values.len(), path.display());
            values
        } else {
            debug!("No settings file at {}, starting empty", path.display());
            BTreeMap::new()
        };
        Ok(Self { path, values })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write(&self, values: &BTreeMap<String, String>) -> crate::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let content = serde_json::to_string_pretty(values)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

impl SettingsStore for FileSettings {
    fn get(&self, key: &str) -> crate::Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> crate::Result<()> {
        let mut next = self.values.clone();
        next.insert(key.to_string(), value.to_string());
        self.write(&next).map_err(|e| {
            TourspotError::settings(format!(
                "Failed to write {}: {e}",
                self.path.display()
            ))
        })?;
        self.values = next;
        info!("Saved setting '{}' to {}", key, self.path.display());
        Ok(())
    }
}

/// Stored language, or `fallback` when missing or unrecognised
pub fn load_language(store: &dyn SettingsStore, fallback: Language) -> crate::Result<Language> {
    let Some(code) = store.get(LANGUAGE_KEY)? else {
        return Ok(fallback);
    };
    match code.parse() {
        Ok(language) => Ok(language),
        Err(e) => {
            warn!("Ignoring stored language: {}", e);
            Ok(fallback)
        }
    }
}

pub fn save_language(store: &mut dyn SettingsStore, language: Language) -> crate::Result<()> {
    store.set(LANGUAGE_KEY, language.code())
}
