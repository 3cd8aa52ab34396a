//! Engine settings.
//!
//! Settings come from three layers, highest precedence first: command-line
//! flags and their environment variables, an optional YAML settings file, and
//! the built-in defaults.
//!
//! ```yaml
//! locales: [en, de_DE, fr_FR]
//! paragraph_sentences: 4
//! max_count: 200
//! snippet_mode: false
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Locales used when none are configured.
pub const DEFAULT_LOCALES: &[&str] = &["en", "de_DE", "es_ES", "fr_FR"];

/// Sentences per generated paragraph.
pub const DEFAULT_PARAGRAPH_SENTENCES: usize = 3;

/// Upper bound on the number of values requested at once.
pub const DEFAULT_MAX_COUNT: u64 = 1000;

/// Error type for settings loading and validation.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// Error reading settings file
    #[error("Failed to read settings file: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A value is out of range
    #[error("Invalid value for '{field}': {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

/// Configuration of the engine and the result feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Ordered locale identifiers of the generator pool
    pub locales: Vec<String>,
    /// Sentence count passed to the paragraph generator
    pub paragraph_sentences: usize,
    /// Largest count accepted in a query
    pub max_count: u64,
    /// Paste results directly instead of offering a paste modifier
    pub snippet_mode: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            locales: DEFAULT_LOCALES.iter().map(|l| l.to_string()).collect(),
            paragraph_sentences: DEFAULT_PARAGRAPH_SENTENCES,
            max_count: DEFAULT_MAX_COUNT,
            snippet_mode: false,
        }
    }
}

/// Trim and de-duplicate locale ids, keeping the first occurrence.
///
/// A list with no usable ids yields [`DEFAULT_LOCALES`].
pub fn clean_locales<S: AsRef<str>>(locales: &[S]) -> Vec<String> {
    let mut cleaned: Vec<String> = Vec::with_capacity(locales.len());
    for locale in locales {
        let locale = locale.as_ref().trim();
        if !locale.is_empty() && !cleaned.iter().any(|l| l == locale) {
            cleaned.push(locale.to_string());
        }
    }
    if cleaned.is_empty() {
        cleaned = DEFAULT_LOCALES.iter().map(|l| l.to_string()).collect();
    }
    cleaned
}

/// Values supplied on the command line or through the environment.
///
/// `None` and an empty locale list leave the underlying setting untouched.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub locales: Vec<String>,
    pub paragraph_sentences: Option<usize>,
    pub snippet_mode: Option<bool>,
}

impl Settings {
    /// Load settings from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse settings from a YAML string.
    ///
    /// Missing fields take their defaults. An empty document is valid.
    pub fn from_yaml(yaml: &str) -> Result<Self, SettingsError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let settings: Settings = serde_yaml::from_str(yaml)?;
        settings.normalized()
    }

    /// Apply command-line overrides on top of these settings.
    pub fn with_overrides(mut self, overrides: Overrides) -> Result<Self, SettingsError> {
        if !overrides.locales.is_empty() {
            self.locales = overrides.locales;
        }
        if let Some(n) = overrides.paragraph_sentences {
            self.paragraph_sentences = n;
        }
        if let Some(snippet_mode) = overrides.snippet_mode {
            self.snippet_mode = snippet_mode;
        }
        self.normalized()
    }

    /// Clean up the locale list and check numeric bounds.
    ///
    /// Locale ids go through [`clean_locales`].
    pub fn normalized(mut self) -> Result<Self, SettingsError> {
        self.locales = clean_locales(&self.locales);

        if self.paragraph_sentences == 0 {
            return Err(SettingsError::InvalidValue {
                field: "paragraph_sentences",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.max_count == 0 {
            return Err(SettingsError::InvalidValue {
                field: "max_count",
                reason: "must be at least 1".to_string(),
            });
        }

        Ok(self)
    }
}
