//! Configuration loading.

pub mod settings;

pub use settings::{
    clean_locales, Overrides, Settings, SettingsError, DEFAULT_LOCALES, DEFAULT_MAX_COUNT,
    DEFAULT_PARAGRAPH_SENTENCES,
};
