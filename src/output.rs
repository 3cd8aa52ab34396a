//! Result feed for the launcher front-end.
//!
//! The JSON layout follows the script-filter format: a top-level `items`
//! array whose entries carry a title, subtitle, the argument passed on when
//! the item is actioned, and workflow variables.

use crate::batch::FakeBatch;
use crate::engine::{FakeumError, Resolution};
use crate::query::{QueryError, DELIMITER};
use serde::Serialize;
use std::collections::BTreeMap;

/// System warning icon shown on error items.
pub const ICON_WARNING: &str =
    "/System/Library/CoreServices/CoreTypes.bundle/Contents/Resources/AlertCautionIcon.icns";

/// Text shown in large type and copied to the clipboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemText {
    pub copy: String,
    pub largetype: String,
}

/// Alternative action bound to a modifier key.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Modifier {
    pub subtitle: String,
    pub valid: bool,
    pub variables: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Icon {
    pub path: String,
}

/// One row of the feed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Item {
    pub title: String,
    pub subtitle: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autocomplete: Option<String>,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<ItemText>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub variables: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub mods: BTreeMap<String, Modifier>,
}

impl Item {
    /// An invalid item carrying a warning.
    pub fn warning(title: impl Into<String>, subtitle: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: subtitle.into(),
            arg: None,
            autocomplete: None,
            valid: false,
            text: None,
            icon: Some(Icon {
                path: ICON_WARNING.to_string(),
            }),
            variables: BTreeMap::new(),
            mods: BTreeMap::new(),
        }
    }

    /// An actionable item for a batch of data.
    pub fn from_batch(batch: &FakeBatch, count: Option<u64>, snippet_mode: bool) -> Self {
        let data = &batch.text;
        let subtitle = match count {
            Some(count) => {
                let example = data.split('\n').next().unwrap_or_default().trim();
                format!("{count} {DELIMITER} e.g. \"{example}\"")
            }
            None => data.clone(),
        };

        let mut variables = vars(&[("title", "Copied to Clipboard"), ("text", data.as_str())]);
        let mut mods = BTreeMap::new();
        if snippet_mode {
            variables.insert("paste".to_string(), "1".to_string());
        } else {
            mods.insert(
                "cmd".to_string(),
                Modifier {
                    subtitle: "Paste to frontmost application".to_string(),
                    valid: true,
                    variables: vars(&[("paste", "1"), ("SHOW_NOTIFICATIONS", "0")]),
                },
            );
        }

        Self {
            title: batch.name.clone(),
            subtitle,
            arg: Some(data.clone()),
            autocomplete: Some(format!("{} {DELIMITER} ", batch.name)),
            valid: true,
            text: Some(ItemText {
                copy: data.clone(),
                largetype: data.clone(),
            }),
            icon: None,
            variables,
            mods,
        }
    }
}

fn vars(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// The complete feed for one query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Feedback {
    /// Asks the front-end to clear the query
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub reset: bool,
    pub items: Vec<Item>,
}

impl Feedback {
    pub fn from_items(items: Vec<Item>) -> Self {
        Self {
            reset: false,
            items,
        }
    }

    /// Build the feed for a resolved query.
    pub fn from_resolution(resolution: &Resolution, snippet_mode: bool) -> Self {
        match resolution {
            Resolution::Reset => Self {
                reset: true,
                items: Vec::new(),
            },
            Resolution::Batches { batches, .. } if batches.is_empty() => Self::from_items(vec![
                Item::warning("No matching fakers", "Try a different query"),
            ]),
            Resolution::Batches { batches, count } => Self::from_items(
                batches
                    .iter()
                    .map(|batch| Item::from_batch(batch, *count, snippet_mode))
                    .collect(),
            ),
        }
    }

    /// Build the feed for an error caused by user input.
    ///
    /// Returns `None` for internal errors.
    pub fn from_error(error: &FakeumError) -> Option<Self> {
        let item = match error {
            FakeumError::Query(QueryError::InvalidCount(text)) => {
                Item::warning(format!("Not a number : {text}"), "Please enter a number")
            }
            FakeumError::CountTooLarge { count, max } => Item::warning(
                format!("Too many : {count}"),
                format!("Please enter a number up to {max}"),
            ),
            FakeumError::Catalog(_) => return None,
        };
        Some(Self::from_items(vec![item]))
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Plain-text rendering: the title, then the data or subtitle, per item.
    pub fn to_text(&self) -> String {
        self.items
            .iter()
            .map(|item| {
                let body = item.arg.as_deref().unwrap_or(&item.subtitle);
                format!("{}\n{}\n", item.title, body)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn batch(name: &str, text: &str, count: u64) -> FakeBatch {
        FakeBatch {
            name: name.to_string(),
            text: text.to_string(),
            count,
        }
    }

    #[test]
    fn test_item_with_count() {
        let item = Item::from_batch(&batch("Name", "Ada Lovelace\nAlan Turing", 2), Some(2), false);
        assert_eq!(item.subtitle, "2 ✕ e.g. \"Ada Lovelace\"");
        assert_eq!(item.autocomplete.as_deref(), Some("Name ✕ "));
        assert_eq!(item.arg.as_deref(), Some("Ada Lovelace\nAlan Turing"));
        assert!(item.mods.contains_key("cmd"));
        assert!(!item.variables.contains_key("paste"));
    }

    #[test]
    fn test_item_without_count() {
        let item = Item::from_batch(&batch("City", "Berlin", 1), None, true);
        assert_eq!(item.subtitle, "Berlin");
        assert_eq!(item.variables.get("paste").map(String::as_str), Some("1"));
        assert!(item.mods.is_empty());
    }

    #[test]
    fn test_json_layout() {
        let resolution = Resolution::Batches {
            batches: vec![batch("City", "Berlin", 1)],
            count: None,
        };
        let json = Feedback::from_resolution(&resolution, false).to_json().unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();

        let item = &value["items"][0];
        assert_eq!(item["title"], "City");
        assert_eq!(item["text"]["copy"], "Berlin");
        assert_eq!(item["variables"]["title"], "Copied to Clipboard");
        assert_eq!(item["mods"]["cmd"]["variables"]["SHOW_NOTIFICATIONS"], "0");
        assert!(value.get("reset").is_none());
        assert!(item.get("icon").is_none());
    }

    #[test]
    fn test_empty_results() {
        let resolution = Resolution::Batches {
            batches: Vec::new(),
            count: Some(3),
        };
        let feedback = Feedback::from_resolution(&resolution, false);
        assert_eq!(feedback.items.len(), 1);
        assert_eq!(feedback.items[0].title, "No matching fakers");
        assert!(!feedback.items[0].valid);
    }

    #[test]
    fn test_reset_feed() {
        let feedback = Feedback::from_resolution(&Resolution::Reset, false);
        let value: Value = serde_json::from_str(&feedback.to_json().unwrap()).unwrap();
        assert_eq!(value["reset"], true);
        assert!(value.get("rerun").is_none());
        assert!(value["items"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_invalid_count_feed() {
        let error = FakeumError::Query(QueryError::InvalidCount("abc".to_string()));
        let feedback = Feedback::from_error(&error).unwrap();
        assert_eq!(feedback.items[0].title, "Not a number : abc");
        assert_eq!(feedback.items[0].subtitle, "Please enter a number");
    }

    #[test]
    fn test_internal_error_has_no_feed() {
        let error = FakeumError::Catalog(fakeum_core::CatalogError::UnknownType("X".to_string()));
        assert!(Feedback::from_error(&error).is_none());
    }

    #[test]
    fn test_text_rendering() {
        let feedback = Feedback::from_items(vec![
            Item::from_batch(&batch("City", "Berlin", 1), None, false),
            Item::warning("No matching fakers", "Try a different query"),
        ]);
        assert_eq!(
            feedback.to_text(),
            "City\nBerlin\n\nNo matching fakers\nTry a different query\n"
        );
    }
}
