//! Per-title override records read from the editor schema.
//!
//! The editor schema keeps them under `content.SDKOverrides`, keyed by the
//! schema title of the field they customise:
//!
//! ```json
//! { "content": { "SDKOverrides": {
//!     "Prompt": { "title": "Bot asks", "helpLink": "https://...", "helpLinkText": "Learn more" },
//!     "Condition": { "title": false }
//! } } }
//! ```
//!
//! Every accessor here is get-or-default: a missing or malformed level yields
//! "no override", never an error.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::collections::HashMap;

/// Path of the override object inside an editor schema
pub const OVERRIDES_PATH: [&str; 2] = ["content", "SDKOverrides"];

/// An override for a title or a description
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum OverrideText {
    /// Nothing configured, fall through to the field's own value
    #[default]
    Unset,
    /// Configured as boolean `false`, render nothing
    Suppressed,
    Text(String),
}

impl OverrideText {
    pub fn from_value(value: Option<&Value>) -> Self {
        match value {
            Some(Value::Bool(false)) => OverrideText::Suppressed,
            Some(Value::String(s)) => OverrideText::Text(s.clone()),
            _ => OverrideText::Unset,
        }
    }

    pub fn is_suppressed(&self) -> bool {
        matches!(self, OverrideText::Suppressed)
    }

    pub fn is_unset(&self) -> bool {
        matches!(self, OverrideText::Unset)
    }

    /// The override text, if it is a non-empty string
    pub fn text(&self) -> Option<&str> {
        match self {
            OverrideText::Text(s) if !s.is_empty() => Some(s),
            _ => None,
        }
    }
}

impl Serialize for OverrideText {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            OverrideText::Unset => serializer.serialize_none(),
            OverrideText::Suppressed => serializer.serialize_bool(false),
            OverrideText::Text(s) => serializer.serialize_str(s),
        }
    }
}

impl<'de> Deserialize<'de> for OverrideText {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(OverrideText::from_value(Some(&value)))
    }
}

/// Link appended after a field description
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelpLink {
    pub url: String,
    pub text: String,
}

/// Customisation of one field, keyed by its schema title
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverrideRecord {
    #[serde(skip_serializing_if = "OverrideText::is_unset")]
    pub title: OverrideText,
    #[serde(skip_serializing_if = "OverrideText::is_unset")]
    pub description: OverrideText,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help_link_text: Option<String>,
}

impl OverrideRecord {
    /// Read a record from an arbitrary JSON value.
    ///
    /// Returns `None` when the value is not an object. Fields of the wrong
    /// type are treated as absent.
    pub fn from_value(value: &Value) -> Option<Self> {
        let obj = value.as_object()?;
        let string_field = |key: &str| obj.get(key).and_then(Value::as_str).map(String::from);

        Some(Self {
            title: OverrideText::from_value(obj.get("title")),
            description: OverrideText::from_value(obj.get("description")),
            help_link: string_field("helpLink"),
            help_link_text: string_field("helpLinkText"),
        })
    }

    /// The help link, only when both the URL and its text are non-empty
    pub fn help_link(&self) -> Option<HelpLink> {
        let url = self.help_link.as_deref().filter(|s| !s.is_empty())?;
        let text = self.help_link_text.as_deref().filter(|s| !s.is_empty())?;
        Some(HelpLink {
            url: url.to_string(),
            text: text.to_string(),
        })
    }
}

impl<'de> Deserialize<'de> for OverrideRecord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        OverrideRecord::from_value(&value)
            .ok_or_else(|| serde::de::Error::custom("override record must be an object"))
    }
}

/// Override records keyed by schema title
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OverrideMap {
    records: HashMap<String, OverrideRecord>,
}

impl OverrideMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Extract the override mapping from an editor schema document.
    ///
    /// Any missing level of `content.SDKOverrides` gives an empty map.
    /// Entries that are not objects are skipped.
    pub fn from_editor_schema(editor_schema: &Value) -> Self {
        let overrides = OVERRIDES_PATH
            .iter()
            .try_fold(editor_schema, |node, key| node.get(key))
            .and_then(Value::as_object);

        let Some(overrides) = overrides else {
            tracing::debug!("Editor schema has no content.SDKOverrides, using empty overrides");
            return Self::new();
        };

        let mut map = Self::new();
        for (title, value) in overrides {
            match OverrideRecord::from_value(value) {
                Some(record) => {
                    map.insert(title.clone(), record);
                }
                None => tracing::warn!("Skipping override for '{}': not an object", title),
            }
        }
        map
    }

    pub fn insert(&mut self, title: impl Into<String>, record: OverrideRecord) -> Option<OverrideRecord> {
        self.records.insert(title.into(), record)
    }

    pub fn get(&self, title: &str) -> Option<&OverrideRecord> {
        self.records.get(title)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &OverrideRecord)> {
        self.records.iter()
    }
}

impl FromIterator<(String, OverrideRecord)> for OverrideMap {
    fn from_iter<I: IntoIterator<Item = (String, OverrideRecord)>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}
