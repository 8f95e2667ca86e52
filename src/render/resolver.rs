//! Title, description and key resolution for one field.

use serde::{Deserialize, Serialize};

use crate::domain::context::FormContext;
use crate::domain::field::FieldDescriptor;
use crate::domain::overrides::{HelpLink, OverrideRecord};

use super::start_case::start_case;

/// Render key and the DOM id derived from it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldKey {
    pub key: String,
    pub dom_id: String,
}

/// Resolved description text plus its optional help link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Description {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help_link: Option<HelpLink>,
}

fn first_non_empty<'a, I>(candidates: I) -> Option<&'a str>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    candidates.into_iter().flatten().find(|s| !s.is_empty())
}

/// Strip the characters that are not allowed in a DOM id (`.` and `#`)
pub fn dom_id(key: &str) -> String {
    key.chars().filter(|c| !matches!(c, '.' | '#')).collect()
}

/// `{id}` or `{id}-{dialogId}` when the form edits a dialog
pub fn derive_key(field: &FieldDescriptor, ctx: &FormContext) -> FieldKey {
    let key = match ctx.dialog_id() {
        Some(dialog_id) => format!("{}-{}", field.id(), dialog_id),
        None => field.id().to_string(),
    };
    let dom_id = dom_id(&key);
    FieldKey { key, dom_id }
}

/// Override record for the field's schema title, if the field declares one
pub fn lookup_override<'a>(field: &FieldDescriptor, ctx: &'a FormContext) -> Option<&'a OverrideRecord> {
    let title = field.schema.title.as_deref().filter(|t| !t.is_empty())?;
    ctx.override_for(title)
}

/// Title of a nested field, `None` when suppressed or empty
pub fn resolve_title(field: &FieldDescriptor, record: Option<&OverrideRecord>) -> Option<String> {
    if record.is_some_and(|r| r.title.is_suppressed()) {
        return None;
    }

    let title = first_non_empty([
        record.and_then(|r| r.title.text()),
        field.title.as_deref(),
        field.ui_schema.title.as_deref(),
        field.schema.title.as_deref(),
    ]);

    match title {
        Some(title) => Some(title.to_string()),
        None => field
            .name
            .as_deref()
            .map(start_case)
            .filter(|t| !t.is_empty()),
    }
}

/// Description of a nested field, `None` when suppressed or empty
pub fn resolve_description(field: &FieldDescriptor, record: Option<&OverrideRecord>) -> Option<Description> {
    if record.is_some_and(|r| r.description.is_suppressed()) {
        return None;
    }

    // `ui:description` only replaces the text of a block another source opened
    first_non_empty([
        record.and_then(|r| r.description.text()),
        field.description.as_deref(),
        field.schema.description.as_deref(),
    ])?;

    let text = first_non_empty([
        record.and_then(|r| r.description.text()),
        field.description.as_deref(),
        field.ui_schema.description.as_deref(),
        field.schema.description.as_deref(),
    ])?;

    Some(Description {
        text: text.to_string(),
        help_link: record.and_then(OverrideRecord::help_link),
    })
}

/// Title shown by the root-field renderer; overrides do not apply there
pub fn root_title(field: &FieldDescriptor) -> Option<String> {
    first_non_empty([
        field.title.as_deref(),
        field.ui_schema.title.as_deref(),
        field.schema.title.as_deref(),
    ])
    .map(String::from)
}

pub fn root_description(field: &FieldDescriptor) -> Option<String> {
    first_non_empty([
        field.description.as_deref(),
        field.ui_schema.description.as_deref(),
        field.schema.description.as_deref(),
    ])
    .map(String::from)
}
