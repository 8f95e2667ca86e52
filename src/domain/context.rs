//! Read-only data shared by every field of one form render.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

use super::overrides::{OverrideMap, OverrideRecord};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormContext {
    /// Identifier of the form's root field
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overrides: Option<Arc<OverrideMap>>,
    /// Set when the form edits a dialog; keeps keys unique across dialogs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dialog_id: Option<String>,
}

impl FormContext {
    pub fn new(root_id: impl Into<String>) -> Self {
        Self {
            root_id: Some(root_id.into()),
            ..Default::default()
        }
    }

    pub fn with_overrides(mut self, overrides: OverrideMap) -> Self {
        self.overrides = Some(Arc::new(overrides));
        self
    }

    /// Use the overrides found in an editor schema document
    pub fn with_editor_schema(self, editor_schema: &Value) -> Self {
        self.with_overrides(OverrideMap::from_editor_schema(editor_schema))
    }

    pub fn with_dialog_id(mut self, dialog_id: impl Into<String>) -> Self {
        self.dialog_id = Some(dialog_id.into());
        self
    }

    pub fn is_root(&self, id: &str) -> bool {
        self.root_id.as_deref() == Some(id)
    }

    /// Override record for a schema title; `None` when the mapping itself is absent
    pub fn override_for(&self, title: &str) -> Option<&OverrideRecord> {
        self.overrides.as_deref().and_then(|map| map.get(title))
    }

    pub fn dialog_id(&self) -> Option<&str> {
        self.dialog_id.as_deref().filter(|id| !id.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_context_matches_nothing() {
        let ctx = FormContext::default();
        assert!(!ctx.is_root("root"));
        assert!(!ctx.is_root(""));
        assert!(ctx.override_for("Prompt").is_none());
        assert!(ctx.dialog_id().is_none());
    }

    #[test]
    fn test_override_lookup_through_editor_schema() {
        let ctx = FormContext::new("root").with_editor_schema(&json!({
            "content": { "SDKOverrides": { "Prompt": { "title": "Bot asks" } } }
        }));

        assert!(ctx.override_for("Prompt").is_some());
        assert!(ctx.override_for("prompt").is_none());
    }

    #[test]
    fn test_empty_dialog_id_is_ignored() {
        let ctx = FormContext::new("root").with_dialog_id("");
        assert!(ctx.dialog_id().is_none());
    }
}
