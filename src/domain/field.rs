//! Field descriptor supplied by the form library on every render.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// The part of a JSON Schema node the wrapper reads
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SchemaFragment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Layout hints under `ui:options`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UiOptions {
    #[serde(default)]
    pub inline: bool,
    #[serde(default)]
    pub hide_description: bool,
}

/// Per-field UI hints, independent of the schema's own title/description
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UiSchema {
    #[serde(rename = "ui:title", default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "ui:description", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "ui:options", default)]
    pub options: UiOptions,
}

/// Identifier path of a field, e.g. `root_actions_0_prompt`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdSchema {
    #[serde(rename = "__id", default)]
    pub id: String,
}

impl IdSchema {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// Callback invoked with the field's new value.
///
/// Rendering never calls it; it is only forwarded to the root-field renderer
/// and to the children that own the input widgets.
#[derive(Clone)]
pub struct ChangeHandler(Arc<dyn Fn(Value) + Send + Sync>);

impl ChangeHandler {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(Value) + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    pub fn call(&self, value: Value) {
        (self.0)(value)
    }
}

impl fmt::Debug for ChangeHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ChangeHandler(..)")
    }
}

/// Everything the wrapper receives about one field.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDescriptor {
    #[serde(default)]
    pub schema: SchemaFragment,
    #[serde(default)]
    pub ui_schema: UiSchema,
    #[serde(default)]
    pub id_schema: IdSchema,
    /// Internal property name, used as the last-resort title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub form_data: Value,
    /// Explicit title prop, ranks above the UI and schema titles
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Explicit description prop
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Extra class appended to the outer container
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    #[serde(skip)]
    pub on_change: Option<ChangeHandler>,
}

impl FieldDescriptor {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id_schema: IdSchema::new(id),
            ..Default::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_schema_title(mut self, title: impl Into<String>) -> Self {
        self.schema.title = Some(title.into());
        self
    }

    pub fn with_schema_description(mut self, description: impl Into<String>) -> Self {
        self.schema.description = Some(description.into());
        self
    }

    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn with_on_change(mut self, handler: ChangeHandler) -> Self {
        self.on_change = Some(handler);
        self
    }

    pub fn id(&self) -> &str {
        &self.id_schema.id
    }

    pub fn is_inline(&self) -> bool {
        self.ui_schema.options.inline
    }

    pub fn hides_description(&self) -> bool {
        self.ui_schema.options.hide_description
    }
}
