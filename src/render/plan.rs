//! The root-or-nested decision and the layout of a nested field.

use serde::Serialize;

use crate::domain::context::FormContext;
use crate::domain::field::FieldDescriptor;

use super::resolver::{
    derive_key, lookup_override, resolve_description, resolve_title, root_description, root_title,
    Description, FieldKey,
};

pub const BASE_FIELD_CLASS: &str = "BaseField";
pub const INLINE_CONTENT_CLASS: &str = "BaseFieldInline";
pub const TITLE_CLASS: &str = "BaseFieldTitle";
pub const DESCRIPTION_CLASS: &str = "BaseFieldDescription";
pub const ROOT_FIELD_CLASS: &str = "RootField";

/// Rendering of the form's root field, handed to the root-field renderer
#[derive(Debug, Clone, Serialize)]
pub struct RootRendering {
    #[serde(flatten)]
    pub key: FieldKey,
    /// The descriptor, forwarded unchanged
    pub field: FieldDescriptor,
}

impl RootRendering {
    pub fn title(&self) -> Option<String> {
        root_title(&self.field)
    }

    pub fn description(&self) -> Option<String> {
        root_description(&self.field)
    }

    pub fn class_name(&self) -> String {
        join_classes([Some(ROOT_FIELD_CLASS), self.field.class_name.as_deref()])
    }
}

/// Title and description block above a nested field's children
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldHeader {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Description>,
}

/// Rendering of a regular field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NestedRendering {
    #[serde(flatten)]
    pub key: FieldKey,
    /// Class list of the outer container
    pub class_name: String,
    pub inline: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<FieldHeader>,
}

impl NestedRendering {
    /// Class list of the outer container, `None` when it is empty
    pub fn container_class(&self) -> Option<&str> {
        Some(self.class_name.as_str()).filter(|c| !c.is_empty())
    }

    /// Class of the container wrapping the children
    pub fn content_class(&self) -> Option<&'static str> {
        self.inline.then_some(INLINE_CONTENT_CLASS)
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldRendering {
    Root(RootRendering),
    Nested(NestedRendering),
}

impl FieldRendering {
    pub fn key(&self) -> &FieldKey {
        match self {
            FieldRendering::Root(root) => &root.key,
            FieldRendering::Nested(nested) => &nested.key,
        }
    }

    pub fn is_root(&self) -> bool {
        matches!(self, FieldRendering::Root(_))
    }
}

fn join_classes<'a, I>(classes: I) -> String
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    classes
        .into_iter()
        .flatten()
        .filter(|c| !c.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Decide how a field renders.
///
/// The root field (its id equals `ctx.root_id`) is delegated as is. Any other
/// field gets its title and description resolved against the overrides.
pub fn render_field(field: &FieldDescriptor, ctx: &FormContext) -> FieldRendering {
    let key = derive_key(field, ctx);

    if ctx.is_root(field.id()) {
        tracing::debug!("Field '{}' is the root field, delegating", field.id());
        return FieldRendering::Root(RootRendering {
            key,
            field: field.clone(),
        });
    }

    FieldRendering::Nested(render_nested(field, ctx, key))
}

fn render_nested(field: &FieldDescriptor, ctx: &FormContext, key: FieldKey) -> NestedRendering {
    let inline = field.is_inline();

    let header = if field.hides_description() {
        None
    } else {
        let record = lookup_override(field, ctx);
        let title = resolve_title(field, record);
        let description = if inline {
            None
        } else {
            resolve_description(field, record)
        };

        (title.is_some() || description.is_some()).then_some(FieldHeader { title, description })
    };

    let class_name = join_classes([
        (!inline).then_some(BASE_FIELD_CLASS),
        field.class_name.as_deref(),
    ]);

    tracing::debug!(
        "Field '{}' renders nested (inline: {}, header: {})",
        field.id(),
        inline,
        header.is_some()
    );

    NestedRendering {
        key,
        class_name,
        inline,
        header,
    }
}
