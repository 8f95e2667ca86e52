//! Field wrapper used by every field of a schema-driven form.

use leptos::prelude::*;
use schemaform::domain::{FieldDescriptor, FormContext};
use schemaform::render::{
    render_field, Description, FieldHeader, FieldRendering, NestedRendering, DESCRIPTION_CLASS,
    TITLE_CLASS,
};

use super::root_field::RootField;

/// Makes `context` available to every `BaseField` below it
#[component]
pub fn FormContextProvider(context: FormContext, children: Children) -> impl IntoView {
    provide_context(context);
    children()
}

/// Wraps a field's widgets with its title and description.
///
/// The form's root field is rendered by [`RootField`] instead. The context
/// comes from the `context` prop, else from the nearest
/// [`FormContextProvider`], else it is empty.
#[component]
pub fn BaseField(
    field: FieldDescriptor,
    #[prop(optional)] context: Option<FormContext>,
    children: Children,
) -> impl IntoView {
    let ctx = context
        .or_else(use_context::<FormContext>)
        .unwrap_or_default();

    match render_field(&field, &ctx) {
        FieldRendering::Root(rendering) => {
            log::debug!("Rendering {} as root field", rendering.key.key);
            view! { <RootField rendering=rendering>{children()}</RootField> }.into_any()
        }
        FieldRendering::Nested(rendering) => {
            view! { <NestedField rendering=rendering>{children()}</NestedField> }.into_any()
        }
    }
}

#[component]
fn NestedField(rendering: NestedRendering, children: Children) -> impl IntoView {
    let class_name = rendering.container_class().map(String::from);
    let content_class = rendering.content_class();
    let NestedRendering { key, header, .. } = rendering;

    view! {
        <div class=class_name id=key.dom_id>
            {header.map(|header| view! { <FieldHeaderBlock header=header/> })}
            <div class=content_class>{children()}</div>
        </div>
    }
}

#[component]
fn FieldHeaderBlock(header: FieldHeader) -> impl IntoView {
    view! {
        <div>
            {header.title.map(|title| view! { <h3 class=TITLE_CLASS>{title}</h3> })}
            {header.description.map(|description| view! { <FieldDescription description=description/> })}
        </div>
    }
}

#[component]
fn FieldDescription(description: Description) -> impl IntoView {
    view! {
        <p class=DESCRIPTION_CLASS>
            {description.text}
            {description.help_link.map(|link| view! {
                <br/>
                <br/>
                <a href=link.url target="_blank" rel="noopener noreferrer">{link.text}</a>
            })}
        </p>
    }
}
