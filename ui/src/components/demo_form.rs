//! Sample dialog form showing every wrapper layout.

use leptos::prelude::*;
use schemaform::domain::{ChangeHandler, FieldDescriptor, FormContext};
use serde_json::{json, Map, Value};

use super::base_field::{BaseField, FormContextProvider};

pub const DEMO_ROOT_ID: &str = "root";
pub const DEMO_DIALOG_ID: &str = "main.dialog";

/// Editor schema carrying the overrides of the sample form
pub fn demo_editor_schema() -> Value {
    json!({
        "content": {
            "SDKOverrides": {
                "Prompt": {
                    "title": "Bot asks",
                    "description": "The question the bot sends to the user.",
                    "helpLink": "https://example.com/docs/prompts",
                    "helpLinkText": "Learn more about prompts"
                },
                "Condition": { "title": false },
                "Property": { "description": false }
            }
        }
    })
}

pub fn demo_context() -> FormContext {
    FormContext::new(DEMO_ROOT_ID)
        .with_editor_schema(&demo_editor_schema())
        .with_dialog_id(DEMO_DIALOG_ID)
}

pub fn demo_root() -> FieldDescriptor {
    FieldDescriptor::new(DEMO_ROOT_ID)
        .with_schema_title("Text input")
        .with_schema_description("Collection of fields edited together.")
}

/// One field per layout: overridden, suppressed title, suppressed
/// description, inline, hidden header, and a plain start-cased name
pub fn demo_fields() -> Vec<FieldDescriptor> {
    let prompt = FieldDescriptor::new("root.prompt")
        .with_name("prompt")
        .with_schema_title("Prompt")
        .with_schema_description("Prompt text");

    let condition = FieldDescriptor::new("root.condition")
        .with_name("condition")
        .with_schema_title("Condition")
        .with_schema_description("Expression evaluated before the prompt is sent.");

    let property = FieldDescriptor::new("root.property")
        .with_name("property")
        .with_schema_title("Property")
        .with_schema_description("Where the answer is stored");

    let mut max_turn_count = FieldDescriptor::new("root.maxTurnCount")
        .with_name("maxTurnCount")
        .with_schema_description("How many times to ask before giving up");
    max_turn_count.ui_schema.options.inline = true;

    let mut default_value = FieldDescriptor::new("root.defaultValue")
        .with_name("defaultValue")
        .with_schema_title("Default value");
    default_value.ui_schema.options.hide_description = true;

    let alternate_prompt = FieldDescriptor::new("root#alternatePrompt").with_name("alternatePrompt");

    vec![
        prompt,
        condition,
        property,
        max_turn_count,
        default_value,
        alternate_prompt,
    ]
}

#[component]
fn TextInput(field: FieldDescriptor) -> impl IntoView {
    let initial = field.form_data.as_str().unwrap_or_default().to_string();
    let on_change = field.on_change.clone();

    view! {
        <input
            type="text"
            class="FieldInput"
            value=initial
            on:input=move |ev| {
                if let Some(handler) = &on_change {
                    handler.call(Value::String(event_target_value(&ev)));
                }
            }
        />
    }
}

#[component]
pub fn DemoForm() -> impl IntoView {
    let values = RwSignal::new(Map::<String, Value>::new());

    let fields = demo_fields()
        .into_iter()
        .map(|field| {
            let name = field.name.clone().unwrap_or_else(|| field.id().to_string());
            field.with_on_change(ChangeHandler::new(move |value| {
                values.update(|v| {
                    v.insert(name.clone(), value);
                });
            }))
        })
        .collect::<Vec<_>>();

    view! {
        <FormContextProvider context=demo_context()>
            <BaseField field=demo_root()>
                {fields.into_iter().map(|field| view! {
                    <BaseField field=field.clone()>
                        <TextInput field=field/>
                    </BaseField>
                }).collect_view()}
            </BaseField>
        </FormContextProvider>
        <pre class="FormData">
            {move || serde_json::to_string_pretty(&values.get()).unwrap_or_default()}
        </pre>
    }
}
