use schemaform::domain::{FieldDescriptor, FormContext, OverrideMap};
use schemaform::render::html::render_html;
use schemaform::render::{render_field, FieldRendering, NestedRendering};
use serde_json::json;

fn editor_context() -> FormContext {
    FormContext::new("root").with_editor_schema(&json!({
        "content": {
            "SDKOverrides": {
                "Prompt": {
                    "title": "Bot asks",
                    "description": "The question the bot asks the user.",
                    "helpLink": "https://example.com/docs/prompt",
                    "helpLinkText": "Learn more"
                },
                "Condition": { "title": false },
                "Property": { "description": false }
            }
        }
    }))
}

fn nested(rendering: FieldRendering) -> NestedRendering {
    match rendering {
        FieldRendering::Nested(n) => n,
        FieldRendering::Root(_) => panic!("expected a nested rendering"),
    }
}

#[test]
fn test_root_field_always_delegates() {
    let mut field = FieldDescriptor::new("root")
        .with_name("dialog")
        .with_schema_title("Prompt");
    field.ui_schema.options.hide_description = true;
    field.ui_schema.options.inline = true;
    field.title = Some("Explicit".to_string());

    let ctx = editor_context().with_dialog_id("main");
    match render_field(&field, &ctx) {
        FieldRendering::Root(root) => {
            assert_eq!(root.key.key, "root-main");
            assert_eq!(root.field.schema.title.as_deref(), Some("Prompt"));
            assert_eq!(root.title().as_deref(), Some("Explicit"));
        }
        FieldRendering::Nested(_) => panic!("root field must be delegated"),
    }
}

#[test]
fn test_title_defaults_to_start_cased_name() {
    let field = FieldDescriptor::new("root_firstName").with_name("firstName");
    let n = nested(render_field(&field, &editor_context()));
    assert_eq!(n.header.unwrap().title.as_deref(), Some("First Name"));
}

#[test]
fn test_title_override_false_suppresses_title() {
    let field = FieldDescriptor::new("root_condition")
        .with_name("condition")
        .with_schema_title("Condition")
        .with_schema_description("Expression to evaluate");

    let rendering = render_field(&field, &editor_context());
    let html = render_html(&rendering, "").unwrap();
    assert!(!html.contains("<h3"));
    assert!(html.contains("Expression to evaluate"));

    let header = nested(rendering).header.unwrap();
    assert!(header.title.is_none());
}

#[test]
fn test_description_override_false_suppresses_description() {
    let field = FieldDescriptor::new("root_property")
        .with_schema_title("Property")
        .with_schema_description("Where to store the answer");

    let header = nested(render_field(&field, &editor_context())).header.unwrap();
    assert_eq!(header.title.as_deref(), Some("Property"));
    assert!(header.description.is_none());
}

#[test]
fn test_help_link_follows_description() {
    let field = FieldDescriptor::new("root_prompt")
        .with_name("prompt")
        .with_schema_title("Prompt")
        .with_schema_description("Schema text");

    let rendering = render_field(&field, &editor_context());
    let html = render_html(&rendering, "").unwrap();

    let text_at = html.find("The question the bot asks the user.").unwrap();
    let link_at = html.find("<a ").unwrap();
    assert!(text_at < link_at);
    assert!(html.contains("user.<br/><br/><a "));
    assert!(html.contains(r#"target="_blank""#));
    assert!(html.contains(r#"rel="noopener noreferrer""#));
    assert!(html.contains(">Learn more</a>"));
    assert!(html.contains("example.com"));

    let description = nested(rendering).header.unwrap().description.unwrap();
    assert_eq!(description.help_link.unwrap().url, "https://example.com/docs/prompt");
}

#[test]
fn test_hide_description_omits_title_and_description() {
    let mut field = FieldDescriptor::new("root_prompt")
        .with_name("prompt")
        .with_schema_title("Prompt")
        .with_schema_description("Schema text");
    field.ui_schema.options.hide_description = true;

    let rendering = render_field(&field, &editor_context());
    let html = render_html(&rendering, "<input/>").unwrap();
    assert!(!html.contains("<h3"));
    assert!(!html.contains("<p"));
    assert!(html.contains("<input/>"));
    assert!(nested(rendering).header.is_none());
}

#[test]
fn test_dialog_id_changes_key_and_dom_id() {
    let field = FieldDescriptor::new("root.actions#1.prompt");

    let plain = render_field(&field, &FormContext::new("root"));
    assert_eq!(plain.key().key, "root.actions#1.prompt");
    assert_eq!(plain.key().dom_id, "rootactions1prompt");

    let in_dialog = render_field(&field, &FormContext::new("root").with_dialog_id("Main.dialog"));
    assert_eq!(in_dialog.key().key, "root.actions#1.prompt-Main.dialog");
    assert_eq!(in_dialog.key().dom_id, "rootactions1prompt-Maindialog");

    let html = render_html(&in_dialog, "").unwrap();
    assert!(html.contains(r#"id="rootactions1prompt-Maindialog""#));
}

#[test]
fn test_schema_title_without_override_mapping() {
    let field = FieldDescriptor::new("root_prompt").with_schema_title("Prompt");
    let ctx = FormContext::new("root");
    assert!(ctx.overrides.is_none());

    let header = nested(render_field(&field, &ctx)).header.unwrap();
    assert_eq!(header.title.as_deref(), Some("Prompt"));
}

#[test]
fn test_rendering_is_repeatable() {
    let field = FieldDescriptor::new("root_prompt")
        .with_schema_title("Prompt")
        .with_schema_description("Schema text");
    let ctx = editor_context();

    let first = nested(render_field(&field, &ctx));
    let second = nested(render_field(&field, &ctx));
    assert_eq!(first, second);
}

#[test]
fn test_json_plan_shape() {
    let field = FieldDescriptor::new("root_prompt")
        .with_schema_title("Prompt")
        .with_class_name("wide");
    let plan = serde_json::to_value(render_field(&field, &editor_context())).unwrap();

    assert_eq!(plan["kind"], "nested");
    assert_eq!(plan["key"], "root_prompt");
    assert_eq!(plan["dom_id"], "root_prompt");
    assert_eq!(plan["class_name"], "BaseField wide");
    assert_eq!(plan["header"]["title"], "Bot asks");
}

#[test]
fn test_overrides_collected_from_iterator() {
    let overrides: OverrideMap = [("Prompt".to_string(), Default::default())].into_iter().collect();
    assert_eq!(overrides.len(), 1);
}
