use criterion::{black_box, criterion_group, criterion_main, Criterion};
use schemaform::domain::{FieldDescriptor, FormContext};
use schemaform::render::html::HtmlRenderer;
use schemaform::render::{render_field, start_case};
use serde_json::json;

fn context() -> FormContext {
    let overrides: serde_json::Map<String, serde_json::Value> = (0..200)
        .map(|i| {
            (
                format!("Field {}", i),
                json!({ "title": format!("Override {}", i), "helpLink": "https://example.com", "helpLinkText": "Docs" }),
            )
        })
        .collect();

    FormContext::new("root")
        .with_dialog_id("main.dialog")
        .with_editor_schema(&json!({ "content": { "SDKOverrides": overrides } }))
}

fn benchmark_render_nested(c: &mut Criterion) {
    let ctx = context();
    let field = FieldDescriptor::new("root.actions#3.prompt")
        .with_name("promptText")
        .with_schema_title("Field 42")
        .with_schema_description("Text sent to the user");

    c.bench_function("render_nested", |b| {
        b.iter(|| render_field(black_box(&field), black_box(&ctx)))
    });
}

fn benchmark_render_html(c: &mut Criterion) {
    let ctx = context();
    let renderer = HtmlRenderer::new().unwrap();
    let field = FieldDescriptor::new("root.actions#3.prompt")
        .with_schema_title("Field 42")
        .with_schema_description("Text sent to the user");
    let rendering = render_field(&field, &ctx);

    c.bench_function("render_html", |b| {
        b.iter(|| renderer.render(black_box(&rendering), "<input/>").unwrap())
    });
}

fn benchmark_start_case(c: &mut Criterion) {
    c.bench_function("start_case", |b| {
        b.iter(|| start_case(black_box("maxTurnCountHTTPRetry_limit2")))
    });
}

criterion_group!(
    benches,
    benchmark_render_nested,
    benchmark_render_html,
    benchmark_start_case
);
criterion_main!(benches);
