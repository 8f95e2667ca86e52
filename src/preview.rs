//! Render a field descriptor file the way the form would.

use std::path::Path;

use crate::config::{loader, OutputFormat, Settings};
use crate::render::html::HtmlRenderer;
use crate::render::render_field;

/// Load the field and the overrides, then render in the configured format.
pub fn render_preview(field_path: &Path, settings: &Settings, children: &str) -> anyhow::Result<String> {
    let ctx = settings.form_context()?;
    let field = loader::load_field(field_path)?;
    let rendering = render_field(&field, &ctx);

    let output = match settings.output {
        OutputFormat::Html => HtmlRenderer::new()?.render(&rendering, children)?,
        OutputFormat::Json => serde_json::to_string_pretty(&rendering)?,
    };
    Ok(output)
}
