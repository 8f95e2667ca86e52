//! Static HTML rendering of a [`FieldRendering`], used for previews.
//!
//! Produces the same element shape as the Leptos components in the ui crate.

use tera::{Context, Tera};
use thiserror::Error;

use super::plan::{
    FieldRendering, NestedRendering, RootRendering, DESCRIPTION_CLASS, TITLE_CLASS,
};

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Template error: {0}")]
    Template(#[from] tera::Error),
}

const NESTED_TEMPLATE: &str = r#"<div{% if class_name %} class="{{ class_name }}"{% endif %} id="{{ dom_id }}">
{%- if show_header %}<div>
{%- if title %}<h3 class="{{ title_class }}">{{ title }}</h3>{% endif %}
{%- if description %}<p class="{{ description_class }}">{{ description }}
{%- if help_url %}<br/><br/><a href="{{ help_url }}" target="_blank" rel="noopener noreferrer">{{ help_text }}</a>{% endif -%}
</p>{% endif -%}
</div>{% endif -%}
<div{% if content_class %} class="{{ content_class }}"{% endif %}>{{ children | safe }}</div></div>"#;

const ROOT_TEMPLATE: &str = r#"<div class="{{ class_name }}" id="{{ dom_id }}">
{%- if title %}<h2 class="RootFieldTitle">{{ title }}</h2>{% endif %}
{%- if description %}<p class="RootFieldDescription">{{ description }}</p>{% endif -%}
{{ children | safe }}</div>"#;

/// Renders field wrappers to HTML strings with autoescaped templates
pub struct HtmlRenderer {
    tera: Tera,
}

impl HtmlRenderer {
    pub fn new() -> Result<Self, RenderError> {
        let mut tera = Tera::default();
        tera.add_raw_templates(vec![
            ("nested.html", NESTED_TEMPLATE),
            ("root.html", ROOT_TEMPLATE),
        ])?;
        Ok(Self { tera })
    }

    /// Render a field around already-rendered `children` HTML
    pub fn render(&self, rendering: &FieldRendering, children: &str) -> Result<String, RenderError> {
        match rendering {
            FieldRendering::Root(root) => self.render_root(root, children),
            FieldRendering::Nested(nested) => self.render_nested(nested, children),
        }
    }

    fn render_root(&self, root: &RootRendering, children: &str) -> Result<String, RenderError> {
        let mut ctx = Context::new();
        ctx.insert("class_name", &root.class_name());
        ctx.insert("dom_id", &root.key.dom_id);
        ctx.insert("title", &root.title());
        ctx.insert("description", &root.description());
        ctx.insert("children", children);
        Ok(self.tera.render("root.html", &ctx)?)
    }

    fn render_nested(&self, nested: &NestedRendering, children: &str) -> Result<String, RenderError> {
        let header = nested.header.as_ref();
        let description = header.and_then(|h| h.description.as_ref());
        let help_link = description.and_then(|d| d.help_link.as_ref());

        let mut ctx = Context::new();
        ctx.insert("class_name", &nested.container_class());
        ctx.insert("dom_id", &nested.key.dom_id);
        ctx.insert("show_header", &header.is_some());
        ctx.insert("title", &header.and_then(|h| h.title.as_deref()));
        ctx.insert("description", &description.map(|d| d.text.as_str()));
        ctx.insert("help_url", &help_link.map(|l| l.url.as_str()));
        ctx.insert("help_text", &help_link.map(|l| l.text.as_str()));
        ctx.insert("title_class", TITLE_CLASS);
        ctx.insert("description_class", DESCRIPTION_CLASS);
        ctx.insert("content_class", &nested.content_class());
        ctx.insert("children", children);
        Ok(self.tera.render("nested.html", &ctx)?)
    }
}

/// One-shot helper around [`HtmlRenderer`]
pub fn render_html(rendering: &FieldRendering, children: &str) -> Result<String, RenderError> {
    HtmlRenderer::new()?.render(rendering, children)
}
