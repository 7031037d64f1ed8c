//! Template rendering for the documentation site
//!
//! Copyright (c) 2025 API Star Team
//! Licensed under the Apache-2.0 license

use crate::document::Document;
use crate::DocsError;
use std::collections::HashMap;
use tera::Tera;

/// Languages code samples are generated for, in presentation order.
pub const SUPPORTED_LANGS: &[&str] = &["javascript", "python"];

/// Namespaced name of the top-level documentation template.
pub const INDEX_TEMPLATE_NAME: &str = "apistar/docs/index.html";

const INDEX_TEMPLATE: &str = include_str!("../templates/index.html");

/// Everything one render needs. Constructed fresh per invocation and
/// never persisted.
pub struct RenderContext<'a> {
    pub document: &'a Document,
    pub langs: &'static [&'static str],
    /// Syntax-highlight stylesheet token. Currently always disabled.
    pub code_style: Option<String>,
    /// Rewrites bundled asset paths into served URLs.
    pub static_url: fn(&str) -> String,
}

impl<'a> RenderContext<'a> {
    pub fn new(document: &'a Document) -> Self {
        Self {
            document,
            langs: SUPPORTED_LANGS,
            code_style: None,
            static_url: identity_url,
        }
    }
}

/// The default asset rewriter: bundled assets are served from the path
/// they are copied to.
pub fn identity_url(path: &str) -> String {
    path.to_string()
}

/// Render the top-level documentation page.
pub fn render_index(context: &RenderContext<'_>) -> Result<String, DocsError> {
    let mut engine = Tera::default();
    engine.add_raw_template(INDEX_TEMPLATE_NAME, INDEX_TEMPLATE)?;

    let rewrite = context.static_url;
    engine.register_function(
        "static_url",
        move |args: &HashMap<String, tera::Value>| -> tera::Result<tera::Value> {
            let path = args
                .get("path")
                .and_then(tera::Value::as_str)
                .ok_or_else(|| tera::Error::msg("static_url requires a 'path' argument"))?;
            Ok(tera::Value::String(rewrite(path)))
        },
    );

    let mut ctx = tera::Context::new();
    ctx.insert("document", context.document);
    ctx.insert("langs", context.langs);
    ctx.insert("code_style", &context.code_style);

    engine
        .render(INDEX_TEMPLATE_NAME, &ctx)
        .map_err(DocsError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{Operation, Section};

    fn sample_document() -> Document {
        Document {
            title: "Pet Store".to_string(),
            version: "1.0.0".to_string(),
            description: Some("A sample API.".to_string()),
            base_url: Some("https://petstore.example.com/v1".to_string()),
            sections: vec![Section {
                name: "pets".to_string(),
                operations: vec![Operation {
                    method: "GET".to_string(),
                    url: "/pets".to_string(),
                    id: Some("listPets".to_string()),
                    summary: Some("List all pets".to_string()),
                    description: None,
                    parameters: Vec::new(),
                }],
            }],
        }
    }

    #[test]
    fn test_rendered_page_contains_document_content() {
        let document = sample_document();
        let html = render_index(&RenderContext::new(&document)).unwrap();
        assert!(html.contains("Pet Store"));
        assert!(html.contains("listPets"));
        assert!(html.contains("GET"));
        assert!(html.contains("/pets"));
    }

    #[test]
    fn test_language_tabs_preserve_order() {
        let document = sample_document();
        let html = render_index(&RenderContext::new(&document)).unwrap();
        let javascript = html.find("data-lang=\"javascript\"").unwrap();
        let python = html.find("data-lang=\"python\"").unwrap();
        assert!(javascript < python);
    }

    #[test]
    fn test_asset_urls_pass_through_identity_rewriter() {
        let document = sample_document();
        let html = render_index(&RenderContext::new(&document)).unwrap();
        assert!(html.contains("apistar/css/base.css"));
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let document = sample_document();
        let first = render_index(&RenderContext::new(&document)).unwrap();
        let second = render_index(&RenderContext::new(&document)).unwrap();
        assert_eq!(first, second);
    }
}
