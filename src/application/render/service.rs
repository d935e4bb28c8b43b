use std::sync::Arc;

use comrak::{Arena, format_html, nodes::AstNode, parse_document};
use once_cell::sync::Lazy;
use tracing::debug;

use super::config::{build_sanitizer, default_options};
use super::template::TemplateEngine;
use super::types::{PRODUCT_NAME, PageMetadata, RenderError, RenderRequest, TrustedHtml};

/// Comrak-based rendering pipeline with Ammonia sanitisation and template
/// substitution. Pure and deterministic: given the same request it returns
/// identical output or the same error.
pub struct ComrakRenderService {
    options: comrak::Options<'static>,
    sanitizer: ammonia::Builder<'static>,
}

static RENDER_SERVICE: Lazy<Arc<ComrakRenderService>> =
    Lazy::new(|| Arc::new(ComrakRenderService::new()));

/// Access the shared render service instance, initialised on first use.
pub fn render_service() -> Arc<ComrakRenderService> {
    Arc::clone(&RENDER_SERVICE)
}

impl ComrakRenderService {
    fn new() -> Self {
        Self {
            options: default_options(),
            sanitizer: build_sanitizer(),
        }
    }

    /// Produce the final HTML document for `request`. The output is either
    /// a complete document or an error, never a truncated one: every stage
    /// works on in-memory buffers and aborts the pipeline on failure.
    pub fn render(&self, request: &RenderRequest) -> Result<String, RenderError> {
        let arena = Arena::new();
        let root = parse_document(&arena, &request.markdown, &self.options);
        let raw_html = render_html_stage(root, &self.options)?;

        let body = sanitize_stage(&raw_html, &self.sanitizer);
        debug!(
            raw_bytes = raw_html.len(),
            sanitized_bytes = body.as_str().len(),
            "sanitized rendered markdown"
        );

        let engine = TemplateEngine::load(&request.template)?;
        let metadata = PageMetadata {
            title: PRODUCT_NAME,
            file_name: &request.display_name,
            body: &body,
        };

        engine.render(&metadata)
    }
}

impl Default for ComrakRenderService {
    fn default() -> Self {
        Self::new()
    }
}

fn render_html_stage<'a>(
    root: &'a AstNode<'a>,
    options: &comrak::Options<'static>,
) -> Result<String, RenderError> {
    let mut html = String::new();
    format_html(root, options, &mut html).map_err(|err| RenderError::Markdown {
        message: err.to_string(),
    })?;
    Ok(html)
}

fn sanitize_stage(html: &str, sanitizer: &ammonia::Builder<'static>) -> TrustedHtml {
    TrustedHtml::from_sanitized(sanitizer.clean(html).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(markdown: &str) -> String {
        let request = RenderRequest::new(markdown, "test.md");
        render_service().render(&request).expect("render succeeds")
    }

    #[test]
    fn heading_renders_as_html() {
        let html = render("# Hello");
        assert!(html.contains("<h1>Hello</h1>"));
    }

    #[test]
    fn script_tags_are_stripped() {
        let html = render("safe\n\n<script>alert(1)</script>\n");
        assert!(!html.contains("<script"));
        assert!(!html.contains("alert(1)"));
    }

    #[test]
    fn event_handler_attributes_are_stripped() {
        let html = render("<img src=\"x.png\" onerror=\"alert(1)\">");
        assert!(html.contains("<img"));
        assert!(!html.contains("onerror"));
    }

    #[test]
    fn render_is_deterministic() {
        let markdown = "# Title\n\nSome *text* with a [link](https://example.com).\n";
        assert_eq!(render(markdown), render(markdown));
    }

    #[test]
    fn gfm_table_survives_sanitisation() {
        let html = render("| a | b |\n|---|---|\n| 1 | 2 |\n");
        assert!(html.contains("<table>"));
        assert!(html.contains("<td>1</td>"));
    }
}
