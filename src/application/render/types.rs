use std::path::PathBuf;

use thiserror::Error;

use super::template::TemplateSource;

/// Product name substituted into the template's title slot.
pub const PRODUCT_NAME: &str = "Scorcio Markdown Preview";

/// Rendering request passed into the pipeline.
#[derive(Debug, Clone)]
pub struct RenderRequest {
    /// Source markdown bytes, interpreted as UTF-8.
    pub markdown: String,
    /// Label shown to the reader, usually the source path as given.
    pub display_name: String,
    /// Template resolved once per render, before any output is produced.
    pub template: TemplateSource,
}

impl RenderRequest {
    pub fn new(markdown: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            markdown: markdown.into(),
            display_name: display_name.into(),
            template: TemplateSource::BuiltIn,
        }
    }

    pub fn with_template_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.template = TemplateSource::File(path.into());
        self
    }
}

/// HTML that has passed sanitisation and may be embedded in a template
/// without re-escaping. Only the sanitize stage can construct one, so the
/// body slot of a page can never hold unsanitised content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrustedHtml(String);

impl TrustedHtml {
    pub(super) fn from_sanitized(html: String) -> Self {
        Self(html)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Metadata merged into the page template. `body` is never re-escaped;
/// `title` and `file_name` are escaped by the template engine.
#[derive(Debug)]
pub struct PageMetadata<'a> {
    pub title: &'a str,
    pub file_name: &'a str,
    pub body: &'a TrustedHtml,
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("markdown rendering failed: {message}")]
    Markdown { message: String },
    #[error("template could not be loaded: {message}")]
    Template { message: String },
    #[error("template execution failed: {message}")]
    TemplateExecution { message: String },
}
