use std::{error::Error as StdError, fs, path::PathBuf};

use tera::{Context, Tera};

use super::types::{PageMetadata, RenderError};

/// Built-in page skeleton used when no alternate template is supplied.
/// `file_name` arrives pre-escaped; the trusted body is marked `safe` so
/// templates read the same whether or not an engine autoescapes.
pub const DEFAULT_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
    <meta http-equiv="content-type" content="text/html; charset=utf-8">
    <title>Scorcio Markdown Preview</title>
</head>
<body>
Previewing: {{ file_name }}
{{ body | safe }}
</body>
</html>
"#;

const TEMPLATE_NAME: &str = "preview.html";

/// Where the page template comes from, resolved once per render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TemplateSource {
    #[default]
    BuiltIn,
    File(PathBuf),
}

/// Thin wrapper over a single-template Tera instance. Tera's own HTML
/// autoescape is off: it also rewrites `/` to `&#x2F;`, which would mangle
/// the file-name label for any real path. Instead `title` and `file_name`
/// are escaped by [`escape_html`] when the context is built, and the
/// pre-sanitized body is inserted untouched (`safe` stays a no-op).
#[derive(Debug)]
pub struct TemplateEngine {
    tera: Tera,
}

impl TemplateEngine {
    /// Load and parse the template. Any parse failure aborts the render
    /// before a document is produced.
    pub fn load(source: &TemplateSource) -> Result<Self, RenderError> {
        let text = match source {
            TemplateSource::BuiltIn => DEFAULT_TEMPLATE.to_string(),
            TemplateSource::File(path) => {
                fs::read_to_string(path).map_err(|err| RenderError::Template {
                    message: format!("failed to read `{}`: {err}", path.display()),
                })?
            }
        };

        let mut tera = Tera::default();
        tera.autoescape_on(vec![]);
        tera.add_raw_template(TEMPLATE_NAME, &text)
            .map_err(|err| RenderError::Template {
                message: template_error_message(&err),
            })?;

        Ok(Self { tera })
    }

    /// Execute the template against the document metadata.
    pub fn render(&self, metadata: &PageMetadata<'_>) -> Result<String, RenderError> {
        let mut context = Context::new();
        context.insert("title", &escape_html(metadata.title));
        context.insert("file_name", &escape_html(metadata.file_name));
        context.insert("body", metadata.body.as_str());

        self.tera
            .render(TEMPLATE_NAME, &context)
            .map_err(|err| RenderError::TemplateExecution {
                message: template_error_message(&err),
            })
    }
}

/// Escape the HTML-significant characters and nothing else, so path
/// separators and other plain text stay literal in the output.
fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Tera nests the useful detail in the error source chain; flatten it so
/// the user sees more than "failed to render".
fn template_error_message(err: &tera::Error) -> String {
    let mut message = err.to_string();
    let mut current = StdError::source(err);
    while let Some(inner) = current {
        message.push_str(": ");
        message.push_str(&inner.to_string());
        current = inner.source();
    }
    message
}
