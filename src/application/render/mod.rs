//! Markdown-to-document rendering pipeline: comrak converts markdown into
//! raw HTML, ammonia strips everything unsafe, and the result is merged
//! into a page template together with the document metadata.

mod config;
mod service;
mod template;
mod types;

pub use service::{ComrakRenderService, render_service};
pub use template::{DEFAULT_TEMPLATE, TemplateEngine, TemplateSource};
pub use types::{PRODUCT_NAME, PageMetadata, RenderError, RenderRequest, TrustedHtml};
