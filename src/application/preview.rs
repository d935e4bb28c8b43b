//! The preview use-case: read a markdown file, render it into a sanitized
//! HTML document, stage the document in the temp directory, and hand it to
//! the platform viewer for the duration of a scoped lifetime.

use std::{io::Write, path::PathBuf, time::Duration};

use tracing::{debug, info};

use crate::{
    application::{
        error::AppError,
        render::{RenderRequest, render_service},
    },
    infra::{launcher::PreviewLauncher, staging},
};

/// Inputs for a single preview invocation.
#[derive(Debug, Clone)]
pub struct PreviewOptions {
    /// Markdown file to render.
    pub input: PathBuf,
    /// Optional alternate template file.
    pub template: Option<PathBuf>,
    /// Stage only: keep the file and never launch a viewer.
    pub skip_preview: bool,
    /// Grace delay granted to the viewer before the staged file is deleted.
    pub viewer_grace: Duration,
}

/// Run the whole pipeline. The staged file's absolute path is written to
/// `out` as the sole line of output before any preview attempt, so the
/// artifact is discoverable even when the preview is skipped or fails.
pub fn generate_preview(options: &PreviewOptions, out: &mut dyn Write) -> Result<(), AppError> {
    let markdown = std::fs::read_to_string(&options.input).map_err(|source| {
        AppError::InputRead {
            path: options.input.clone(),
            source,
        }
    })?;
    debug!(path = %options.input.display(), bytes = markdown.len(), "read input file");

    let mut request = RenderRequest::new(markdown, options.input.display().to_string());
    if let Some(template) = &options.template {
        request = request.with_template_file(template);
    }
    let document = render_service().render(&request)?;

    let staged = staging::stage(document.as_bytes())?;
    info!(path = %staged.path().display(), "staged preview document");
    writeln!(out, "{}", staged.path().display()).map_err(AppError::Report)?;

    if options.skip_preview {
        // Lifetime of the artifact passes to the caller.
        staged.keep()?;
        return Ok(());
    }

    let launcher = PreviewLauncher::new(options.viewer_grace);
    let outcome = launcher.preview(staged.path());
    // `staged` drops here on every path, deleting the file once the launch
    // attempt and its grace delay have completed.
    outcome.map_err(AppError::from)
}
