use std::{io, path::PathBuf};

use thiserror::Error;

use crate::{
    application::render::RenderError,
    infra::{error::InfraError, launcher::PreviewError, staging::StagingError},
};

/// Top-level error for a preview invocation. Every pipeline stage fails
/// fast; whichever stage fails first becomes the final error.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration error: {message}")]
    Configuration { message: String },
    #[error(transparent)]
    Infra(#[from] InfraError),
    #[error("failed to read input `{path}`: {source}")]
    InputRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error(transparent)]
    Staging(#[from] StagingError),
    #[error(transparent)]
    Preview(#[from] PreviewError),
    #[error("failed to report staged path: {0}")]
    Report(#[source] io::Error),
}

impl AppError {
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}
