//! Staging of the rendered document as a uniquely named temporary file.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use tempfile::{Builder, TempPath};
use thiserror::Error;

const STAGING_PREFIX: &str = "scorcio-";
const STAGING_SUFFIX: &str = ".html";

#[derive(Debug, Error)]
pub enum StagingError {
    #[error("failed to create staging file: {0}")]
    Create(#[source] io::Error),
    #[error("failed to write staged document: {0}")]
    Write(#[source] io::Error),
    #[error("failed to release staged file: {0}")]
    Keep(#[source] tempfile::PathPersistError),
}

/// A staged document on disk. The file is deleted when the artifact is
/// dropped; [`StagedArtifact::keep`] relinquishes ownership instead.
#[derive(Debug)]
pub struct StagedArtifact {
    path: TempPath,
}

impl StagedArtifact {
    /// Absolute path of the staged file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Give up scoped deletion and hand the file's lifetime to the caller.
    pub fn keep(self) -> Result<PathBuf, StagingError> {
        self.path.keep().map_err(StagingError::Keep)
    }
}

/// Create a uniquely named `.html` file in the OS temp directory and write
/// `document` into it. The create handle is closed before the write, so no
/// lock is held on the returned path; uniqueness of the generated name
/// keeps concurrent invocations from colliding.
pub fn stage(document: &[u8]) -> Result<StagedArtifact, StagingError> {
    let file = Builder::new()
        .prefix(STAGING_PREFIX)
        .suffix(STAGING_SUFFIX)
        .tempfile()
        .map_err(StagingError::Create)?;
    let path = file.into_temp_path();

    fs::write(&path, document).map_err(StagingError::Write)?;

    Ok(StagedArtifact { path })
}
