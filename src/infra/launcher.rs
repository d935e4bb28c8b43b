//! Launching the platform's default viewer against a staged file.

use std::{env, path::Path, process::Command, thread, time::Duration};

use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum PreviewError {
    #[error("platform `{os}` has no default viewer integration")]
    UnsupportedPlatform { os: String },
    #[error("viewer command `{command}` was not found on the search path: {source}")]
    ExecutableNotFound {
        command: &'static str,
        #[source]
        source: which::Error,
    },
    #[error("viewer launch failed: {message}")]
    Launch { message: String },
}

/// Platforms with a known default-viewer command. Dispatch is a closed
/// table resolved once per preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    Linux,
    MacOs,
}

/// Command shape for a platform's viewer: the fixed arguments precede the
/// staged file's path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewerCommand {
    pub program: &'static str,
    pub leading_args: &'static [&'static str],
}

impl Platform {
    /// Detect the platform this process runs on.
    pub fn current() -> Result<Self, PreviewError> {
        Self::from_os_name(env::consts::OS)
    }

    /// Map an OS identifier (as in `std::env::consts::OS`) to a platform.
    pub fn from_os_name(os: &str) -> Result<Self, PreviewError> {
        match os {
            "windows" => Ok(Self::Windows),
            "linux" => Ok(Self::Linux),
            "macos" => Ok(Self::MacOs),
            other => Err(PreviewError::UnsupportedPlatform {
                os: other.to_string(),
            }),
        }
    }

    pub fn viewer(self) -> ViewerCommand {
        match self {
            Self::Windows => ViewerCommand {
                program: "cmd.exe",
                leading_args: &["/C", "start"],
            },
            Self::Linux => ViewerCommand {
                program: "xdg-open",
                leading_args: &[],
            },
            Self::MacOs => ViewerCommand {
                program: "open",
                leading_args: &[],
            },
        }
    }
}

/// Opens a staged file in the default viewer and holds for a fixed grace
/// delay so the viewer can read the file before the caller deletes it.
#[derive(Debug, Clone)]
pub struct PreviewLauncher {
    grace_delay: Duration,
}

impl PreviewLauncher {
    pub fn new(grace_delay: Duration) -> Self {
        Self { grace_delay }
    }

    /// Select, resolve and launch the platform viewer for `path`, then wait
    /// for the grace delay. The delay elapses on failure too, keeping the
    /// timing of scoped cleanup identical on every path.
    pub fn preview(&self, path: &Path) -> Result<(), PreviewError> {
        let outcome = launch(path);
        if let Err(err) = &outcome {
            warn!(error = %err, "viewer launch failed");
        }
        thread::sleep(self.grace_delay);
        outcome
    }
}

fn launch(path: &Path) -> Result<(), PreviewError> {
    let platform = Platform::current()?;
    let viewer = platform.viewer();

    let resolved = which::which(viewer.program).map_err(|source| {
        PreviewError::ExecutableNotFound {
            command: viewer.program,
            source,
        }
    })?;
    debug!(program = %resolved.display(), "resolved viewer command");

    // Viewer launchers typically hand off to an already-running process and
    // exit immediately; a clean exit only means the handoff worked.
    let status = Command::new(resolved)
        .args(viewer.leading_args)
        .arg(path)
        .status()
        .map_err(|err| PreviewError::Launch {
            message: err.to_string(),
        })?;

    if !status.success() {
        return Err(PreviewError::Launch {
            message: format!("viewer exited with {status}"),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_platforms_resolve() {
        assert_eq!(Platform::from_os_name("windows").unwrap(), Platform::Windows);
        assert_eq!(Platform::from_os_name("linux").unwrap(), Platform::Linux);
        assert_eq!(Platform::from_os_name("macos").unwrap(), Platform::MacOs);
    }

    #[test]
    fn unknown_platform_is_rejected_without_spawning() {
        let err = Platform::from_os_name("plan9").expect_err("must be rejected");
        assert!(matches!(
            err,
            PreviewError::UnsupportedPlatform { ref os } if os == "plan9"
        ));
    }

    #[test]
    fn viewer_table_matches_the_platform() {
        let windows = Platform::Windows.viewer();
        assert_eq!(windows.program, "cmd.exe");
        assert_eq!(windows.leading_args, ["/C", "start"]);

        assert_eq!(Platform::Linux.viewer().program, "xdg-open");
        assert!(Platform::Linux.viewer().leading_args.is_empty());

        assert_eq!(Platform::MacOs.viewer().program, "open");
        assert!(Platform::MacOs.viewer().leading_args.is_empty());
    }

    #[test]
    fn missing_executable_is_reported() {
        let err = which::which("scorcio-no-such-viewer-command")
            .map_err(|source| PreviewError::ExecutableNotFound {
                command: "scorcio-no-such-viewer-command",
                source,
            })
            .expect_err("lookup must fail");
        assert!(matches!(err, PreviewError::ExecutableNotFound { .. }));
    }

    #[test]
    fn grace_delay_elapses_before_preview_returns() {
        let launcher = PreviewLauncher::new(Duration::from_millis(50));
        let started = std::time::Instant::now();
        // Launch outcome is irrelevant here; only the timing contract is.
        let _ = launcher.preview(Path::new("/nonexistent/preview.html"));
        assert!(started.elapsed() >= Duration::from_millis(50));
    }
}
