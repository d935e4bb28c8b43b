//! Settings resolution for the preview tool.
//!
//! There is no configuration file: a one-shot CLI takes everything from
//! flags, with environment-backed defaults on the ambient options.

mod cli;

use std::{str::FromStr, time::Duration};

use clap::Parser;
use thiserror::Error;
use tracing::level_filters::LevelFilter;

pub use cli::CliArgs;

/// Grace delay granted to the default viewer before the staged file is
/// deleted, unless overridden on the command line.
pub const DEFAULT_VIEWER_GRACE: Duration = Duration::from_secs(2);

/// Fully resolved settings derived from the CLI arguments.
#[derive(Debug, Clone)]
pub struct Settings {
    pub logging: LoggingSettings,
    pub preview: PreviewSettings,
}

#[derive(Debug, Clone)]
pub struct LoggingSettings {
    pub level: LevelFilter,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Compact,
}

#[derive(Debug, Clone)]
pub struct PreviewSettings {
    pub viewer_grace: Duration,
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("invalid configuration for `{key}`: {reason}")]
    Invalid { key: &'static str, reason: String },
}

impl LoadError {
    fn invalid(key: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            key,
            reason: reason.into(),
        }
    }
}

/// Resolve settings from the supplied CLI arguments.
pub fn load(args: &CliArgs) -> Result<Settings, LoadError> {
    let logging = build_logging_settings(args)?;
    let preview = PreviewSettings {
        viewer_grace: args
            .viewer_grace_seconds
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_VIEWER_GRACE),
    };

    Ok(Settings { logging, preview })
}

/// Parse the command line and resolve settings, returning both for
/// downstream use.
pub fn load_with_cli() -> Result<(CliArgs, Settings), LoadError> {
    let args = CliArgs::parse();
    let settings = load(&args)?;
    Ok((args, settings))
}

fn build_logging_settings(args: &CliArgs) -> Result<LoggingSettings, LoadError> {
    let level = match args.log_level.as_deref() {
        Some(level) => LevelFilter::from_str(level).map_err(|err| {
            LoadError::invalid("log-level", format!("unrecognized level `{level}`: {err}"))
        })?,
        None => LevelFilter::INFO,
    };

    let format = if args.log_json.unwrap_or(false) {
        LogFormat::Json
    } else {
        LogFormat::Compact
    };

    Ok(LoggingSettings { level, format })
}
