use std::path::PathBuf;

use clap::{Parser, ValueHint, builder::BoolishValueParser};

/// Command-line arguments for the Scorcio binary.
#[derive(Debug, Parser)]
#[command(
    name = "scorcio",
    version,
    about = "Render a markdown file to sanitized HTML and open it in the default viewer"
)]
pub struct CliArgs {
    /// Markdown file to preview.
    #[arg(long = "file", value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub file: PathBuf,

    /// Alternate template file; it may reference the `title`, `file_name`
    /// and `body` substitution points.
    #[arg(
        short = 't',
        long = "template",
        value_name = "PATH",
        value_hint = ValueHint::FilePath
    )]
    pub template: Option<PathBuf>,

    /// Stage the HTML without launching a viewer; the staged file is kept.
    #[arg(short = 's', long = "skip-preview", action = clap::ArgAction::SetTrue)]
    pub skip_preview: bool,

    /// Override the base log level (trace|debug|info|warn|error).
    #[arg(long = "log-level", env = "SCORCIO_LOG_LEVEL", value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Toggle JSON logging.
    #[arg(
        long = "log-json",
        env = "SCORCIO_LOG_JSON",
        value_name = "BOOL",
        value_parser = BoolishValueParser::new()
    )]
    pub log_json: Option<bool>,

    /// Override the grace delay, in seconds, granted to the viewer before
    /// the staged file is deleted.
    #[arg(
        long = "viewer-grace-seconds",
        env = "SCORCIO_VIEWER_GRACE_SECONDS",
        value_name = "SECONDS"
    )]
    pub viewer_grace_seconds: Option<u64>,
}
