//! Scorcio renders a markdown file into a sanitized, self-contained HTML
//! page, stages it in the OS temporary directory, and opens it in the
//! platform's default viewer.
//!
//! The crate is split into three layers: [`application`] holds the render
//! pipeline and the preview use-case, [`config`] the CLI surface and
//! settings, and [`infra`] the OS-facing adapters (staging, viewer launch,
//! telemetry).

pub mod application;
pub mod config;
pub mod infra;
