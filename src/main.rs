use std::{io::Write, process};

use scorcio::{
    application::{
        error::AppError,
        preview::{self, PreviewOptions},
    },
    config,
    infra::telemetry,
};
use tracing::{Dispatch, Level, dispatcher, error};
use tracing_subscriber::fmt as tracing_fmt;

fn main() {
    if let Err(error) = run() {
        report_application_error(&error);
        process::exit(1);
    }
}

fn report_application_error(error: &AppError) {
    if dispatcher::has_been_set() {
        error!(error = %error, "application error");
        return;
    }

    let subscriber = tracing_fmt()
        .with_max_level(Level::ERROR)
        .with_writer(std::io::stderr)
        .finish();
    let dispatch = Dispatch::new(subscriber);
    dispatcher::with_default(&dispatch, || {
        error!(error = %error, "application error");
    });
}

fn run() -> Result<(), AppError> {
    let (args, settings) = config::load_with_cli()
        .map_err(|err| AppError::configuration(format!("failed to load configuration: {err}")))?;

    telemetry::init(&settings.logging).map_err(AppError::from)?;

    let options = PreviewOptions {
        input: args.file,
        template: args.template,
        skip_preview: args.skip_preview,
        viewer_grace: settings.preview.viewer_grace,
    };

    // Stdout carries exactly one line on success, the staged path; all
    // diagnostics go to stderr through the tracing subscriber.
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let result = preview::generate_preview(&options, &mut out);
    out.flush().map_err(AppError::Report)?;
    result
}
