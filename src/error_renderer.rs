//! Error rendering using ariadne
//!
//! This module renders SimpleInt errors with the source line, a label under
//! the offending span, the error code and any help text.

use crate::{Diagnostic, Error};
use ariadne::{ColorGenerator, Config, IndexType, Label, Report, ReportKind, Source};
use std::io::Write;

const SOURCE_ID: &str = "<input>";

/// Render an error with formatting to stderr
///
/// # Example
/// ```no_run
/// use simpleint::{EvaluatorOptions, render_error, run};
///
/// if let Err(e) = run("1 + (2 > 1)", &EvaluatorOptions::default()) {
///     render_error(&e);
/// }
/// ```
pub fn render_error(error: &Error) {
    render_error_to_writer(error, &mut std::io::stderr(), true).ok();
}

/// Render an error to a specific writer
///
/// This is useful when you want to control where the error is written,
/// such as to a file, a buffer, or a custom output stream.
pub fn render_error_to(error: &Error, writer: &mut dyn Write) -> std::io::Result<()> {
    render_error_to_writer(error, writer, true)
}

/// Render an error to a String
pub fn render_error_to_string(error: &Error) -> String {
    let mut buf = Vec::new();
    render_error_to_writer(error, &mut buf, true).ok();
    String::from_utf8_lossy(&buf).to_string()
}

/// Render an error to a String without color codes (useful for tests)
pub fn render_error_to_string_no_color(error: &Error) -> String {
    let mut buf = Vec::new();
    render_error_to_writer(error, &mut buf, false).ok();
    String::from_utf8_lossy(&buf).to_string()
}

fn render_error_to_writer(
    error: &Error,
    writer: &mut dyn Write,
    use_color: bool,
) -> std::io::Result<()> {
    match error {
        Error::Syntax { diagnostic, source } | Error::Runtime { diagnostic, source } => {
            render_diagnostic(source, diagnostic, writer, use_color)
        }
        Error::ResourceExceeded(msg) => {
            writeln!(writer, "Resource limit exceeded: {}", msg)
        }
    }
}

fn render_diagnostic(
    source: &str,
    diag: &Diagnostic,
    writer: &mut dyn Write,
    use_color: bool,
) -> std::io::Result<()> {
    let mut colors = ColorGenerator::new();
    colors.next(); // Skip the first color.

    // Zero-width spans (EOF) still need a character to point at.
    let span = if !diag.span.0.is_empty() {
        diag.span.0.clone()
    } else if diag.span.start() < source.len() {
        diag.span.start()..diag.span.start() + 1
    } else {
        let end = source.len();
        end.saturating_sub(1)..end
    };

    let mut report = Report::build(ReportKind::Error, (SOURCE_ID, span.clone()))
        .with_message(&diag.message)
        .with_config(
            Config::default()
                .with_color(use_color)
                .with_index_type(IndexType::Byte),
        );

    if let Some(code) = &diag.code {
        report = report.with_code(code);
    }

    report = report.with_label(
        Label::new((SOURCE_ID, span))
            .with_message(&diag.message)
            .with_color(colors.next()),
    );

    if let Some(help) = &diag.help {
        report = report.with_help(help);
    }

    report
        .finish()
        .write((SOURCE_ID, Source::from(source)), &mut *writer)
}
