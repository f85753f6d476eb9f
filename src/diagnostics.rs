//! Diagnostic rendering for the CLI.
//!
//! Renders parse and eval errors as [ariadne](https://docs.rs/ariadne)
//! reports with source highlighting, falling back to plain stderr lines
//! when a report cannot be written.

use std::ops::Range;

use ariadne::{Color, Config, IndexType, Label, Report, ReportKind, Source};
use dang::evaluator::EvalError;
use dang::parser::ParseFailure;
use dang::token::Span;

fn print_range_report(
    filename: &str,
    source: &str,
    span_range: Range<usize>,
    message: &str,
) -> std::io::Result<()> {
    Report::build(ReportKind::Error, (filename, span_range.clone()))
        .with_config(Config::default().with_index_type(IndexType::Byte))
        .with_message(message)
        .with_label(
            Label::new((filename, span_range))
                .with_message(message)
                .with_color(Color::Red),
        )
        .finish()
        .eprint((filename, Source::from(source)))
}

fn end_of_source_range(source: &str) -> Range<usize> {
    if source.is_empty() {
        0..0
    } else {
        let end = source.len().saturating_sub(1);
        end..source.len()
    }
}

fn report_span(filename: &str, source: &str, span: Span, message: &str) {
    // Empty spans (e.g. at end of file) get the last byte of the source so
    // the label has something to point at.
    let range = if span.start < span.end {
        span.start..span.end
    } else {
        end_of_source_range(source)
    };

    if let Err(report_err) = print_range_report(filename, source, range, message) {
        eprintln!("Error: {} (at {}:{})", message, span.line, span.column);
        eprintln!("(Failed to display detailed error report: {})", report_err);
    }
}

/// Renders every diagnostic of a failed parse.
pub(crate) fn report_parse_failure(filename: &str, source: &str, failure: &ParseFailure) {
    for error in &failure.errors {
        report_span(filename, source, error.span(), error.message());
    }
}

/// Renders an evaluation error.
pub(crate) fn report_eval_error(filename: &str, source: &str, error: &EvalError) {
    report_span(filename, source, error.span(), error.message());
}
