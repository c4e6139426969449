//! CLI output formatting.
//!
//! Every message has a pure `format_*` function (returns `String` or
//! `Vec<String>`, unit-testable) and a `print_*` wrapper that writes to
//! stdout — or stderr for failures. Format functions do no I/O.

use crate::batch::BatchReport;
use crate::imaging::BackendError;
use std::path::Path;

/// Startup banner: tool name, build string, one-line purpose.
pub fn format_banner(build: &str) -> Vec<String> {
    vec![
        format!("photomark {build}"),
        "Batch watermarking and resizing for JPEG photographs".to_string(),
        String::new(),
    ]
}

/// Effective suffix line, echoed at startup.
pub fn format_suffix_line(suffix: &str) -> String {
    format!("Output suffix: {suffix}")
}

/// Effective longest-side cap, echoed when resizing.
pub fn format_max_size_line(max_size: u32, overridden: bool) -> String {
    if overridden {
        format!("Max output size: {max_size}px")
    } else {
        format!("Max output size: {max_size}px (default)")
    }
}

/// A qualifying image was found in a directory listing.
pub fn format_found(path: &Path) -> String {
    format!("Found image file: {}", path.display())
}

/// Confirmation for one written derivative.
pub fn format_processed(output: &Path) -> String {
    format!("Watermarked image: {}", output.display())
}

/// Diagnostic for a single-file run whose extension is not accepted.
pub fn format_extension_skip(path: &Path, accepted: &[String]) -> Vec<String> {
    vec![
        format!("Not an accepted image: {}", path.display()),
        format!("Accepted extensions: {}", accepted.join(", ")),
    ]
}

/// One file failed; the batch keeps going.
pub fn format_failure(source: &Path, err: &BackendError) -> String {
    format!("Failed {}: {err}", source.display())
}

/// End-of-run summary.
pub fn format_summary(report: &BatchReport) -> String {
    let mut line = format!("Processed {} image(s)", report.processed.len());
    if !report.skipped.is_empty() {
        line.push_str(&format!(", skipped {}", report.skipped.len()));
    }
    if !report.failed.is_empty() {
        line.push_str(&format!(", {} failed", report.failed.len()));
    }
    line
}

pub fn print_banner(build: &str) {
    for line in format_banner(build) {
        println!("{line}");
    }
}

pub fn print_suffix_line(suffix: &str) {
    println!("{}", format_suffix_line(suffix));
}

pub fn print_max_size_line(max_size: u32, overridden: bool) {
    println!("{}", format_max_size_line(max_size, overridden));
}

pub fn print_found(path: &Path) {
    println!("{}", format_found(path));
}

pub fn print_processed(output: &Path) {
    println!("{}", format_processed(output));
}

pub fn print_extension_skip(path: &Path, accepted: &[String]) {
    for line in format_extension_skip(path, accepted) {
        println!("{line}");
    }
}

pub fn print_failure(source: &Path, err: &BackendError) {
    eprintln!("{}", format_failure(source, err));
}

pub fn print_summary(report: &BatchReport) {
    println!("{}", format_summary(report));
}
