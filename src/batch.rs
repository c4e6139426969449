//! Batch driving: resolve one CLI path into per-photo processor runs.
//!
//! The target path is either a single photo or a directory. Directories are
//! read one level deep (subdirectories are not descended into) in listing
//! order, which is filesystem-dependent. Entries are filtered by the
//! configured extension set before any image work happens.
//!
//! ## Failure isolation
//!
//! A file that fails to process is recorded in the [`BatchReport`] and the
//! rest of the batch keeps going, so one truncated JPEG does not abort a
//! 300-file directory run. The report drives the process exit code.

use crate::config::RunConfig;
use crate::imaging::{BackendError, ImageBackend};
use crate::{output, process};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BatchError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("no such file or directory: {0}")]
    PathNotFound(PathBuf),
}

/// Outcome of one run.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Output paths written, in processing order.
    pub processed: Vec<PathBuf>,
    /// Inputs whose extension is not accepted. A filter, not an error.
    pub skipped: Vec<PathBuf>,
    /// Inputs that failed; the rest of the batch still ran.
    pub failed: Vec<(PathBuf, BackendError)>,
}

impl BatchReport {
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

fn has_accepted_extension(path: &Path, config: &RunConfig) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| config.accepts_extension(ext))
}

fn process_into(
    backend: &impl ImageBackend,
    source: &Path,
    config: &RunConfig,
    report: &mut BatchReport,
) {
    match process::process_photo(backend, source, config) {
        Ok(written) => {
            output::print_processed(&written);
            report.processed.push(written);
        }
        Err(err) => {
            output::print_failure(source, &err);
            report.failed.push((source.to_path_buf(), err));
        }
    }
}

/// Process `target` — a single photo or a directory of photos.
///
/// A single file with an unaccepted extension gets a diagnostic and an
/// otherwise empty report. A path that is neither file nor directory is
/// [`BatchError::PathNotFound`].
pub fn run(
    backend: &impl ImageBackend,
    target: &Path,
    config: &RunConfig,
) -> Result<BatchReport, BatchError> {
    let mut report = BatchReport::default();

    if target.is_file() {
        if has_accepted_extension(target, config) {
            process_into(backend, target, config, &mut report);
        } else {
            output::print_extension_skip(target, &config.accepted_extensions);
            report.skipped.push(target.to_path_buf());
        }
    } else if target.is_dir() {
        for entry in std::fs::read_dir(target)? {
            let path = entry?.path();
            if !path.is_file() {
                continue;
            }
            if !has_accepted_extension(&path, config) {
                report.skipped.push(path);
                continue;
            }
            output::print_found(&path);
            process_into(backend, &path, config, &mut report);
        }
    } else {
        return Err(BatchError::PathNotFound(target.to_path_buf()));
    }

    Ok(report)
}
