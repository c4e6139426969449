//! Single-photo processing.
//!
//! Orchestrates one file: identify the photo (and the logo, when
//! watermarking), plan the full job from dimensions alone, then hand the
//! plan to the backend. Planning is pure — given the same dimensions and
//! config it always produces the same [`JobParams`] — so everything up to
//! the pixel work is testable with the recording mock.
//!
//! ## Job layout
//!
//! ```text
//! identify photo ─┐
//! identify logo ──┼─ plan_job ── JobParams ── backend.execute ── output file
//! RunConfig ──────┘
//! ```
//!
//! Watermark sizing and placement run against the dimensions the photo will
//! have *after* the resize step, since that is the canvas the logo lands on.

use crate::config::RunConfig;
use crate::imaging::{
    BackendError, Dimensions, ImageBackend, JobParams, WatermarkSpec, fit_within,
    watermark_offset, watermark_target,
};
use crate::naming;
use std::path::{Path, PathBuf};

/// Build the full job description for one photo.
pub fn plan_job(
    config: &RunConfig,
    source: &Path,
    photo: Dimensions,
    logo: Option<Dimensions>,
) -> JobParams {
    let resize_to = if config.resize {
        fit_within((photo.width, photo.height), config.max_size)
    } else {
        None
    };

    // The canvas the watermark is placed on: post-resize when resizing.
    let canvas = resize_to.unwrap_or((photo.width, photo.height));

    let watermark = logo.map(|logo| {
        let scale_to = watermark_target(canvas, (logo.width, logo.height));
        let placed = scale_to.unwrap_or((logo.width, logo.height));
        WatermarkSpec {
            logo: config.logo_path.clone(),
            scale_to,
            offset: watermark_offset(canvas, placed, config.margin),
        }
    });

    JobParams {
        source: source.to_path_buf(),
        output: naming::output_path_for(config, source),
        resize_to,
        watermark,
        quality: config.quality,
        dpi: config.dpi,
    }
}

/// Process one photo end to end. Returns the written output path.
///
/// Decode, I/O, and encode failures surface as [`BackendError`]; no partial
/// output cleanup is attempted on failure.
pub fn process_photo(
    backend: &impl ImageBackend,
    source: &Path,
    config: &RunConfig,
) -> Result<PathBuf, BackendError> {
    let photo = backend.identify(source)?;
    let logo = if config.watermark {
        Some(backend.identify(&config.logo_path)?)
    } else {
        None
    };

    let params = plan_job(config, source, photo, logo);
    backend.execute(&params)?;
    Ok(params.output)
}
