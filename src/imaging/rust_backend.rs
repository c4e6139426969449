//! Production backend on the pure-Rust `image` stack.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Identify | `image::image_dimensions` (header read, no full decode) |
//! | Decode (JPEG photo, PNG logo) | `image` crate decoders |
//! | Resize / logo scaling | `image::imageops::resize` with `Lanczos3` |
//! | Composite | `image::imageops::overlay` (alpha-blended, off-canvas clipped) |
//! | Encode → JPEG | `image::codecs::jpeg::JpegEncoder` with JFIF pixel density |

use super::backend::{BackendError, Dimensions, ImageBackend};
use super::params::{Dpi, JobParams, WatermarkSpec};
use image::codecs::jpeg::{JpegEncoder, PixelDensity, PixelDensityUnit};
use image::imageops::FilterType;
use image::{DynamicImage, ImageEncoder, ImageReader};
use std::path::Path;

/// Pure Rust backend using the `image` crate ecosystem.
///
/// See the [module docs](self) for the crate-to-operation mapping.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// Load and decode an image from disk.
fn load_image(path: &Path) -> Result<DynamicImage, BackendError> {
    ImageReader::open(path)
        .map_err(BackendError::Io)?
        .decode()
        .map_err(|e| BackendError::Decode {
            path: path.to_path_buf(),
            detail: e.to_string(),
        })
}

/// Alpha-blend the logo onto the photo at the planned offset.
///
/// `overlay` uses the logo's own alpha channel as the blend mask and clips
/// regions falling outside the canvas, so negative offsets are tolerated.
fn composite_watermark(
    photo: DynamicImage,
    spec: &WatermarkSpec,
) -> Result<DynamicImage, BackendError> {
    let logo = load_image(&spec.logo)?;
    let logo = match spec.scale_to {
        Some((w, h)) => logo.resize_exact(w, h, FilterType::Lanczos3),
        None => logo,
    };

    let mut canvas = photo.into_rgba8();
    image::imageops::overlay(&mut canvas, &logo.into_rgba8(), spec.offset.0, spec.offset.1);
    Ok(DynamicImage::ImageRgba8(canvas))
}

/// Encode as JPEG at the given quality, stamping the JFIF density fields.
fn encode_jpeg(
    img: &DynamicImage,
    path: &Path,
    quality: u8,
    dpi: Dpi,
) -> Result<(), BackendError> {
    let file = std::fs::File::create(path).map_err(BackendError::Io)?;
    let writer = std::io::BufWriter::new(file);

    let mut encoder = JpegEncoder::new_with_quality(writer, quality);
    encoder.set_pixel_density(PixelDensity {
        density: (dpi.x, dpi.y),
        unit: PixelDensityUnit::Inches,
    });

    let rgb = img.to_rgb8();
    encoder
        .write_image(
            rgb.as_raw(),
            rgb.width(),
            rgb.height(),
            image::ExtendedColorType::Rgb8,
        )
        .map_err(|e| BackendError::Encode {
            path: path.to_path_buf(),
            detail: e.to_string(),
        })
}

impl ImageBackend for RustBackend {
    fn identify(&self, path: &Path) -> Result<Dimensions, BackendError> {
        let (width, height) = image::image_dimensions(path).map_err(|e| BackendError::Decode {
            path: path.to_path_buf(),
            detail: e.to_string(),
        })?;
        Ok(Dimensions { width, height })
    }

    fn execute(&self, params: &JobParams) -> Result<(), BackendError> {
        let photo = load_image(&params.source)?;

        let photo = match params.resize_to {
            Some((w, h)) => photo.resize_exact(w, h, FilterType::Lanczos3),
            None => photo,
        };

        let photo = match &params.watermark {
            Some(spec) => composite_watermark(photo, spec)?,
            None => photo,
        };

        encode_jpeg(&photo, &params.output, params.quality.value(), params.dpi)
    }
}
