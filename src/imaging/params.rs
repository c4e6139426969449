//! Parameter types for image jobs.
//!
//! These structs describe *what* to do to a photo, not *how* to do it. They
//! are the interface between [`process`](crate::process) (which decides what
//! each file needs) and the [`backend`](super::backend) (which does the
//! actual pixel work). This separation allows swapping backends (e.g. for
//! testing with a mock) without changing planning logic.
//!
//! ## Types
//!
//! - [`Quality`] — JPEG encoding quality (1–100, default 95). Clamped on construction.
//! - [`Dpi`] — Pixel density stamped into the JFIF header.
//! - [`WatermarkSpec`] — Which logo to composite, how to scale it, where it lands.
//! - [`JobParams`] — Full specification for one file: source, output, optional resize, optional watermark.

use std::path::PathBuf;

/// Quality setting for JPEG encoding (1-100).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quality(u8);

impl Quality {
    pub fn new(value: u8) -> Self {
        Self(value.clamp(1, 100))
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl Default for Quality {
    fn default() -> Self {
        Self(95)
    }
}

/// Pixel density written to the JFIF header, in dots per inch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dpi {
    pub x: u16,
    pub y: u16,
}

impl Dpi {
    /// Print-resolution density. 20px is roughly 0.17cm at this density.
    pub const PRINT: Dpi = Dpi { x: 300, y: 300 };
    /// Screen-friendly density used for resized output.
    pub const WEB: Dpi = Dpi { x: 150, y: 150 };
}

impl Default for Dpi {
    fn default() -> Self {
        Self::PRINT
    }
}

/// Watermark portion of a job: which logo, how to scale it, where it lands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatermarkSpec {
    pub logo: PathBuf,
    /// Target logo dimensions. `None` keeps the logo at its decoded size.
    pub scale_to: Option<(u32, u32)>,
    /// Top-left placement on the (possibly resized) photo. May be negative
    /// when margin and sizes disagree; the composite clips.
    pub offset: (i64, i64),
}

/// Full specification of one file's processing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobParams {
    pub source: PathBuf,
    pub output: PathBuf,
    /// Exact post-resize photo dimensions. `None` leaves the photo unscaled.
    pub resize_to: Option<(u32, u32)>,
    pub watermark: Option<WatermarkSpec>,
    pub quality: Quality,
    pub dpi: Dpi,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quality_clamps_to_valid_range() {
        assert_eq!(Quality::new(0).value(), 1);
        assert_eq!(Quality::new(50).value(), 50);
        assert_eq!(Quality::new(150).value(), 100);
    }

    #[test]
    fn quality_default_is_95() {
        assert_eq!(Quality::default().value(), 95);
    }

    #[test]
    fn dpi_presets() {
        assert_eq!(Dpi::PRINT, Dpi { x: 300, y: 300 });
        assert_eq!(Dpi::WEB, Dpi { x: 150, y: 150 });
        assert_eq!(Dpi::default(), Dpi::PRINT);
    }
}
