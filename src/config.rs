//! Run configuration.
//!
//! A [`RunConfig`] holds every tunable parameter for one invocation. It is
//! built exactly once — stock defaults merged with CLI [`Overrides`] in a
//! single pass — validated, and never mutated afterwards. The batch driver
//! owns it and lends it to each per-photo call.
//!
//! ## Defaults
//!
//! ```text
//! margin        20 px
//! suffix        _wm
//! destination   watermarked/
//! quality       95
//! max size      1700 px (longest side, resize runs only)
//! logo          assets/logo-white.png (black variant via -b)
//! dpi           300x300 (150x150 when resizing for screen)
//! extensions    jpg, JPG, jpeg (matched literally)
//! ```

use crate::imaging::{Dpi, Quality};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("max size must be at least 1 pixel")]
    ZeroMaxSize,
    #[error("accepted extension list must not be empty")]
    NoAcceptedExtensions,
}

/// Bundled white logo, the default watermark.
pub const LOGO_WHITE: &str = "assets/logo-white.png";
/// Bundled black logo, for bright photos.
pub const LOGO_BLACK: &str = "assets/logo-black.png";

/// Immutable per-run configuration.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Distance in pixels between the photo edge and the watermark.
    pub margin: u32,
    /// Appended to output file stems. Stored with its `_` prefix.
    pub suffix: String,
    /// Directory the derivative files are written into.
    pub dest_path: PathBuf,
    pub quality: Quality,
    /// Longest-side cap applied when `resize` is on.
    pub max_size: u32,
    pub logo_path: PathBuf,
    pub dpi: Dpi,
    /// Extensions admitted by the batch driver, matched literally
    /// (`JPG` is accepted, `JPEG` is not).
    pub accepted_extensions: Vec<String>,
    pub resize: bool,
    pub watermark: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            margin: 20,
            suffix: "_wm".to_string(),
            dest_path: PathBuf::from("watermarked/"),
            quality: Quality::default(),
            max_size: 1700,
            logo_path: PathBuf::from(LOGO_WHITE),
            dpi: Dpi::PRINT,
            accepted_extensions: vec![
                "jpg".to_string(),
                "JPG".to_string(),
                "jpeg".to_string(),
            ],
            resize: false,
            watermark: true,
        }
    }
}

/// CLI-sourced overrides, merged over the defaults in one pass.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub margin: Option<u32>,
    /// Raw suffix from the CLI; the `_` prefix is added during the merge.
    pub suffix: Option<String>,
    pub max_size: Option<u32>,
    /// Explicit logo path. Wins over `black_logo`.
    pub logo: Option<PathBuf>,
    pub black_logo: bool,
    pub resize: bool,
    pub no_watermark: bool,
    /// Keep print density even when resizing.
    pub print_size: bool,
}

impl RunConfig {
    /// Merge `overrides` over the stock defaults and validate the result.
    pub fn build(overrides: Overrides) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let logo_path = match (overrides.logo, overrides.black_logo) {
            (Some(path), _) => path,
            (None, true) => PathBuf::from(LOGO_BLACK),
            (None, false) => defaults.logo_path,
        };

        // Resized output targets screens unless print density is requested.
        let dpi = if overrides.resize && !overrides.print_size {
            Dpi::WEB
        } else {
            Dpi::PRINT
        };

        let config = Self {
            margin: overrides.margin.unwrap_or(defaults.margin),
            suffix: overrides
                .suffix
                .map(|s| format!("_{s}"))
                .unwrap_or(defaults.suffix),
            dest_path: defaults.dest_path,
            quality: defaults.quality,
            max_size: overrides.max_size.unwrap_or(defaults.max_size),
            logo_path,
            dpi,
            accepted_extensions: defaults.accepted_extensions,
            resize: overrides.resize,
            watermark: !overrides.no_watermark,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check config values that would make a run structurally impossible.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.max_size == 0 {
            return Err(ConfigError::ZeroMaxSize);
        }
        if self.accepted_extensions.is_empty() {
            return Err(ConfigError::NoAcceptedExtensions);
        }
        Ok(())
    }

    /// True when `ext` (without the leading dot) is admitted by this run.
    pub fn accepts_extension(&self, ext: &str) -> bool {
        self.accepted_extensions.iter().any(|e| e == ext)
    }
}
