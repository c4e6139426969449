//! Image processing — pure Rust, zero external dependencies.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Identify** | `image::image_dimensions` |
//! | **Resize (shrink-to-fit)** | Lanczos3 via `image::imageops` |
//! | **Watermark composite** | `image::imageops::overlay` (alpha-blended) |
//! | **Encode** | JPEG with quality + JFIF pixel density |
//!
//! The module is split into:
//! - **Calculations**: Pure functions for dimension math (unit testable)
//! - **Parameters**: Data structures describing one file's job
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]

pub mod backend;
mod calculations;
mod params;
pub mod rust_backend;

pub use backend::{BackendError, Dimensions, ImageBackend};
pub use calculations::{fit_within, watermark_offset, watermark_target};
pub use params::{Dpi, JobParams, Quality, WatermarkSpec};
pub use rust_backend::RustBackend;
