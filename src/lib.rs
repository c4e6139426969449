//! # Photomark
//!
//! Batch logo watermarking and shrink-to-fit resizing for JPEG photographs.
//! Point it at one photo or a directory of photos and it writes a derivative
//! of each into a destination folder, with the logo composited bottom-left
//! and/or the longest side capped.
//!
//! # Architecture: Plan, Then Execute
//!
//! Every photo goes through the same two-phase flow:
//!
//! ```text
//! 1. Plan     dimensions + config  →  JobParams   (pure math, no pixels)
//! 2. Execute  JobParams            →  output file (decode, transform, encode)
//! ```
//!
//! The plan phase only reads image headers (`identify`) and computes sizes,
//! placement, and the output path. All pixel work is behind the
//! [`imaging::ImageBackend`] trait, so the orchestration in [`process`] and
//! [`batch`] is unit-testable with a recording mock — no images are decoded
//! or encoded in those tests.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | Immutable per-run configuration: defaults merged with CLI overrides in one pass |
//! | [`naming`] | Output filename derivation (destination, prefix, suffix, optional date stamp) |
//! | [`imaging`] | Dimension math, job parameter types, backend trait, and the `image`-crate backend |
//! | [`process`] | Single-photo orchestration: identify → plan → execute |
//! | [`batch`] | Resolves the CLI path to one file or a directory listing and drives the processor |
//! | [`output`] | CLI output formatting — pure `format_*` functions plus `print_*` wrappers |
//!
//! # Design Decisions
//!
//! ## Pure-Rust Imaging
//!
//! Decode, Lanczos3 resampling, alpha compositing, and JPEG encoding all come
//! from the `image` crate — no ImageMagick, no system dependencies. The
//! binary is fully self-contained.
//!
//! ## Single-Threaded by Design
//!
//! A run processes files strictly one at a time: each photo is fully decoded,
//! transformed, and written before the next begins. The only state shared
//! across files is the read-only [`config::RunConfig`].
//!
//! ## Bottom-Left Anchor, 13% Width Cap
//!
//! The watermark is anchored to the bottom-left corner with a configurable
//! margin, and is downscaled (never upscaled) so it occupies at most 13% of
//! the photo's width. Placement math ([`imaging::fit_within`],
//! [`imaging::watermark_target`], [`imaging::watermark_offset`]) is pure and
//! exhaustively unit-tested; the composite itself clips off-canvas regions
//! instead of failing when margins and sizes disagree.

pub mod batch;
pub mod config;
pub mod imaging;
pub mod naming;
pub mod output;
pub mod process;

#[cfg(test)]
pub(crate) mod test_helpers;
