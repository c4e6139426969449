//! Image backend trait and shared types.
//!
//! The [`ImageBackend`] trait splits image work into a cheap header read
//! (`identify`) and the full decode → transform → encode pipeline for one
//! job (`execute`). The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend) — pure Rust, zero
//! external dependencies.

use super::params::JobParams;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to decode {path}: {detail}")]
    Decode { path: PathBuf, detail: String },
    #[error("failed to encode {path}: {detail}")]
    Encode { path: PathBuf, detail: String },
}

/// Result of an identify operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

/// Trait for image backends.
///
/// `identify` reads dimensions from the file header without decoding pixel
/// data; `execute` performs everything a [`JobParams`] describes and writes
/// exactly one output file. The decoded image lives only inside `execute`,
/// so memory is released before the next file starts.
pub trait ImageBackend {
    /// Get image dimensions from the file header.
    fn identify(&self, path: &Path) -> Result<Dimensions, BackendError>;

    /// Run one job: decode, optionally resize and composite, encode, write.
    fn execute(&self, params: &JobParams) -> Result<(), BackendError>;
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Mock backend that records jobs without touching pixels.
    /// Processing is single-threaded, so RefCell is enough — no Mutex needed.
    #[derive(Default)]
    pub struct MockBackend {
        /// Dimensions handed out by `identify`, popped from the back.
        pub identify_results: RefCell<Vec<Dimensions>>,
        pub identified: RefCell<Vec<PathBuf>>,
        pub jobs: RefCell<Vec<JobParams>>,
        /// Sources whose `execute` call should fail.
        pub fail_sources: RefCell<Vec<PathBuf>>,
    }

    impl MockBackend {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_dimensions(dims: Vec<Dimensions>) -> Self {
            Self {
                identify_results: RefCell::new(dims),
                ..Self::default()
            }
        }

        pub fn fail_for(self, source: PathBuf) -> Self {
            self.fail_sources.borrow_mut().push(source);
            self
        }

        pub fn recorded_jobs(&self) -> Vec<JobParams> {
            self.jobs.borrow().clone()
        }
    }

    impl ImageBackend for MockBackend {
        fn identify(&self, path: &Path) -> Result<Dimensions, BackendError> {
            self.identified.borrow_mut().push(path.to_path_buf());
            self.identify_results
                .borrow_mut()
                .pop()
                .ok_or_else(|| BackendError::Decode {
                    path: path.to_path_buf(),
                    detail: "no mock dimensions queued".to_string(),
                })
        }

        fn execute(&self, params: &JobParams) -> Result<(), BackendError> {
            if self.fail_sources.borrow().contains(&params.source) {
                return Err(BackendError::Decode {
                    path: params.source.clone(),
                    detail: "mock failure".to_string(),
                });
            }
            self.jobs.borrow_mut().push(params.clone());
            Ok(())
        }
    }

    #[test]
    fn mock_records_identify() {
        let backend = MockBackend::with_dimensions(vec![Dimensions {
            width: 800,
            height: 600,
        }]);

        let dims = backend.identify(Path::new("/test/image.jpg")).unwrap();
        assert_eq!(dims.width, 800);
        assert_eq!(dims.height, 600);
        assert_eq!(
            backend.identified.borrow().as_slice(),
            &[PathBuf::from("/test/image.jpg")]
        );
    }

    #[test]
    fn mock_identify_errors_when_queue_is_empty() {
        let backend = MockBackend::new();
        assert!(backend.identify(Path::new("/test/image.jpg")).is_err());
    }

    #[test]
    fn mock_records_jobs_and_honors_fail_sources() {
        use crate::imaging::params::{Dpi, Quality};

        let backend = MockBackend::new().fail_for(PathBuf::from("/bad.jpg"));
        let job = |source: &str| JobParams {
            source: PathBuf::from(source),
            output: PathBuf::from("/out.jpg"),
            resize_to: None,
            watermark: None,
            quality: Quality::default(),
            dpi: Dpi::PRINT,
        };

        backend.execute(&job("/good.jpg")).unwrap();
        assert!(backend.execute(&job("/bad.jpg")).is_err());

        let jobs = backend.recorded_jobs();
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].source, PathBuf::from("/good.jpg"));
    }
}
