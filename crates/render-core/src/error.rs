use std::path::PathBuf;
use thiserror::Error;

/// Failures surfaced by a [`DocumentBuilder`](crate::DocumentBuilder).
///
/// Every variant is fatal: the builder is left in an unspecified state and
/// should be closed and discarded.
#[derive(Error, Debug)]
pub enum BuildError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to write PDF to '{path}': {source}")]
    Save {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to decode image: {0}")]
    ImageDecode(#[source] Box<dyn std::error::Error + Send + Sync>),
    #[error("PDF generation error: {0}")]
    Pdf(String),
    #[error("Invalid page size {width}x{height}: both dimensions must be positive")]
    InvalidPageSize { width: f32, height: f32 },
    #[error("Document builder has been closed")]
    Closed,
}

impl From<lopdf::Error> for BuildError {
    fn from(err: lopdf::Error) -> Self {
        BuildError::Pdf(err.to_string())
    }
}
