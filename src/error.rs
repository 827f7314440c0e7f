use pdfsmith_render_core::BuildError;
use thiserror::Error;

/// Errors raised while selecting, configuring or driving a document backend.
#[derive(Error, Debug)]
pub enum PdfsmithError {
    #[error("Unknown document backend '{name}' (available: {})", .available.join(", "))]
    UnknownBackend { name: String, available: Vec<String> },

    #[error("Document build failed: {0}")]
    Build(#[from] BuildError),

    #[error("Invalid builder configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
