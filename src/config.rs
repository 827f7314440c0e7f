use crate::backend::BackendProvider;
use crate::error::PdfsmithError;
use pdfsmith_layout::LayoutConfig;
use pdfsmith_render_core::DocumentBuilder;
use pdfsmith_render_lopdf::BACKEND_NAME;
use pdfsmith_types::DocumentInfo;
use serde::Deserialize;
use std::path::Path;

/// Everything needed to start a document: which backend, how pages are laid
/// out and what metadata the file carries.
///
/// ```json
/// {
///   "backend": "lopdf",
///   "layout": { "page_size": "Letter", "margin": 36 },
///   "info": { "title": "Quarterly report" }
/// }
/// ```
///
/// Missing fields fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct BuilderConfig {
    pub backend: String,
    pub layout: LayoutConfig,
    pub info: DocumentInfo,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            backend: BACKEND_NAME.to_string(),
            layout: LayoutConfig::default(),
            info: DocumentInfo::default(),
        }
    }
}

impl BuilderConfig {
    pub fn from_json(json: &str) -> Result<Self, PdfsmithError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, PdfsmithError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Resolves the configured backend.
    pub fn provider(&self) -> Result<BackendProvider, PdfsmithError> {
        Ok(BackendProvider::new(&self.backend)?.with_config(self.layout))
    }

    /// Creates an empty document with this layout and metadata.
    pub fn into_builder(self) -> Result<Box<dyn DocumentBuilder>, PdfsmithError> {
        let provider = self.provider()?;
        Ok(provider.create_with_info(&self.layout, self.info))
    }
}
