pub mod fixtures;
pub mod pdf_assertions;

use lopdf::Document as LopdfDocument;
use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Object, ObjectId};
use pdfsmith::{BackendProvider, DocumentBuilder, LayoutConfig};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Wrapper around a generated PDF with helper methods
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
}

impl GeneratedPdf {
    /// Create a GeneratedPdf from raw bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, Box<dyn std::error::Error>> {
        let doc = LopdfDocument::load_mem(&bytes)?;
        Ok(Self { bytes, doc })
    }

    /// Serialize a builder and reparse the result
    pub fn from_builder(builder: &mut dyn DocumentBuilder) -> Result<Self, Box<dyn std::error::Error>> {
        Self::from_bytes(builder.to_bytes()?)
    }

    /// Get the number of pages in the PDF
    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    /// Object id of a 1-based page number
    pub fn page_id(&self, page: u32) -> ObjectId {
        *self
            .doc
            .get_pages()
            .get(&page)
            .unwrap_or_else(|| panic!("PDF has no page {page}"))
    }

    pub fn page_dict(&self, page: u32) -> &Dictionary {
        self.doc
            .get_object(self.page_id(page))
            .and_then(Object::as_dict)
            .expect("page object should be a dictionary")
    }

    /// Decoded operators of a page's content stream
    pub fn operations(&self, page: u32) -> Vec<Operation> {
        let bytes = self
            .doc
            .get_page_content(self.page_id(page))
            .expect("page content should be readable");
        Content::decode(&bytes).expect("content stream should decode").operations
    }

    /// Operator names of a page in stream order
    pub fn operators(&self, page: u32) -> Vec<String> {
        self.operations(page).into_iter().map(|op| op.operator).collect()
    }

    /// The `[llx lly urx ury]` media box of a page
    pub fn media_box(&self, page: u32) -> Vec<f32> {
        self.page_dict(page)
            .get(b"MediaBox")
            .and_then(Object::as_array)
            .expect("page should have a MediaBox")
            .iter()
            .map(|value| value.as_float().expect("MediaBox entries are numbers"))
            .collect()
    }

    /// The resource dictionary shared by the pages
    pub fn resources(&self, page: u32) -> &Dictionary {
        let resources = self.page_dict(page).get(b"Resources").expect("page should have Resources");
        match resources {
            Object::Reference(id) => self
                .doc
                .get_object(*id)
                .and_then(Object::as_dict)
                .expect("Resources should be a dictionary"),
            other => other.as_dict().expect("Resources should be a dictionary"),
        }
    }

    /// Image XObject streams, in resource-name order
    pub fn image_xobjects(&self) -> Vec<&Dictionary> {
        let Ok(xobjects) = self.resources(1).get(b"XObject").and_then(Object::as_dict) else {
            return Vec::new();
        };
        xobjects
            .iter()
            .map(|(_, value)| {
                let id = value.as_reference().expect("XObject entries are references");
                &self
                    .doc
                    .get_object(id)
                    .and_then(Object::as_stream)
                    .expect("XObject should be a stream")
                    .dict
            })
            .collect()
    }

    /// A string entry of the trailer `/Info` dictionary
    pub fn info(&self, key: &str) -> Option<String> {
        let id = self.doc.trailer.get(b"Info").and_then(Object::as_reference).ok()?;
        let info = self.doc.get_object(id).and_then(Object::as_dict).ok()?;
        let value = info.get(key.as_bytes()).ok()?;
        match value {
            Object::String(bytes, _) => Some(pdf_assertions::latin1(bytes)),
            _ => None,
        }
    }

    /// Save PDF to a file for manual debugging
    #[allow(dead_code)]
    pub fn save_for_debug(&self, name: &str) -> std::io::Result<()> {
        std::fs::write(format!("test_output_{}.pdf", name), &self.bytes)
    }
}

/// A builder from the default provider with logging enabled
pub fn new_builder() -> Box<dyn DocumentBuilder> {
    new_builder_with(LayoutConfig::default())
}

pub fn new_builder_with(config: LayoutConfig) -> Box<dyn DocumentBuilder> {
    let _ = env_logger::builder().is_test(true).try_init();
    BackendProvider::default().create_with(&config)
}
