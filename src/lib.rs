//! Paginated PDF document builder.
//!
//! Format converters drive a [`DocumentBuilder`] with a small set of
//! operations (paragraphs, tables, images, vector shapes) and the builder
//! takes care of word wrapping, glyph filtering and page breaks. The engine
//! behind the builder is picked at runtime through a [`BackendProvider`].
//!
//! ```no_run
//! use pdfsmith::{BackendProvider, DocumentBuilder};
//!
//! # fn main() -> Result<(), pdfsmith::PdfsmithError> {
//! let mut doc = BackendProvider::new("lopdf")?.create();
//! doc.add_paragraph("Hello, world")?;
//! doc.add_table(&[vec!["a".into(), "b".into()]])?;
//! doc.save(std::path::Path::new("hello.pdf"))?;
//! doc.close();
//! # Ok(())
//! # }
//! ```

mod backend;
mod config;
mod error;

pub use backend::{BackendConstructor, BackendProvider, BackendRegistry};
pub use config::BuilderConfig;
pub use error::PdfsmithError;

pub use pdfsmith_layout::LayoutConfig;
pub use pdfsmith_render_core::{BuildError, DocumentBuilder};
pub use pdfsmith_render_lopdf::LopdfBuilder;
pub use pdfsmith_types::{Color, DocumentInfo, GraphicsState, LineDash, PageSize, Point, Size};
