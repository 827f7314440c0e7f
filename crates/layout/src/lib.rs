//! Layout primitives for the pdfsmith document builder.
//!
//! Everything here is pure computation over the builder's single base font:
//! glyph filtering, greedy word-wrap, cell truncation, image fitting and the
//! pagination checks the builder runs before placing a block.

pub mod algorithms;
pub mod config;
pub mod fonts;
pub mod placement;
pub mod text;

pub use self::config::LayoutConfig;
pub use self::fonts::{FontMetrics, SizedFont, StandardFont};
pub use self::placement::{column_width, fit_scale, fit_size};
pub use self::text::{filter_glyphs, prepare_line, prepare_paragraph, truncate_to_width, wrap_paragraph};

// Re-export geometry types so callers need not depend on the types crate directly
pub use pdfsmith_types::{PageSize, Rect, Size};

#[cfg(test)]
mod text_test;
