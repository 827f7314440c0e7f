//! Text preparation and line breaking for the builder's single base font.

pub mod filter;
pub mod truncate;
pub mod wrapper;

pub use filter::{filter_glyphs, prepare_line, prepare_paragraph, REPLACEMENT_GLYPH};
pub use truncate::{truncate_to_width, ELLIPSIS};
pub use wrapper::wrap_paragraph;
