pub mod color;
pub mod document;
pub mod geometry;
pub mod graphics;

pub use color::Color;
pub use document::DocumentInfo;
pub use geometry::{PageSize, Point, Rect, Size};
pub use graphics::{GraphicsState, LineDash};
