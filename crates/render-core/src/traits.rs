use crate::error::BuildError;
use pdfsmith_layout::LayoutConfig;
use pdfsmith_types::{GraphicsState, Point};
use std::io::Write;
use std::path::Path;

/// Incremental, paginated PDF construction.
///
/// Coordinates are PDF user-space points with the origin at the bottom-left
/// corner of the page. Content operations open a page on demand, and the
/// flowing operations (`add_paragraph`, `add_table`, `add_image`) start a new
/// page whenever their next line, row or image would cross the bottom margin.
///
/// Empty text, tables and image data are silently ignored so callers never
/// need to pre-check their content. Any operation after [`close`](Self::close)
/// fails with [`BuildError::Closed`].
pub trait DocumentBuilder: Send {
    /// Identifier of the engine behind this builder.
    fn backend_name(&self) -> &'static str;

    fn config(&self) -> &LayoutConfig;

    // --- Page lifecycle ---

    /// Starts a page of the configured default size.
    fn new_page(&mut self) -> Result<(), BuildError>;

    fn new_page_with_size(&mut self, width: f32, height: f32) -> Result<(), BuildError>;

    // --- Content ---

    /// Writes `text` as a single line with its baseline at `(x, y)`.
    fn add_text(&mut self, text: &str, x: f32, y: f32) -> Result<(), BuildError>;

    /// Writes wrapped text at the cursor.
    fn add_paragraph(&mut self, text: &str) -> Result<(), BuildError>;

    /// Writes a bordered grid of equal-width columns at the cursor.
    fn add_table(&mut self, rows: &[Vec<String>]) -> Result<(), BuildError>;

    /// Decodes and places an image at the cursor, scaled down to fit.
    fn add_image(&mut self, data: &[u8]) -> Result<(), BuildError>;

    // --- Vector primitives ---

    fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) -> Result<(), BuildError>;
    fn draw_rectangle(&mut self, x: f32, y: f32, width: f32, height: f32) -> Result<(), BuildError>;
    fn fill_rectangle(&mut self, x: f32, y: f32, width: f32, height: f32) -> Result<(), BuildError>;
    fn draw_circle(&mut self, cx: f32, cy: f32, radius: f32) -> Result<(), BuildError>;
    fn draw_ellipse(&mut self, cx: f32, cy: f32, rx: f32, ry: f32) -> Result<(), BuildError>;
    /// Angles in degrees, counter-clockwise from the positive x axis.
    fn draw_arc(
        &mut self,
        cx: f32,
        cy: f32,
        radius: f32,
        start_degrees: f32,
        sweep_degrees: f32,
    ) -> Result<(), BuildError>;
    fn draw_polygon(&mut self, points: &[Point]) -> Result<(), BuildError>;

    // --- Graphics state ---

    fn set_stroke_color(&mut self, r: u8, g: u8, b: u8) -> Result<(), BuildError>;
    fn set_fill_color(&mut self, r: u8, g: u8, b: u8) -> Result<(), BuildError>;
    fn set_line_width(&mut self, width: f32) -> Result<(), BuildError>;
    fn set_line_dash(&mut self, pattern: &[f32], phase: f32) -> Result<(), BuildError>;
    fn reset_line_dash(&mut self) -> Result<(), BuildError>;
    fn save_state(&mut self) -> Result<(), BuildError>;
    fn restore_state(&mut self) -> Result<(), BuildError>;

    // --- Output ---

    /// Serializes the whole document to `path`.
    fn save(&mut self, path: &Path) -> Result<(), BuildError>;

    /// Serializes the whole document to an arbitrary sink.
    fn write_to(&mut self, sink: &mut dyn Write) -> Result<(), BuildError>;

    fn to_bytes(&mut self) -> Result<Vec<u8>, BuildError> {
        let mut buffer = Vec::new();
        self.write_to(&mut buffer)?;
        Ok(buffer)
    }

    /// Releases every resource held by the builder. Safe to call repeatedly.
    fn close(&mut self);

    // --- Diagnostics ---

    fn page_count(&self) -> usize;

    /// The cursor of the active page, or `None` before the first page exists.
    fn cursor_y(&self) -> Option<f32>;

    fn graphics_state(&self) -> &GraphicsState;

    fn is_closed(&self) -> bool;
}
