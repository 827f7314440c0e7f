use pdfsmith_types::PageSize;
use serde::Deserialize;

/// Page geometry and typographic constants used by the builder.
///
/// Every field has a default, so a partial JSON object such as
/// `{"margin": 36}` is a valid configuration.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Size used by `new_page()` when no explicit size is given.
    pub page_size: PageSize,
    /// Uniform margin on all four sides, in points.
    pub margin: f32,
    /// Size of the default font.
    pub font_size: f32,
    /// Vertical advance per text line. Also the gap left after tables and images.
    pub leading: f32,
    /// Fixed height of every table row. Cell text never wraps.
    pub cell_height: f32,
    /// Horizontal and vertical inset of cell text from the cell border.
    pub cell_padding: f32,
    /// Number of spaces a tab expands to.
    pub tab_width: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            page_size: PageSize::A4,
            margin: 50.0,
            font_size: 12.0,
            leading: 14.4,
            cell_height: 20.0,
            cell_padding: 4.0,
            tab_width: 4,
        }
    }
}

impl LayoutConfig {
    /// Width available to text and tables on a page of the given width.
    pub fn available_width(&self, page_width: f32) -> f32 {
        (page_width - 2.0 * self.margin).max(0.0)
    }

    /// Height between the top and bottom margins.
    pub fn writable_height(&self, page_height: f32) -> f32 {
        (page_height - 2.0 * self.margin).max(0.0)
    }

    /// The cursor position of a fresh page.
    pub fn top_of_page(&self, page_height: f32) -> f32 {
        page_height - self.margin
    }
}
