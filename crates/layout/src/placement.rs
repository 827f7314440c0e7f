//! Placement math for block content: images and table grids.

use pdfsmith_types::Size;

/// Uniform scale that fits `natural` inside `bounds` without upscaling.
///
/// Degenerate natural sizes (zero or negative) are left unscaled.
pub fn fit_scale(natural: Size, bounds: Size) -> f32 {
    if !natural.is_positive() {
        return 1.0;
    }
    (bounds.width / natural.width)
        .min(bounds.height / natural.height)
        .min(1.0)
}

/// `natural` scaled by [`fit_scale`].
pub fn fit_size(natural: Size, bounds: Size) -> Size {
    let scale = fit_scale(natural, bounds);
    Size::new(natural.width * scale, natural.height * scale)
}

/// Equal column widths spanning the available width.
pub fn column_width(available_width: f32, columns: usize) -> f32 {
    if columns == 0 {
        return 0.0;
    }
    available_width / columns as f32
}
