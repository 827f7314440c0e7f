/// Centralized logic to check whether a block of the given height still fits
/// between the cursor and the bottom margin.
///
/// * `cursor_y`: The current baseline/top position in PDF user space.
/// * `block_height`: The required height below the cursor.
/// * `bottom`: The lowest usable y coordinate (the bottom margin).
pub fn fits_above(cursor_y: f32, block_height: f32, bottom: f32) -> bool {
    // Use a small epsilon to handle floating point inaccuracies
    const EPSILON: f32 = 0.01;
    cursor_y - block_height >= bottom - EPSILON
}

/// Whether a text line may still be written at `cursor_y`.
pub fn line_fits(cursor_y: f32, bottom: f32) -> bool {
    cursor_y >= bottom
}
