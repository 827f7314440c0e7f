#![cfg(test)]

use crate::config::LayoutConfig;
use crate::fonts::{SizedFont, StandardFont};
use crate::text::{prepare_paragraph, wrap_paragraph};

fn default_font() -> SizedFont {
    SizedFont::new(StandardFont::Helvetica, LayoutConfig::default().font_size)
}

#[test]
fn test_text_wrapping_respects_available_width() {
    // A4 with 50pt margins -> 495.28pt of line width
    let config = LayoutConfig::default();
    let font = default_font();
    let width = config.available_width(595.28);

    let text = "This is a very very long line of text that is absolutely guaranteed to wrap at least once \
                when it is set in twelve point Helvetica on an A4 page with the default margins applied.";
    let lines = wrap_paragraph(text, width, |s| font.measure(s));

    assert!(lines.len() > 1, "Paragraph should have wrapped to a second line.");
    for line in &lines {
        assert!(font.measure(line) <= width, "line overflows: {line}");
    }
    assert_eq!(lines.join(" "), text);
}

#[test]
fn test_two_explicit_lines_stay_in_order() {
    let font = default_font();
    let lines = wrap_paragraph("line1\nline2", 495.28, |s| font.measure(s));
    assert_eq!(lines, vec!["line1", "line2"]);
}

#[test]
fn test_prepared_paragraph_wraps_expanded_tabs() {
    let font = default_font();
    let prepared = prepare_paragraph("col\tvalue \u{2022} next", 4);
    let lines = wrap_paragraph(&prepared, f32::INFINITY, |s| font.measure(s));
    assert_eq!(lines, vec!["col    value ? next"]);
}

#[test]
fn test_infinite_width_is_identity_per_segment() {
    let font = default_font();
    let text = "alpha beta\n\ngamma   delta\n epsilon";
    let lines = wrap_paragraph(text, f32::INFINITY, |s| font.measure(s));
    let segments: Vec<&str> = text.split('\n').collect();
    assert_eq!(lines, segments);
}
