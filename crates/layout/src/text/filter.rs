use std::borrow::Cow;

/// Substituted for every character the base font cannot encode.
pub const REPLACEMENT_GLYPH: char = '?';

/// Printable ASCII, the Latin-1 supplement, and whitespace.
pub fn is_supported(c: char) -> bool {
    matches!(c as u32, 0x20..=0x7E | 0xA0..=0xFF) || c.is_whitespace()
}

/// Replaces unsupported characters with [`REPLACEMENT_GLYPH`].
///
/// Borrows the input when nothing needs replacing.
pub fn filter_glyphs(text: &str) -> Cow<'_, str> {
    if text.chars().all(is_supported) {
        return Cow::Borrowed(text);
    }
    Cow::Owned(
        text.chars()
            .map(|c| if is_supported(c) { c } else { REPLACEMENT_GLYPH })
            .collect(),
    )
}

/// Whitespace the font has no distinct glyph for becomes a plain space.
/// Line feeds and the no-break space pass through.
fn fold_whitespace(c: char) -> char {
    if c != '\n' && c != '\u{a0}' && c.is_whitespace() { ' ' } else { c }
}

/// Normalizes line endings, expands tabs, folds other whitespace to spaces
/// and filters glyphs ahead of wrapping.
pub fn prepare_paragraph(text: &str, tab_width: usize) -> String {
    let tab = " ".repeat(tab_width);
    let normalized: String = text
        .replace("\r\n", "\n")
        .replace('\r', "\n")
        .replace('\t', &tab)
        .chars()
        .map(fold_whitespace)
        .collect();
    filter_glyphs(&normalized).into_owned()
}

/// Like [`prepare_paragraph`], but folds line breaks into spaces so the
/// result can be shown as one text run.
pub fn prepare_line(text: &str, tab_width: usize) -> String {
    let tab = " ".repeat(tab_width);
    let flattened: String = text
        .replace('\t', &tab)
        .chars()
        .map(|c| if c == '\n' { ' ' } else { fold_whitespace(c) })
        .collect();
    filter_glyphs(&flattened).into_owned()
}
