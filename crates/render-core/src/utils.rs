/// Encodes text for a simple font using `WinAnsiEncoding`.
///
/// Characters outside Latin-1 become `?`. The Latin-1 supplement maps
/// directly, which holds for every code point the glyph filter lets through.
pub fn encode_win_ansi(s: &str) -> Vec<u8> {
    s.chars().map(|c| if c as u32 <= 255 { c as u8 } else { b'?' }).collect()
}

/// Formats a PDF resource name such as `F1` or `Im3`.
pub fn resource_name(prefix: &str, index: usize) -> String {
    format!("{}{}", prefix, index)
}
