//! Font metrics for the builder's default font.
//!
//! The builder does not embed font programs. It references one of the
//! standard 14 Type1 faces with `WinAnsiEncoding`, so only the advance
//! widths are needed here, in 1/1000 em as published in Adobe's AFM files.

/// Measures text set in a particular face.
pub trait FontMetrics {
    /// The `/BaseFont` name written to the font resource.
    fn postscript_name(&self) -> &str;

    /// Advance width of a single character in 1/1000 em.
    fn advance(&self, c: char) -> u16;

    /// Width of `text` in points at the given font size.
    fn text_width(&self, text: &str, font_size: f32) -> f32 {
        let units: u32 = text.chars().map(|c| self.advance(c) as u32).sum();
        units as f32 * font_size / 1000.0
    }
}

/// The standard Type1 faces the builder can reference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StandardFont {
    #[default]
    Helvetica,
}

/// Helvetica advance widths for U+0020..=U+007E.
const HELVETICA_ASCII: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556, // '0'..'?'
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, // '@'..'O'
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556, // 'P'..'_'
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, // '`'..'o'
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584, // 'p'..'~'
];

/// Helvetica advance widths for U+00A0..=U+00FF.
const HELVETICA_LATIN1: [u16; 96] = [
    278, 333, 556, 556, 556, 556, 260, 556, 333, 737, 370, 556, 584, 333, 737, 333, // A0..AF
    400, 584, 333, 333, 333, 556, 537, 278, 333, 333, 365, 556, 834, 834, 834, 611, // B0..BF
    667, 667, 667, 667, 667, 667, 1000, 722, 667, 667, 667, 667, 278, 278, 278, 278, // C0..CF
    722, 722, 778, 778, 778, 778, 778, 584, 778, 722, 722, 722, 722, 667, 667, 611, // D0..DF
    556, 556, 556, 556, 556, 556, 889, 500, 556, 556, 556, 556, 278, 278, 278, 278, // E0..EF
    556, 556, 556, 556, 556, 556, 556, 584, 611, 556, 556, 556, 556, 500, 556, 500, // F0..FF
];

/// Width used for characters outside the encoded repertoire.
const HELVETICA_FALLBACK: u16 = 556;

impl FontMetrics for StandardFont {
    fn postscript_name(&self) -> &str {
        match self {
            StandardFont::Helvetica => "Helvetica",
        }
    }

    fn advance(&self, c: char) -> u16 {
        match self {
            StandardFont::Helvetica => match c as u32 {
                code @ 0x20..=0x7E => HELVETICA_ASCII[(code - 0x20) as usize],
                code @ 0xA0..=0xFF => HELVETICA_LATIN1[(code - 0xA0) as usize],
                // Tabs and other whitespace are expanded before measuring;
                // treat any leftovers like a space.
                _ if c.is_whitespace() => HELVETICA_ASCII[0],
                _ => HELVETICA_FALLBACK,
            },
        }
    }
}

/// A face bound to a size; the measuring closure the text algorithms take.
#[derive(Debug, Clone, Copy)]
pub struct SizedFont {
    pub font: StandardFont,
    pub size: f32,
}

impl SizedFont {
    pub fn new(font: StandardFont, size: f32) -> Self {
        Self { font, size }
    }

    pub fn measure(&self, text: &str) -> f32 {
        self.font.text_width(text, self.size)
    }
}
