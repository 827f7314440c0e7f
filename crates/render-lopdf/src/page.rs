use lopdf::content::{Content, Operation};
use lopdf::{Object, StringFormat};
use pdfsmith_render_core::utils::encode_win_ansi;
use pdfsmith_render_core::{BuildError, PathSegment};
use pdfsmith_types::{Rect, Size};

/// A page whose content stream has been closed and encoded.
#[derive(Debug, Clone)]
pub(crate) struct FinishedPage {
    pub size: Size,
    pub content: Vec<u8>,
}

/// How a constructed path is painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Paint {
    Stroke,
    Fill,
}

impl Paint {
    fn operator(self) -> &'static str {
        match self {
            Paint::Stroke => "S",
            Paint::Fill => "f",
        }
    }
}

/// The active page: its size, cursor and append-only operator list.
pub(crate) struct PageContext {
    size: Size,
    top: f32,
    cursor_y: f32,
    content: Content,
    is_text_section_open: bool,
}

impl PageContext {
    pub fn new(size: Size, top: f32) -> Self {
        Self {
            size,
            top,
            cursor_y: top,
            content: Content { operations: vec![] },
            is_text_section_open: false,
        }
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn cursor_y(&self) -> f32 {
        self.cursor_y
    }

    pub fn advance(&mut self, by: f32) {
        self.cursor_y -= by;
    }

    /// Nothing has been flowed onto this page yet.
    pub fn is_fresh(&self) -> bool {
        self.cursor_y >= self.top
    }

    pub fn push(&mut self, op: Operation) {
        self.content.operations.push(op);
    }

    pub fn extend(&mut self, ops: impl IntoIterator<Item = Operation>) {
        self.content.operations.extend(ops);
    }

    // --- Text ---

    pub fn begin_text(&mut self, font_resource: &str, font_size: f32) {
        if self.is_text_section_open {
            return;
        }
        self.push(Operation::new("BT", vec![]));
        self.push(Operation::new(
            "Tf",
            vec![Object::Name(font_resource.as_bytes().to_vec()), font_size.into()],
        ));
        self.is_text_section_open = true;
    }

    pub fn end_text(&mut self) {
        if self.is_text_section_open {
            self.push(Operation::new("ET", vec![]));
            self.is_text_section_open = false;
        }
    }

    /// Shows `text` with its baseline origin at `(x, y)`. Requires an open text section.
    pub fn show_text_at(&mut self, text: &str, x: f32, y: f32) {
        debug_assert!(self.is_text_section_open, "text shown outside BT/ET");
        self.push(Operation::new(
            "Tm",
            vec![1.into(), 0.into(), 0.into(), 1.into(), x.into(), y.into()],
        ));
        self.push(Operation::new(
            "Tj",
            vec![Object::String(encode_win_ansi(text), StringFormat::Literal)],
        ));
    }

    // --- Paths ---

    pub fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) {
        self.push(Operation::new("m", vec![x1.into(), y1.into()]));
        self.push(Operation::new("l", vec![x2.into(), y2.into()]));
        self.push(Operation::new("S", vec![]));
    }

    pub fn rect(&mut self, rect: Rect, paint: Paint) {
        self.push(Operation::new(
            "re",
            vec![rect.x.into(), rect.y.into(), rect.width.into(), rect.height.into()],
        ));
        self.push(Operation::new(paint.operator(), vec![]));
    }

    pub fn path(&mut self, segments: &[PathSegment], paint: Paint) {
        if segments.is_empty() {
            return;
        }
        for segment in segments {
            let op = match segment {
                PathSegment::MoveTo(p) => Operation::new("m", vec![p.x.into(), p.y.into()]),
                PathSegment::LineTo(p) => Operation::new("l", vec![p.x.into(), p.y.into()]),
                PathSegment::CurveTo { c1, c2, to } => Operation::new(
                    "c",
                    vec![
                        c1.x.into(),
                        c1.y.into(),
                        c2.x.into(),
                        c2.y.into(),
                        to.x.into(),
                        to.y.into(),
                    ],
                ),
                PathSegment::Close => Operation::new("h", vec![]),
            };
            self.push(op);
        }
        self.push(Operation::new(paint.operator(), vec![]));
    }

    // --- Images ---

    /// Paints the named image XObject into `rect`.
    pub fn place_image(&mut self, resource: &str, rect: Rect) {
        self.push(Operation::new("q", vec![]));
        self.push(Operation::new(
            "cm",
            vec![
                rect.width.into(),
                0.into(),
                0.into(),
                rect.height.into(),
                rect.x.into(),
                rect.y.into(),
            ],
        ));
        self.push(Operation::new("Do", vec![Object::Name(resource.as_bytes().to_vec())]));
        self.push(Operation::new("Q", vec![]));
    }

    // --- Lifecycle ---

    /// Encodes the operators written so far without closing the page.
    pub fn encode(&self) -> Result<Vec<u8>, BuildError> {
        Ok(self.content.encode()?)
    }

    /// Closes any open text section and encodes the content stream.
    pub fn finish(mut self) -> Result<FinishedPage, BuildError> {
        self.end_text();
        let content = self.encode()?;
        Ok(FinishedPage {
            size: self.size,
            content,
        })
    }

    #[cfg(test)]
    pub fn operators(&self) -> Vec<&str> {
        self.content.operations.iter().map(|op| op.operator.as_str()).collect()
    }
}
