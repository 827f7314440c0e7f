use crate::page::{FinishedPage, PageContext, Paint};
use crate::state;
use crate::writer::StreamingPdfWriter;
use crate::xobject::ImageXObject;
use lopdf::content::Operation;
use lopdf::{dictionary, Dictionary, Object, StringFormat};
use pdfsmith_layout::algorithms::pagination::{fits_above, line_fits};
use pdfsmith_layout::{
    column_width, filter_glyphs, fit_size, prepare_line, prepare_paragraph, truncate_to_width,
    wrap_paragraph, FontMetrics, LayoutConfig, SizedFont, StandardFont,
};
use pdfsmith_render_core::utils::{encode_win_ansi, resource_name};
use pdfsmith_render_core::{path, BuildError, DocumentBuilder};
use pdfsmith_types::{Color, DocumentInfo, GraphicsState, LineDash, Point, Rect, Size};
use std::io::{Cursor, Write};
use std::path::Path;

pub const BACKEND_NAME: &str = "lopdf";

const PDF_VERSION: &str = "1.7";
const FONT_RESOURCE: &str = "F1";
const IMAGE_RESOURCE_PREFIX: &str = "Im";
const PRODUCER: &str = concat!("pdfsmith ", env!("CARGO_PKG_VERSION"));
/// Height of cell text baselines above the font's box bottom, relative to the font size.
const CELL_BASELINE_RATIO: f32 = 0.2;

/// A [`DocumentBuilder`] that assembles pages as `lopdf` operator lists and
/// serializes them with [`StreamingPdfWriter`].
///
/// Finished pages are encoded as soon as the next page starts; only the
/// active page keeps its operators in memory.
pub struct LopdfBuilder {
    config: LayoutConfig,
    font: SizedFont,
    info: DocumentInfo,
    pages: Vec<FinishedPage>,
    active: Option<PageContext>,
    images: Vec<ImageXObject>,
    state: GraphicsState,
    saved_states: Vec<GraphicsState>,
    closed: bool,
}

impl Default for LopdfBuilder {
    fn default() -> Self {
        Self::new(LayoutConfig::default())
    }
}

impl LopdfBuilder {
    pub fn new(config: LayoutConfig) -> Self {
        Self {
            font: SizedFont::new(StandardFont::Helvetica, config.font_size),
            config,
            info: DocumentInfo::default(),
            pages: Vec::new(),
            active: None,
            images: Vec::new(),
            state: GraphicsState::default(),
            saved_states: Vec::new(),
            closed: false,
        }
    }

    pub fn with_info(mut self, info: DocumentInfo) -> Self {
        self.info = info;
        self
    }

    fn ensure_open(&self) -> Result<(), BuildError> {
        if self.closed {
            log::warn!("Write attempted on a closed document builder");
            return Err(BuildError::Closed);
        }
        Ok(())
    }

    fn default_page_size(&self) -> Size {
        self.config.page_size.size()
    }

    /// A new page with the current graphics state already applied.
    ///
    /// Both the default size from the configuration and explicit sizes go
    /// through here, so every page is checked the same way.
    fn fresh_page(&self, size: Size) -> Result<PageContext, BuildError> {
        if !size.is_usable() {
            return Err(BuildError::InvalidPageSize {
                width: size.width,
                height: size.height,
            });
        }
        let mut page = PageContext::new(size, self.config.top_of_page(size.height));
        page.extend(state::transition(&GraphicsState::default(), &self.state));
        log::debug!(
            "Starting page {} ({}x{}pt)",
            self.pages.len() + 1 + usize::from(self.active.is_some()),
            size.width,
            size.height
        );
        Ok(page)
    }

    /// Closes the active content stream (if any) and opens a page of `size`.
    fn start_page(&mut self, size: Size) -> Result<(), BuildError> {
        let page = self.fresh_page(size)?;
        if let Some(previous) = self.active.replace(page) {
            self.pages.push(previous.finish()?);
        }
        Ok(())
    }

    /// The active page, opening one of the default size if none exists yet.
    fn page(&mut self) -> Result<&mut PageContext, BuildError> {
        self.ensure_open()?;
        let page = match self.active.take() {
            Some(page) => page,
            None => self.fresh_page(self.default_page_size())?,
        };
        Ok(self.active.insert(page))
    }

    /// Appends a graphics-state operator to the active page. Without a page
    /// the state is applied when the first page opens.
    fn emit_state(&mut self, ops: Vec<Operation>) {
        if let Some(page) = self.active.as_mut() {
            page.end_text();
            page.extend(ops);
        }
    }

    fn font_dictionary(&self) -> Dictionary {
        dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => self.font.font.postscript_name(),
            "Encoding" => "WinAnsiEncoding",
        }
    }

    fn info_dictionary(&self) -> Dictionary {
        let mut info = dictionary! { "Producer" => Object::string_literal(PRODUCER) };
        let fields = [
            ("Title", &self.info.title),
            ("Author", &self.info.author),
            ("Subject", &self.info.subject),
            ("Creator", &self.info.creator),
        ];
        for (key, value) in fields {
            if let Some(value) = value {
                let encoded = encode_win_ansi(&filter_glyphs(value));
                info.set(key, Object::String(encoded, StringFormat::Literal));
            }
        }
        info
    }

    /// Builds the complete file in memory. The active page is flushed but
    /// stays open, so content may still be added afterwards.
    fn serialize(&mut self) -> Result<Vec<u8>, BuildError> {
        // A document always has at least one page.
        self.page()?;

        let mut writer = StreamingPdfWriter::new(Cursor::new(Vec::new()), PDF_VERSION)?;

        let mut xobjects = Dictionary::new();
        for (index, image) in self.images.iter().enumerate() {
            let image_id = image.write(&mut writer);
            xobjects.set(resource_name(IMAGE_RESOURCE_PREFIX, index + 1), image_id);
        }
        let mut resources = dictionary! {
            "Font" => dictionary! { FONT_RESOURCE => self.font_dictionary() },
        };
        if !xobjects.is_empty() {
            resources.set("XObject", xobjects);
        }
        writer.set_resources(resources);

        for page in &self.pages {
            let content_id = writer.buffer_content_stream(page.content.clone());
            writer.add_page(content_id, page.size);
        }
        if let Some(active) = &self.active {
            let content_id = writer.buffer_content_stream(active.encode()?);
            writer.add_page(content_id, active.size());
        }
        writer.set_info(self.info_dictionary());

        let page_count = writer.page_count();
        let bytes = writer.finish()?.into_inner();
        log::debug!("Serialized {} page(s), {} image(s), {} bytes", page_count, self.images.len(), bytes.len());
        Ok(bytes)
    }
}

impl DocumentBuilder for LopdfBuilder {
    fn backend_name(&self) -> &'static str {
        BACKEND_NAME
    }

    fn config(&self) -> &LayoutConfig {
        &self.config
    }

    fn new_page(&mut self) -> Result<(), BuildError> {
        self.ensure_open()?;
        self.start_page(self.default_page_size())
    }

    fn new_page_with_size(&mut self, width: f32, height: f32) -> Result<(), BuildError> {
        self.ensure_open()?;
        self.start_page(Size::new(width, height))
    }

    fn add_text(&mut self, text: &str, x: f32, y: f32) -> Result<(), BuildError> {
        self.ensure_open()?;
        if text.is_empty() {
            return Ok(());
        }
        let line = prepare_line(text, self.config.tab_width);
        let font_size = self.font.size;
        let page = self.page()?;
        page.begin_text(FONT_RESOURCE, font_size);
        page.show_text_at(&line, x, y);
        page.end_text();
        Ok(())
    }

    fn add_paragraph(&mut self, text: &str) -> Result<(), BuildError> {
        self.ensure_open()?;
        if text.is_empty() {
            return Ok(());
        }
        let LayoutConfig { margin, leading, tab_width, .. } = self.config;
        let font = self.font;

        let prepared = prepare_paragraph(text, tab_width);
        let page_width = self.page()?.size().width;
        let width = self.config.available_width(page_width);
        let lines = wrap_paragraph(&prepared, width, |s| font.measure(s));

        self.page()?.begin_text(FONT_RESOURCE, font.size);
        for line in &lines {
            let page = self.page()?;
            if !page.is_fresh() && !line_fits(page.cursor_y(), margin) {
                self.page()?.end_text();
                self.start_page(self.default_page_size())?;
                self.page()?.begin_text(FONT_RESOURCE, font.size);
            }
            let page = self.page()?;
            if !line.is_empty() {
                let baseline = page.cursor_y();
                page.show_text_at(line, margin, baseline);
            }
            page.advance(leading);
        }
        self.page()?.end_text();
        log::trace!("Paragraph laid out in {} line(s)", lines.len());
        Ok(())
    }

    fn add_table(&mut self, rows: &[Vec<String>]) -> Result<(), BuildError> {
        self.ensure_open()?;
        let columns = rows.iter().map(Vec::len).max().unwrap_or(0);
        if columns == 0 {
            return Ok(());
        }
        let LayoutConfig { margin, leading, cell_height, cell_padding, tab_width, .. } = self.config;
        let font = self.font;

        let page_width = self.page()?.size().width;
        let cell_width = column_width(self.config.available_width(page_width), columns);
        let text_width = (cell_width - 2.0 * cell_padding).max(0.0);
        let baseline_offset = (cell_height - font.size) / 2.0 + font.size * CELL_BASELINE_RATIO;

        for row in rows {
            let page = self.page()?;
            if !page.is_fresh() && !fits_above(page.cursor_y(), cell_height, margin) {
                self.start_page(self.default_page_size())?;
            }

            let page = self.page()?;
            let bottom = page.cursor_y() - cell_height;
            for column in 0..columns {
                let x = margin + column as f32 * cell_width;
                page.rect(Rect::new(x, bottom, cell_width, cell_height), Paint::Stroke);
            }
            for (column, cell) in row.iter().enumerate() {
                let text = prepare_line(cell, tab_width);
                if text.is_empty() {
                    continue;
                }
                let fitted = truncate_to_width(&text, text_width, |s| font.measure(s));
                let x = margin + column as f32 * cell_width + cell_padding;
                page.begin_text(FONT_RESOURCE, font.size);
                page.show_text_at(&fitted, x, bottom + baseline_offset);
            }
            page.end_text();
            page.advance(cell_height);
        }
        self.page()?.advance(leading);
        Ok(())
    }

    fn add_image(&mut self, data: &[u8]) -> Result<(), BuildError> {
        self.ensure_open()?;
        if data.is_empty() {
            return Ok(());
        }
        let image = ImageXObject::decode(data)?;
        let LayoutConfig { margin, leading, .. } = self.config;

        // Scaled against the whole page, never enlarged.
        let page_size = self.page()?.size();
        let placed = fit_size(image.natural_size(), page_size);

        let page = self.page()?;
        if !page.is_fresh() && !fits_above(page.cursor_y(), placed.height, margin) {
            self.start_page(self.default_page_size())?;
        }

        self.images.push(image);
        let resource = resource_name(IMAGE_RESOURCE_PREFIX, self.images.len());
        let page = self.page()?;
        let rect = Rect::new(margin, page.cursor_y() - placed.height, placed.width, placed.height);
        page.end_text();
        page.place_image(&resource, rect);
        page.advance(placed.height + leading);
        log::debug!("Placed image {} at {}x{}pt", resource, placed.width, placed.height);
        Ok(())
    }

    fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) -> Result<(), BuildError> {
        let page = self.page()?;
        page.end_text();
        page.line(x1, y1, x2, y2);
        Ok(())
    }

    fn draw_rectangle(&mut self, x: f32, y: f32, width: f32, height: f32) -> Result<(), BuildError> {
        let page = self.page()?;
        page.end_text();
        page.rect(Rect::new(x, y, width, height), Paint::Stroke);
        Ok(())
    }

    fn fill_rectangle(&mut self, x: f32, y: f32, width: f32, height: f32) -> Result<(), BuildError> {
        let page = self.page()?;
        page.end_text();
        page.rect(Rect::new(x, y, width, height), Paint::Fill);
        Ok(())
    }

    fn draw_circle(&mut self, cx: f32, cy: f32, radius: f32) -> Result<(), BuildError> {
        let page = self.page()?;
        page.end_text();
        page.path(&path::circle(cx, cy, radius), Paint::Stroke);
        Ok(())
    }

    fn draw_ellipse(&mut self, cx: f32, cy: f32, rx: f32, ry: f32) -> Result<(), BuildError> {
        let page = self.page()?;
        page.end_text();
        page.path(&path::ellipse(cx, cy, rx, ry), Paint::Stroke);
        Ok(())
    }

    fn draw_arc(
        &mut self,
        cx: f32,
        cy: f32,
        radius: f32,
        start_degrees: f32,
        sweep_degrees: f32,
    ) -> Result<(), BuildError> {
        let page = self.page()?;
        page.end_text();
        for (from, to) in path::arc_segments(cx, cy, radius, start_degrees, sweep_degrees) {
            page.line(from.x, from.y, to.x, to.y);
        }
        Ok(())
    }

    fn draw_polygon(&mut self, points: &[Point]) -> Result<(), BuildError> {
        let page = self.page()?;
        page.end_text();
        page.path(&path::polygon(points), Paint::Stroke);
        Ok(())
    }

    fn set_stroke_color(&mut self, r: u8, g: u8, b: u8) -> Result<(), BuildError> {
        self.ensure_open()?;
        self.state.stroke_color = Color::rgb(r, g, b);
        self.emit_state(vec![state::stroke_color_op(&self.state.stroke_color)]);
        Ok(())
    }

    fn set_fill_color(&mut self, r: u8, g: u8, b: u8) -> Result<(), BuildError> {
        self.ensure_open()?;
        self.state.fill_color = Color::rgb(r, g, b);
        self.emit_state(vec![state::fill_color_op(&self.state.fill_color)]);
        Ok(())
    }

    fn set_line_width(&mut self, width: f32) -> Result<(), BuildError> {
        self.ensure_open()?;
        self.state.line_width = width;
        self.emit_state(vec![state::line_width_op(width)]);
        Ok(())
    }

    fn set_line_dash(&mut self, pattern: &[f32], phase: f32) -> Result<(), BuildError> {
        self.ensure_open()?;
        self.state.dash = LineDash::new(pattern, phase);
        self.emit_state(vec![state::dash_op(&self.state.dash)]);
        Ok(())
    }

    fn reset_line_dash(&mut self) -> Result<(), BuildError> {
        self.ensure_open()?;
        self.state.dash = LineDash::solid();
        self.emit_state(vec![state::dash_op(&self.state.dash)]);
        Ok(())
    }

    fn save_state(&mut self) -> Result<(), BuildError> {
        self.ensure_open()?;
        self.saved_states.push(self.state.clone());
        Ok(())
    }

    fn restore_state(&mut self) -> Result<(), BuildError> {
        self.ensure_open()?;
        match self.saved_states.pop() {
            Some(saved) => {
                let ops = state::transition(&self.state, &saved);
                self.state = saved;
                self.emit_state(ops);
            }
            None => log::warn!("restore_state called without a matching save_state; ignoring"),
        }
        Ok(())
    }

    fn save(&mut self, path: &Path) -> Result<(), BuildError> {
        self.ensure_open()?;
        let bytes = self.serialize()?;
        std::fs::write(path, &bytes).map_err(|source| BuildError::Save {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("Saved PDF to {}", path.display());
        Ok(())
    }

    fn write_to(&mut self, sink: &mut dyn Write) -> Result<(), BuildError> {
        self.ensure_open()?;
        let bytes = self.serialize()?;
        sink.write_all(&bytes)?;
        sink.flush()?;
        Ok(())
    }

    fn to_bytes(&mut self) -> Result<Vec<u8>, BuildError> {
        self.ensure_open()?;
        self.serialize()
    }

    fn close(&mut self) {
        if self.closed {
            return;
        }
        self.active = None;
        self.pages = Vec::new();
        self.images = Vec::new();
        self.saved_states = Vec::new();
        self.closed = true;
        log::debug!("Document builder closed");
    }

    fn page_count(&self) -> usize {
        self.pages.len() + usize::from(self.active.is_some())
    }

    fn cursor_y(&self) -> Option<f32> {
        self.active.as_ref().map(PageContext::cursor_y)
    }

    fn graphics_state(&self) -> &GraphicsState {
        &self.state
    }

    fn is_closed(&self) -> bool {
        self.closed
    }
}
