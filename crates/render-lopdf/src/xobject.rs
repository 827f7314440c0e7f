//! Decoding raw image bytes into PDF image XObjects.

use image::{ColorType, DynamicImage, ImageFormat};
use lopdf::{dictionary, Dictionary, Object, ObjectId, Stream};
use pdfsmith_render_core::BuildError;
use pdfsmith_types::Size;
use std::io::{Seek, Write};

use crate::writer::StreamingPdfWriter;

/// A decoded image ready to be written as an `/Image` XObject.
#[derive(Debug, Clone)]
pub(crate) struct ImageXObject {
    width: u32,
    height: u32,
    stream: Stream,
    soft_mask: Option<Stream>,
}

impl ImageXObject {
    /// Decodes `data`, detecting the format from its signature.
    ///
    /// JPEG data is embedded as-is with `DCTDecode`; everything else is
    /// converted to 8-bit RGB (plus a soft mask when any pixel is translucent)
    /// and Flate-compressed.
    pub fn decode(data: &[u8]) -> Result<Self, BuildError> {
        let format = image::guess_format(data).map_err(|e| BuildError::ImageDecode(Box::new(e)))?;
        let decoded = image::load_from_memory_with_format(data, format)
            .map_err(|e| BuildError::ImageDecode(Box::new(e)))?;
        let (width, height) = (decoded.width(), decoded.height());

        if format == ImageFormat::Jpeg {
            if let Some(color_space) = jpeg_color_space(decoded.color()) {
                log::debug!("Embedding {}x{} JPEG without re-encoding", width, height);
                let dict = image_dict(width, height, color_space, Some("DCTDecode"));
                return Ok(Self {
                    width,
                    height,
                    stream: Stream::new(dict, data.to_vec()),
                    soft_mask: None,
                });
            }
        }

        Self::from_pixels(&decoded)
    }

    fn from_pixels(decoded: &DynamicImage) -> Result<Self, BuildError> {
        let rgba = decoded.to_rgba8();
        let (width, height) = (rgba.width(), rgba.height());
        let has_alpha = rgba.pixels().any(|p| p.0[3] < 255);

        let rgb: Vec<u8> = rgba.pixels().flat_map(|p| [p.0[0], p.0[1], p.0[2]]).collect();
        let mut stream = Stream::new(image_dict(width, height, "DeviceRGB", None), rgb);
        stream.compress()?;

        let soft_mask = if has_alpha {
            let alpha: Vec<u8> = rgba.pixels().map(|p| p.0[3]).collect();
            let mut mask = Stream::new(image_dict(width, height, "DeviceGray", None), alpha);
            mask.compress()?;
            Some(mask)
        } else {
            None
        };

        Ok(Self {
            width,
            height,
            stream,
            soft_mask,
        })
    }

    /// Natural size at 72 dpi: one pixel per point.
    pub fn natural_size(&self) -> Size {
        Size::new(self.width as f32, self.height as f32)
    }

    pub fn write<W: Write + Seek>(&self, writer: &mut StreamingPdfWriter<W>) -> ObjectId {
        let mut stream = self.stream.clone();
        if let Some(mask) = &self.soft_mask {
            let mask_id = writer.buffer_object(Object::Stream(mask.clone()));
            stream.dict.set("SMask", mask_id);
        }
        writer.buffer_object(Object::Stream(stream))
    }
}

fn jpeg_color_space(color: ColorType) -> Option<&'static str> {
    match color {
        ColorType::L8 => Some("DeviceGray"),
        ColorType::Rgb8 => Some("DeviceRGB"),
        _ => None,
    }
}

fn image_dict(width: u32, height: u32, color_space: &str, filter: Option<&str>) -> Dictionary {
    let mut dict = dictionary! {
        "Type" => "XObject",
        "Subtype" => "Image",
        "Width" => width as i64,
        "Height" => height as i64,
        "ColorSpace" => Object::Name(color_space.as_bytes().to_vec()),
        "BitsPerComponent" => 8,
    };
    if let Some(filter) = filter {
        dict.set("Filter", Object::Name(filter.as_bytes().to_vec()));
    }
    dict
}
