use image::{DynamicImage, ImageBuffer, ImageFormat, Rgb, Rgba};
use std::io::Cursor;

/// A solid PNG of the given size; `alpha < 255` makes it translucent
pub fn png(width: u32, height: u32, alpha: u8) -> Vec<u8> {
    let buffer: ImageBuffer<Rgba<u8>, Vec<u8>> =
        ImageBuffer::from_pixel(width, height, Rgba([20, 120, 220, alpha]));
    encode(DynamicImage::ImageRgba8(buffer), ImageFormat::Png)
}

/// A solid baseline JPEG of the given size
pub fn jpeg(width: u32, height: u32) -> Vec<u8> {
    let buffer: ImageBuffer<Rgb<u8>, Vec<u8>> = ImageBuffer::from_pixel(width, height, Rgb([240, 200, 10]));
    encode(DynamicImage::ImageRgb8(buffer), ImageFormat::Jpeg)
}

fn encode(image: DynamicImage, format: ImageFormat) -> Vec<u8> {
    let mut out = Cursor::new(Vec::new());
    image.write_to(&mut out, format).expect("fixture image should encode");
    out.into_inner()
}

/// `count` short lines joined by newlines: "line 1\nline 2\n..."
pub fn numbered_lines(count: usize) -> String {
    (1..=count).map(|i| format!("line {i}")).collect::<Vec<_>>().join("\n")
}

/// A table of `rows` x `columns` cells labelled "r{row}c{column}"
pub fn grid(rows: usize, columns: usize) -> Vec<Vec<String>> {
    (0..rows)
        .map(|r| (0..columns).map(|c| format!("r{r}c{c}")).collect())
        .collect()
}
