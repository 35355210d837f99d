use std::io::Cursor;

use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use websafe_palette::{reference_table, Color};

/// Encodes `image` as an in-memory PNG.
pub fn png_bytes(image: RgbaImage) -> Vec<u8> {
    let mut buf = Vec::new();
    DynamicImage::ImageRgba8(image)
        .write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
        .unwrap();
    buf
}

pub fn solid(width: u32, height: u32, rgba: [u8; 4]) -> RgbaImage {
    RgbaImage::from_pixel(width, height, Rgba(rgba))
}

pub fn opaque(color: Color) -> Rgba<u8> {
    let (r, g, b) = color.to_rgb();
    Rgba([r, g, b, 255])
}

/// Sixteen distinct grid colors, in reference table order.
pub fn sixteen_reference_colors() -> Vec<Color> {
    reference_table().iter().step_by(13).take(16).copied().collect()
}

/// A 4x4 image whose pixels are [`sixteen_reference_colors`], row-major.
pub fn sixteen_color_tile() -> RgbaImage {
    let colors = sixteen_reference_colors();
    RgbaImage::from_fn(4, 4, |x, y| opaque(colors[(y * 4 + x) as usize]))
}
