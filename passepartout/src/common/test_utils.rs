use crate::prelude::*;

pub const WHITE_RGB: &[u8] = &[255, 255, 255];
pub const BLACK_RGB: &[u8] = &[0, 0, 0];

/// Creates a `width`x`height` image with every pixel set to `pixel`.
pub fn solid(width: u32, height: u32, color_format: ColorFormat, pixel: &[u8]) -> Image {
    Image::new_filled(ImageDesc::new(width, height, color_format), pixel).unwrap()
}

/// Creates an RGB image whose pixels encode their coordinates, so every pixel differs
/// from its neighbours and the four corners are far apart in color.
pub fn gradient_rgb(width: u32, height: u32) -> Image {
    let mut image = solid(width, height, ColorFormat::RGB8, BLACK_RGB);
    for y in 0..height {
        for x in 0..width {
            let r = (x * 255 / (width - 1).max(1)) as u8;
            let g = (y * 255 / (height - 1).max(1)) as u8;
            let b = ((x + y) % 256) as u8;
            image.pixel_mut(x, y).copy_from_slice(&[r, g, b]);
        }
    }
    image
}

/// Paints a `thickness` pixel wide frame of `pixel` along the image edges.
pub fn draw_frame(image: &mut Image, thickness: u32, pixel: &[u8]) {
    let (width, height) = image.dimensions();
    for y in 0..height {
        for x in 0..width {
            let on_frame = x < thickness
                || y < thickness
                || x >= width.saturating_sub(thickness)
                || y >= height.saturating_sub(thickness);
            if on_frame {
                image.pixel_mut(x, y).copy_from_slice(pixel);
            }
        }
    }
}
