mod io;


use std::path::Path;

use crate::common::{ColorFormat, Error, Result};

/// Supported image file extensions for reading and writing.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp", "gif"];

#[derive(Clone, Copy, Eq, PartialEq, Debug, Hash)]
pub struct ImageDesc {
    pub width: u32,
    pub height: u32,
    pub color_format: ColorFormat,
}

/// A decoded raster image with tightly packed 8-bit channels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Image {
    desc: ImageDesc,
    bytes: Vec<u8>,
}

impl Image {
    /// Returns the image descriptor.
    pub fn desc(&self) -> &ImageDesc {
        &self.desc
    }

    /// Returns `(width, height)`.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.desc.width, self.desc.height)
    }

    /// Returns the image bytes as a slice.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Returns the image bytes as a mutable slice.
    pub fn bytes_mut(&mut self) -> &mut [u8] {
        &mut self.bytes
    }

    /// Creates an image filled with black (opaque for alpha formats).
    pub fn new_black(desc: ImageDesc) -> Result<Image> {
        let black = desc.color_format.black();
        Image::new_filled(desc, black)
    }

    /// Creates an image with every pixel set to `pixel`.
    pub fn new_filled(desc: ImageDesc, pixel: &[u8]) -> Result<Image> {
        desc.validate()?;

        if pixel.len() != desc.color_format.byte_count() as usize {
            return Err(Error::InvalidParameter(format!(
                "pixel has {} channels, {} expects {}",
                pixel.len(),
                desc.color_format,
                desc.color_format.channel_count()
            )));
        }

        let bytes = pixel.repeat(desc.pixel_count());

        Ok(Image { desc, bytes })
    }

    pub fn new_with_data(desc: ImageDesc, bytes: Vec<u8>) -> Result<Image> {
        desc.validate()?;

        if bytes.len() != desc.size_in_bytes() {
            return Err(Error::InvalidParameter(format!(
                "bytes length {} does not match expected size {}",
                bytes.len(),
                desc.size_in_bytes()
            )));
        }

        Ok(Image { desc, bytes })
    }

    /// Decodes an image file. The extension must be one of [`SUPPORTED_EXTENSIONS`];
    /// the actual decoder is chosen from the file contents.
    pub fn read_file<P: AsRef<Path>>(filename: P) -> Result<Image> {
        io::load(filename)
    }

    /// Encodes the image in the format implied by the file extension.
    pub fn save_file<P: AsRef<Path>>(&self, filename: P) -> Result<()> {
        io::save(self, filename)
    }

    pub fn convert(self, color_format: ColorFormat) -> Result<Image> {
        if self.desc.color_format == color_format {
            return Ok(self);
        }

        let dynamic = io::to_dynamic(&self)?;

        io::from_dynamic_as(dynamic, color_format)
    }

    pub fn bytes_per_pixel(&self) -> u8 {
        self.desc.color_format.byte_count()
    }

    /// Returns the channels of the pixel at `(x, y)`.
    ///
    /// # Panics
    /// Panics if the coordinates are outside the image.
    pub fn pixel(&self, x: u32, y: u32) -> &[u8] {
        let offset = self.desc.pixel_offset(x, y);
        &self.bytes[offset..offset + self.bytes_per_pixel() as usize]
    }

    /// # Panics
    /// Panics if the coordinates are outside the image.
    pub fn pixel_mut(&mut self, x: u32, y: u32) -> &mut [u8] {
        let offset = self.desc.pixel_offset(x, y);
        let bpp = self.bytes_per_pixel() as usize;
        &mut self.bytes[offset..offset + bpp]
    }

    /// Returns the packed bytes of row `y`.
    pub fn row(&self, y: u32) -> &[u8] {
        let row_bytes = self.desc.row_bytes();
        let start = y as usize * row_bytes;
        &self.bytes[start..start + row_bytes]
    }
}

impl ImageDesc {
    pub fn new(width: u32, height: u32, color_format: ColorFormat) -> Self {
        Self {
            width,
            height,
            color_format,
        }
    }

    /// Fails for images without pixels.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::EmptyImage {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn size_in_bytes(&self) -> usize {
        self.height as usize * self.row_bytes()
    }

    /// Returns the number of bytes per row.
    pub fn row_bytes(&self) -> usize {
        self.width as usize * self.color_format.byte_count() as usize
    }

    fn pixel_offset(&self, x: u32, y: u32) -> usize {
        assert!(
            x < self.width && y < self.height,
            "pixel ({}, {}) outside {}x{} image",
            x,
            y,
            self.width,
            self.height
        );
        y as usize * self.row_bytes() + x as usize * self.color_format.byte_count() as usize
    }
}

impl std::fmt::Display for ImageDesc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{} {}", self.width, self.height, self.color_format)
    }
}
