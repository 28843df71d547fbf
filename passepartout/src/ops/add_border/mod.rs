
use crate::common::{Error, Result};
use crate::image::{Image, ImageDesc};
use crate::ops::{border_size, validate_non_negative};

/// Solid black border around an image.
///
/// The border is `border_percentage` of the shorter image side wide on every edge.
/// Color channels of the band are 0; alpha, when present, is fully opaque.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AddBorder {
    /// Border width as a fraction of the shorter image side.
    pub border_percentage: f64,
}

impl Default for AddBorder {
    fn default() -> Self {
        Self {
            border_percentage: 0.002,
        }
    }
}

impl AddBorder {
    pub fn new(border_percentage: f64) -> Self {
        Self { border_percentage }
    }

    /// Builder method to set the border width.
    pub fn border_percentage(mut self, border_percentage: f64) -> Self {
        self.border_percentage = border_percentage;
        self
    }

    pub fn validate(&self) -> Result<()> {
        validate_non_negative("border percentage", self.border_percentage)
    }

    /// Border width in pixels for `image`.
    pub fn border_size(&self, image: &Image) -> u32 {
        let (width, height) = image.dimensions();
        border_size(width, height, self.border_percentage)
    }

    /// Returns a new image with the border composited around `input`.
    ///
    /// A zero border size returns a copy of the input.
    ///
    /// # Errors
    /// Returns an error if the bordered dimensions do not fit in `u32`.
    pub fn apply(&self, input: &Image) -> Result<Image> {
        let border = self.border_size(input);
        if border == 0 {
            return Ok(input.clone());
        }

        let (width, height) = input.dimensions();
        let grow = |side: u32| {
            border
                .checked_mul(2)
                .and_then(|band| side.checked_add(band))
                .ok_or_else(|| {
                    Error::InvalidParameter(format!(
                        "border of {} px overflows image side {}",
                        border, side
                    ))
                })
        };

        let desc = ImageDesc::new(grow(width)?, grow(height)?, input.desc().color_format);
        let mut output = Image::new_black(desc)?;

        let bpp = input.bytes_per_pixel() as usize;
        let src_row_bytes = input.desc().row_bytes();
        let dst_row_bytes = desc.row_bytes();
        let x_offset = border as usize * bpp;

        for y in 0..height {
            let dst_start = (y + border) as usize * dst_row_bytes + x_offset;
            output.bytes_mut()[dst_start..dst_start + src_row_bytes].copy_from_slice(input.row(y));
        }

        Ok(output)
    }
}
