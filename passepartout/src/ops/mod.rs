mod add_border;
mod uniform_border;

pub use add_border::AddBorder;
pub use uniform_border::{BorderSamples, UniformBorder};

use crate::common::{Error, Result};

/// Pixel width of a band that is `percentage` of the shorter image side, rounded down.
///
/// Non-finite or negative products give 0.
pub fn border_size(width: u32, height: u32, percentage: f64) -> u32 {
    let size = (width.min(height) as f64 * percentage).floor();

    if size.is_finite() && size > 0.0 {
        size as u32
    } else {
        0
    }
}

pub(crate) fn validate_non_negative(name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(Error::InvalidParameter(format!(
            "{} must be a finite non-negative number, got {}",
            name, value
        )));
    }
    Ok(())
}
