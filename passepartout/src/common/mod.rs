pub(crate) mod color_format;
pub(crate) mod error;
#[cfg(test)]
pub(crate) mod test_utils;

// Public API
pub use color_format::{ALL_FORMATS, ALPHA_FORMATS, ColorFormat};
pub use error::{Error, Result};
