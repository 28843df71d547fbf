// Color formats
pub use crate::common::{ALL_FORMATS, ALPHA_FORMATS, ColorFormat};

// Error handling
pub use crate::common::{Error, Result};

// Image types
pub use crate::image::{Image, ImageDesc, SUPPORTED_EXTENSIONS};

// Operations
pub use crate::ops::{AddBorder, BorderSamples, UniformBorder, border_size};

// Statistics
pub use crate::statistics::{interquartile_range, linspace_indices, percentile};
