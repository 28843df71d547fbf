use std::io;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Invalid file extension: {0}")]
    InvalidExtension(String),
    #[error("Unsupported color type: {0}")]
    UnsupportedColorType(String),
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
    #[error("Image has no pixels: {width}x{height}")]
    EmptyImage { width: u32, height: u32 },
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
    #[error("Encoding error: {0}")]
    Encoding(String),
}

impl From<image::ImageError> for Error {
    fn from(e: image::ImageError) -> Self {
        match e {
            image::ImageError::IoError(e) => Error::Io(e),
            image::ImageError::Unsupported(e) => Error::UnsupportedFormat(e.to_string()),
            e => Error::Encoding(e.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
