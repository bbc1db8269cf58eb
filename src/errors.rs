//! Custom error types for dataset preparation

use std::fmt;
use std::io;

/// Dataset-preparation error types
#[derive(Debug)]
pub enum DatasetError {
    /// I/O error
    IoError(io::Error),
    /// Image decode/encode error
    ImageError(image::ImageError),
    /// Image and mask have different dimensions
    DimensionMismatch {
        /// (width, height) of the image
        image: (u32, u32),
        /// (width, height) of the mask
        mask: (u32, u32),
    },
    /// Tile size or rule set cannot be used for extraction
    InvalidConfiguration(String),
    /// Configuration file could not be parsed
    ConfigParse(String),
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for DatasetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetError::IoError(e) => write!(f, "I/O error: {}", e),
            DatasetError::ImageError(e) => write!(f, "Image error: {}", e),
            DatasetError::DimensionMismatch { image, mask } => write!(
                f,
                "Dimension mismatch: image is {}x{}, mask is {}x{}",
                image.0, image.1, mask.0, mask.1
            ),
            DatasetError::InvalidConfiguration(msg) => write!(f, "Invalid configuration: {}", msg),
            DatasetError::ConfigParse(msg) => write!(f, "Config parse error: {}", msg),
            DatasetError::GenericError(msg) => write!(f, "Dataset error: {}", msg),
        }
    }
}

impl std::error::Error for DatasetError {}

impl From<io::Error> for DatasetError {
    fn from(error: io::Error) -> Self {
        DatasetError::IoError(error)
    }
}

impl From<image::ImageError> for DatasetError {
    fn from(error: image::ImageError) -> Self {
        DatasetError::ImageError(error)
    }
}

impl From<String> for DatasetError {
    fn from(msg: String) -> Self {
        DatasetError::GenericError(msg)
    }
}

/// Result type for dataset operations
pub type DatasetResult<T> = Result<T, DatasetError>;
