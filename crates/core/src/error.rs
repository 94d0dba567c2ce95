//! Error types for MRELBP

use thiserror::Error;

/// Main error type for descriptor computation
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A filter or convolution kernel has an even width
    #[error("Kernel width is not odd!")]
    KernelWidth { width: usize },

    /// Kernel radius exceeds one of the image dimensions
    #[error("Kernel radius is larger than input array!")]
    KernelTooLarge {
        radius: usize,
        rows: usize,
        cols: usize,
    },

    /// Scaling by a zero standard deviation
    #[error("Degenerate input: standard deviation is zero")]
    DegenerateInput,

    #[error("Unsupported padding policy: {0:?}")]
    UnsupportedPolicy(String),

    #[error("Invalid image dimensions: {rows}x{cols}")]
    InvalidDimensions { rows: usize, cols: usize },

    #[error("Index out of bounds: ({row}, {col}) in image of size ({rows}, {cols})")]
    IndexOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("Unsupported data type: {0}")]
    UnsupportedDataType(String),

    #[error("Invalid parameter: {name} = {value} ({reason})")]
    InvalidParameter {
        name: &'static str,
        value: String,
        reason: String,
    },

    #[error("Algorithm error: {0}")]
    Algorithm(String),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for MRELBP operations
pub type Result<T> = std::result::Result<T, Error>;
