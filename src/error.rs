use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while opening an image or building a palette.
#[derive(Error, Debug)]
pub enum Error {
    /// The image format has no decoding path.
    #[error("Unsupported image format: {0}")]
    UnsupportedFormat(String),
    /// No image decoding library was compiled in.
    #[error("No image decoding backend available (enable the `decode` feature)")]
    NoDecodingBackendAvailable,
    /// An explicitly requested backend is not implemented.
    #[error("Unsupported backend: {0}")]
    UnsupportedBackend(String),
    /// The image file could not be read.
    #[error("Could not read image {path:?}: {source}")]
    Io {
        /// Path that failed to open
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },
    /// The image data is malformed.
    #[cfg(feature = "decode")]
    #[error("Could not decode image: {0}")]
    Decode(#[source] image::ImageError),
    /// The sampling stride must be at least 1.
    #[error("Invalid precision {0}: must be at least 1")]
    InvalidPrecision(u32),
    /// A color string could not be parsed.
    #[error("Invalid color {0:?}: expected #rgb or #rrggbb")]
    InvalidColor(String),
    /// A raw pixel buffer does not match its dimensions.
    #[error("Invalid pixel buffer: expected {expected} bytes for the given dimensions, got {actual}")]
    InvalidBufferLength {
        /// Bytes required by `width * height * 4`
        expected: usize,
        /// Bytes supplied
        actual: usize,
    },
    /// JSON serialization failed.
    #[error("Could not serialize palette: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
