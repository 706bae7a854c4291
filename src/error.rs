//! Error types for texture allocation, configuration and export.

use std::path::PathBuf;

/// Main error type for the crate.
#[derive(Debug, thiserror::Error)]
pub enum RippleError {
    /// The host could not allocate (or grow) a pixel buffer.
    #[error("failed to allocate a {width}x{height} pixel buffer")]
    Allocation { width: u32, height: u32 },

    /// A bulk pixel write did not cover the buffer exactly.
    #[error("pixel count mismatch: expected {expected}, got {actual}")]
    PixelCountMismatch { expected: usize, actual: usize },

    /// Configuration file could not be parsed.
    #[error("invalid config {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// PNG encoding or writing failed.
    #[error("image export failed: {0}")]
    Image(#[from] image::ImageError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results with RippleError.
pub type RippleResult<T> = Result<T, RippleError>;

impl RippleError {
    pub fn allocation(width: u32, height: u32) -> Self {
        Self::Allocation { width, height }
    }

    /// Whether the error means the host ran out of memory.
    pub fn is_resource_exhausted(&self) -> bool {
        matches!(self, Self::Allocation { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allocation_message_names_dimensions() {
        let err = RippleError::allocation(64, 32);
        assert_eq!(err.to_string(), "failed to allocate a 64x32 pixel buffer");
        assert!(err.is_resource_exhausted());
    }

    #[test]
    fn io_errors_convert() {
        let err: RippleError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert!(matches!(err, RippleError::Io(_)));
        assert!(!err.is_resource_exhausted());
    }
}
