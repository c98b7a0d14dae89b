//! Error types for pixelscene operations.

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in pixelscene operations.
///
/// Drawing itself never fails: out-of-bounds writes and degenerate geometry
/// are tolerated silently. Errors only come from construction-time
/// validation and from exporting frames.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error (file operations, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// PNG encoding error.
    #[error("PNG encoding error: {0}")]
    PngEncoding(#[from] png::EncodingError),

    /// Invalid dimensions for a framebuffer or scene.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// Timeline thresholds are not finite and strictly increasing from zero.
    #[error(
        "Invalid timeline: expected 0 < {street_end} < {fade_end} < {loop_end} (seconds)"
    )]
    InvalidTimeline {
        /// End of the street phase.
        street_end: f64,
        /// End of the fade phase.
        fade_end: f64,
        /// Loop length.
        loop_end: f64,
    },

    /// Film grain strength must be at least 1.
    #[error("Invalid grain strength: {0} (must be >= 1)")]
    InvalidGrainStrength(u32),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidDimensions {
            width: 0,
            height: 100,
        };
        assert!(err.to_string().contains("Invalid dimensions"));
    }

    #[test]
    fn test_invalid_timeline_display() {
        let err = Error::InvalidTimeline {
            street_end: 3.0,
            fade_end: 2.0,
            loop_end: 8.0,
        };
        let msg = err.to_string();
        assert!(msg.contains("3"));
        assert!(msg.contains("8"));
    }

    #[test]
    fn test_io_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "missing");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
