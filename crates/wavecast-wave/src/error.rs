//! Error types for WAVE serialization.

use thiserror::Error;

/// Result type for WAVE serialization operations.
pub type WaveResult<T> = Result<T, WaveError>;

/// Errors that can occur while assembling or writing a WAVE file.
#[derive(Debug, Error)]
pub enum WaveError {
    /// Channel count of zero.
    #[error("invalid channel count: {channels}")]
    InvalidChannelCount {
        /// The rejected channel count.
        channels: u16,
    },

    /// Sample rate of zero.
    #[error("invalid sample rate: {rate}")]
    InvalidSampleRate {
        /// The rejected sample rate.
        rate: u32,
    },

    /// I/O error opening or writing the destination.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_value() {
        let err = WaveError::InvalidChannelCount { channels: 0 };
        assert!(err.to_string().contains("channel count: 0"));

        let err = WaveError::InvalidSampleRate { rate: 0 };
        assert!(err.to_string().contains("sample rate: 0"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = WaveError::from(io);
        assert!(matches!(err, WaveError::Io(_)));
    }
}
