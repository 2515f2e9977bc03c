//! Error types shared across MediaPress crates.

/// Top-level error type for MediaPress operations.
#[derive(Debug, thiserror::Error)]
pub enum MediapressError {
    #[error("Unknown output quality option: {input}.")]
    UnknownQuality { input: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result type alias using MediapressError.
pub type MediapressResult<T> = Result<T, MediapressError>;

impl MediapressError {
    pub fn unknown_quality(input: impl Into<String>) -> Self {
        Self::UnknownQuality {
            input: input.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_quality_message() {
        let err = MediapressError::unknown_quality("ultra");
        assert_eq!(err.to_string(), "Unknown output quality option: ultra.");
    }

    #[test]
    fn test_io_error_is_transparent() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = MediapressError::from(io);
        assert_eq!(err.to_string(), "gone");
    }

    #[test]
    fn test_json_error_is_transparent() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let message = json_err.to_string();
        let err = MediapressError::from(json_err);
        assert_eq!(err.to_string(), message);
    }
}
