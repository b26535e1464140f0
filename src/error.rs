use thiserror::Error;

#[derive(Error, Debug)]
pub enum ThemeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed settings record: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Convenience type alias for Results with ThemeError
pub type Result<T> = std::result::Result<T, ThemeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only store");
        let err: ThemeError = io_err.into();
        assert!(matches!(err, ThemeError::Io(_)));
        assert!(err.to_string().contains("read-only store"));
    }

    #[test]
    fn test_malformed_error_display() {
        let json_err = serde_json::from_str::<bool>("{").unwrap_err();
        let err: ThemeError = json_err.into();
        assert!(err.to_string().starts_with("malformed settings record"));
    }
}
