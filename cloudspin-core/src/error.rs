//! Error types for cloudspin

use thiserror::Error;

/// Main error type for cloudspin operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Point cloud is empty")]
    EmptyCloud,

    #[error("Invalid axis: {0}")]
    InvalidAxis(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Render error: {0}")]
    Render(String),
}

impl Error {
    /// Build a parse error for a 1-based line number
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Error::Parse {
            line,
            message: message.into(),
        }
    }
}

/// Result type alias for cloudspin operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        let err = Error::parse(3, "expected 3 fields, found 2");
        assert_eq!(
            err.to_string(),
            "Parse error on line 3: expected 3 fields, found 2"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
