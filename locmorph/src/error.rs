//! All error types for the locmorph crate.
//!
//! These are returned from all fallible operations (reading input files,
//! writing output files, running transformers, orchestrating a batch).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("transform error: {message}")]
    Transform {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl Error {
    /// Creates a new transform error with optional source error
    pub fn transform_error(
        message: impl Into<String>,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Error::Transform {
            message: message.into(),
            source,
        }
    }

    /// Creates a new invalid-input error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Error::InvalidInput(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_io_error() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = Error::Io(io_error);
        assert!(error.to_string().contains("I/O error"));
    }

    #[test]
    fn test_invalid_input_error() {
        let error = Error::invalid_input("input folder missing");
        assert_eq!(error.to_string(), "invalid input: input folder missing");
    }

    #[test]
    fn test_serialize_error() {
        let json_error = serde_json::from_str::<serde_json::Value>("{ invalid json }").unwrap_err();
        let error = Error::Serialize(json_error);
        assert!(error.to_string().contains("serialization error"));
    }

    #[test]
    fn test_transform_error_with_source() {
        let source_error = Box::new(io::Error::new(io::ErrorKind::TimedOut, "timed out"));
        let error = Error::transform_error("service call failed", Some(source_error));
        assert!(
            error
                .to_string()
                .contains("transform error: service call failed")
        );
    }

    #[test]
    fn test_transform_error_without_source() {
        let error = Error::transform_error("empty reply", None);
        assert!(error.to_string().contains("transform error: empty reply"));
    }

    #[test]
    fn test_error_debug() {
        let error = Error::invalid_input("test");
        let debug = format!("{:?}", error);
        assert!(debug.contains("InvalidInput"));
        assert!(debug.contains("test"));
    }
}
