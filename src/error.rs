//! Error types for descriptor loading, literal narrowing and example validation.

use std::path::PathBuf;
use thiserror::Error;

/// A string fell outside one of the closed literal sets.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LiteralError {
    #[error("unrecognized format literal \"{value}\": expected int32, int64, float, double, byte, binary, date, date-time, or password")]
    UnknownFormat { value: String },

    #[error("unrecognized data type literal \"{value}\": expected array, boolean, integer, number, object, or string")]
    UnknownDataType { value: String },
}

/// Errors while loading descriptors or configuration.
#[derive(Debug, Error)]
pub enum LoadError {
    // IO errors (exit code 3)
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("cannot read {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[cfg(feature = "remote")]
    #[error("failed to fetch {url}: {source}")]
    NetworkError {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    // Parse errors (exit code 2)
    #[error("invalid JSON: {source}")]
    InvalidJson {
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid {kind}: {source}")]
    InvalidDescriptor {
        kind: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl LoadError {
    /// Returns the exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            LoadError::FileNotFound { .. } | LoadError::ReadError { .. } => 3,
            #[cfg(feature = "remote")]
            LoadError::NetworkError { .. } => 3,
            _ => 2,
        }
    }
}

/// Errors while checking examples against a projected schema.
#[derive(Debug, Error)]
pub enum ValidateError {
    #[error("projected schema does not compile: {message}")]
    InvalidSchema { message: String },

    #[error("example failed validation with {} error(s)", errors.len())]
    Invalid { errors: Vec<ExampleError> },
}

impl ValidateError {
    /// Returns the exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            ValidateError::InvalidSchema { .. } => 2,
            ValidateError::Invalid { .. } => 1,
        }
    }
}

/// Single example violation with path context.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ExampleError {
    /// JSON Pointer (RFC 6901) into the example value.
    pub path: String,
    pub message: String,
}

impl std::fmt::Display for ExampleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.path.is_empty() {
            write!(f, "/: {}", self.message)
        } else {
            write!(f, "{}: {}", self.path, self.message)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_error_exit_codes() {
        let err = LoadError::FileNotFound {
            path: PathBuf::from("method.json"),
        };
        assert_eq!(err.exit_code(), 3);

        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = LoadError::InvalidJson { source };
        assert_eq!(err.exit_code(), 2);

        let source = serde_json::from_str::<bool>("1").unwrap_err();
        let err = LoadError::InvalidDescriptor {
            kind: "type descriptor",
            source,
        };
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().starts_with("invalid type descriptor: "));
    }

    #[test]
    fn validate_error_exit_codes() {
        let err = ValidateError::Invalid {
            errors: vec![ExampleError {
                path: "/id".into(),
                message: "\"x\" is not of type \"integer\"".into(),
            }],
        };
        assert_eq!(err.exit_code(), 1);
        assert_eq!(err.to_string(), "example failed validation with 1 error(s)");

        let err = ValidateError::InvalidSchema {
            message: "bad".into(),
        };
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn example_error_display() {
        let err = ExampleError {
            path: "/items/0".into(),
            message: "expected string".into(),
        };
        assert_eq!(err.to_string(), "/items/0: expected string");

        let err = ExampleError {
            path: String::new(),
            message: "expected string".into(),
        };
        assert_eq!(err.to_string(), "/: expected string");
    }
}
