//! Error types for the ngbayes library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`NgBayesError`] enum.
//!
//! # Examples
//!
//! ```
//! use ngbayes::error::{NgBayesError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(NgBayesError::corpus("no categories found"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// The main error type for ngbayes operations.
#[derive(Error, Debug)]
pub enum NgBayesError {
    /// I/O errors (file operations, directory listing, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The document bytes could not be decoded with any supported encoding.
    #[error("Decode error: {} could not be decoded as {tried}", .path.display())]
    Decode { path: PathBuf, tried: String },

    /// Analysis-related errors (tokenization, filtering, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Corpus layout errors
    #[error("Corpus error: {0}")]
    Corpus(String),

    /// Model construction or persisted artifact errors
    #[error("Model error: {0}")]
    Model(String),

    /// Configuration errors
    #[error("Config error: {0}")]
    Config(String),

    /// CSV reading/writing errors
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with NgBayesError.
pub type Result<T> = std::result::Result<T, NgBayesError>;

impl NgBayesError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        NgBayesError::Analysis(msg.into())
    }

    /// Create a new corpus error.
    pub fn corpus<S: Into<String>>(msg: S) -> Self {
        NgBayesError::Corpus(msg.into())
    }

    /// Create a new model error.
    pub fn model<S: Into<String>>(msg: S) -> Self {
        NgBayesError::Model(msg.into())
    }

    /// Create a new config error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        NgBayesError::Config(msg.into())
    }

    /// Create a new not found error.
    pub fn not_found<S: Into<String>>(msg: S) -> Self {
        NgBayesError::Other(format!("Not found: {}", msg.into()))
    }

    /// Create a new decode error for the given path and list of attempted encodings.
    pub fn decode<P: Into<PathBuf>, S: Into<String>>(path: P, tried: S) -> Self {
        NgBayesError::Decode {
            path: path.into(),
            tried: tried.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = NgBayesError::model("Test model error");
        assert_eq!(error.to_string(), "Model error: Test model error");

        let error = NgBayesError::corpus("Test corpus error");
        assert_eq!(error.to_string(), "Corpus error: Test corpus error");

        let error = NgBayesError::analysis("Test analysis error");
        assert_eq!(error.to_string(), "Analysis error: Test analysis error");

        let error = NgBayesError::not_found("trained_model.csv");
        assert_eq!(error.to_string(), "Error: Not found: trained_model.csv");
    }

    #[test]
    fn test_not_found_is_a_generic_error() {
        match NgBayesError::not_found("model trained_model.csv") {
            NgBayesError::Other(msg) => assert_eq!(msg, "Not found: model trained_model.csv"),
            other => panic!("Expected Other error variant, got {other:?}"),
        }
    }

    #[test]
    fn test_decode_error_message() {
        let error = NgBayesError::decode("a/b.txt", "utf-8, iso-8859-1");
        assert_eq!(
            error.to_string(),
            "Decode error: a/b.txt could not be decoded as utf-8, iso-8859-1"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = NgBayesError::from(io_error);

        match error {
            NgBayesError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }
}
