//! Configuration for normalization and for the end-to-end run.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::analysis::char_filter::line::{DEFAULT_LINE_PREFIXES, DEFAULT_LINE_SUFFIXES};
use crate::error::{NgBayesError, Result};

/// Configuration of the newsgroup normalizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizerConfig {
    /// Drop the header block up to and including the first blank line.
    pub strip_header: bool,

    /// Lines starting with any of these (after trimming) are dropped.
    pub line_prefixes: Vec<String>,

    /// Lines ending with any of these (after trimming) are dropped.
    pub line_suffixes: Vec<String>,

    /// Minimum token length in characters, checked before and after lemmatization.
    pub min_token_len: usize,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            strip_header: true,
            line_prefixes: DEFAULT_LINE_PREFIXES.iter().map(|s| s.to_string()).collect(),
            line_suffixes: DEFAULT_LINE_SUFFIXES.iter().map(|s| s.to_string()).collect(),
            min_token_len: 2,
        }
    }
}

/// Configuration of a train-then-test run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Root of the training corpus (one subdirectory per category).
    pub train_dir: PathBuf,

    /// Root of the test corpus (one subdirectory per category).
    pub test_dir: PathBuf,

    /// Location of the persisted model table.
    pub model_path: PathBuf,

    /// Decimal places used when reporting accuracy.
    pub accuracy_precision: u32,

    /// Text normalization settings.
    pub normalizer: NormalizerConfig,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            train_dir: PathBuf::from("20news-bydate/20news-bydate-train/"),
            test_dir: PathBuf::from("20news-bydate/20news-bydate-test/"),
            model_path: PathBuf::from("trained_model.csv"),
            accuracy_precision: 4,
            normalizer: NormalizerConfig::default(),
        }
    }
}

impl RunConfig {
    /// Load a configuration from a JSON file. Missing fields take their defaults.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: RunConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check invariants that serde cannot express.
    pub fn validate(&self) -> Result<()> {
        if self.normalizer.min_token_len == 0 {
            return Err(NgBayesError::config("min_token_len must be at least 1"));
        }
        if self.accuracy_precision > 15 {
            return Err(NgBayesError::config(format!(
                "accuracy_precision {} exceeds f64 precision",
                self.accuracy_precision
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RunConfig::default();
        assert_eq!(config.model_path, PathBuf::from("trained_model.csv"));
        assert_eq!(config.accuracy_precision, 4);
        assert_eq!(config.normalizer.min_token_len, 2);
        assert!(config.normalizer.strip_header);
        assert!(config.normalizer.line_prefixes.contains(&"In article".to_string()));
        assert_eq!(config.normalizer.line_suffixes, vec!["writes:", "wrote:"]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: RunConfig =
            serde_json::from_str(r#"{"model_path": "m.csv", "normalizer": {"min_token_len": 3}}"#)
                .unwrap();
        assert_eq!(config.model_path, PathBuf::from("m.csv"));
        assert_eq!(config.normalizer.min_token_len, 3);
        assert_eq!(config.accuracy_precision, 4);
        assert!(!config.normalizer.line_prefixes.is_empty());
    }

    #[test]
    fn test_validate_rejects_zero_min_len() {
        let mut config = RunConfig::default();
        config.normalizer.min_token_len = 0;
        assert!(matches!(config.validate(), Err(NgBayesError::Config(_))));
    }

    #[test]
    fn test_from_json_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"accuracy_precision": 2}"#).unwrap();

        let config = RunConfig::from_json_file(&path).unwrap();
        assert_eq!(config.accuracy_precision, 2);
    }
}
