//! Command line argument parsing for the ngbayes CLI using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::RunConfig;
use crate::error::Result;

/// ngbayes - Naive Bayes classifier for newsgroup posts
#[derive(Parser, Debug, Clone)]
#[command(name = "ngbayes")]
#[command(about = "Train and evaluate a multinomial Naive Bayes newsgroup classifier")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct NgBayesArgs {
    /// Verbosity level (0=quiet, 1=progress, 2=debug, 3=trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", global = true, default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Run configuration file (JSON)
    #[arg(long, global = true, value_name = "CONFIG_FILE", env = "NGBAYES_CONFIG")]
    pub config: Option<PathBuf>,

    /// Root of the training corpus
    #[arg(long, global = true, value_name = "DIR")]
    pub train_dir: Option<PathBuf>,

    /// Root of the test corpus
    #[arg(long, global = true, value_name = "DIR")]
    pub test_dir: Option<PathBuf>,

    /// Path of the persisted model (CSV)
    #[arg(long, global = true, value_name = "MODEL_FILE")]
    pub model: Option<PathBuf>,

    /// Subcommand to execute (defaults to `run`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl NgBayesArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to progress messages
                n => n + 1,
            }
        }
    }

    /// The subcommand to execute.
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Run)
    }

    /// Build the run configuration: the config file (or defaults), then
    /// command line overrides.
    pub fn run_config(&self) -> Result<RunConfig> {
        let mut config = match &self.config {
            Some(path) => RunConfig::from_json_file(path)?,
            None => RunConfig::default(),
        };

        if let Some(dir) = &self.train_dir {
            config.train_dir = dir.clone();
        }
        if let Some(dir) = &self.test_dir {
            config.test_dir = dir.clone();
        }
        if let Some(path) = &self.model {
            config.model_path = path.clone();
        }

        config.validate()?;
        Ok(config)
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Load or train the model, then evaluate it on the test corpus
    Run,

    /// Load or train the model
    Train(TrainArgs),

    /// Evaluate a previously trained model on the test corpus
    Evaluate,

    /// Classify a single document
    Classify(ClassifyArgs),
}

/// Arguments for training
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct TrainArgs {
    /// Retrain and overwrite an existing model
    #[arg(long)]
    pub force: bool,
}

/// Arguments for classifying a document
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct ClassifyArgs {
    /// Document file to classify
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Number of categories to show
    #[arg(short = 'n', long, default_value = "5")]
    pub top: usize,
}

/// Output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text
    Human,
    /// JSON
    Json,
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    #[test]
    fn test_default_command_is_run() {
        let args = NgBayesArgs::try_parse_from(["ngbayes"]).unwrap();
        assert_eq!(args.command(), Command::Run);
        assert_eq!(args.output_format, OutputFormat::Human);
    }

    #[test]
    fn test_train_command() {
        let args = NgBayesArgs::try_parse_from(["ngbayes", "train", "--force"]).unwrap();
        assert_eq!(args.command(), Command::Train(TrainArgs { force: true }));

        let args = NgBayesArgs::try_parse_from(["ngbayes", "train"]).unwrap();
        assert_eq!(args.command(), Command::Train(TrainArgs { force: false }));
    }

    #[test]
    fn test_classify_command() {
        let args =
            NgBayesArgs::try_parse_from(["ngbayes", "classify", "post.txt", "--top", "3"]).unwrap();

        match args.command() {
            Command::Classify(classify) => {
                assert_eq!(classify.file, PathBuf::from("post.txt"));
                assert_eq!(classify.top, 3);
            }
            other => panic!("Expected Classify command, got {other:?}"),
        }
    }

    #[test]
    fn test_verbosity_levels() {
        let args = NgBayesArgs::try_parse_from(["ngbayes"]).unwrap();
        assert_eq!(args.verbosity(), 1);

        let args = NgBayesArgs::try_parse_from(["ngbayes", "-vv", "run"]).unwrap();
        assert_eq!(args.verbosity(), 3);

        let args = NgBayesArgs::try_parse_from(["ngbayes", "run", "--quiet"]).unwrap();
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_output_format() {
        let args =
            NgBayesArgs::try_parse_from(["ngbayes", "--format", "json", "evaluate"]).unwrap();
        assert_eq!(args.output_format, OutputFormat::Json);
        assert_eq!(args.command(), Command::Evaluate);
    }

    #[test]
    fn test_path_overrides() {
        let args = NgBayesArgs::try_parse_from([
            "ngbayes",
            "--train-dir",
            "train",
            "--test-dir",
            "test",
            "--model",
            "out/model.csv",
        ])
        .unwrap();

        let config = args.run_config().unwrap();
        assert_eq!(config.train_dir, Path::new("train"));
        assert_eq!(config.test_dir, Path::new("test"));
        assert_eq!(config.model_path, Path::new("out/model.csv"));
        assert_eq!(config.accuracy_precision, 4);
    }

    #[test]
    fn test_config_file_with_overrides() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"model_path": "from_file.csv", "accuracy_precision": 2}"#)
            .unwrap();

        let args = NgBayesArgs::try_parse_from([
            "ngbayes",
            "--config",
            path.to_str().unwrap(),
            "--test-dir",
            "other",
        ])
        .unwrap();

        let config = args.run_config().unwrap();
        assert_eq!(config.model_path, Path::new("from_file.csv"));
        assert_eq!(config.test_dir, Path::new("other"));
        assert_eq!(config.accuracy_precision, 2);
    }
}
