//! # ngbayes
//!
//! Multinomial Naive Bayes classification of newsgroup posts.
//!
//! ## Features
//!
//! - Newsgroup-aware text normalization pipeline
//! - Add-one smoothed log10 probability model
//! - CSV model cache with load-or-train
//! - Full category ranking with deterministic tie-breaks
//! - Accuracy evaluation with per-category breakdown

pub mod analysis;
pub mod classification;
pub mod cli;
pub mod config;
pub mod corpus;
pub mod error;
pub mod evaluation;
pub mod model;

pub mod prelude {
    pub use crate::analysis::{Analyzer, NewsgroupAnalyzer};
    pub use crate::classification::{
        CategoryScore, Classification, DocumentClassifier, NaiveBayesClassifier,
    };
    pub use crate::config::{NormalizerConfig, RunConfig};
    pub use crate::corpus::{Corpus, Document, DocumentReader};
    pub use crate::error::{NgBayesError, Result};
    pub use crate::evaluation::{EvaluationReport, Evaluator};
    pub use crate::model::{
        CsvModelStore, MemoryModelStore, Model, ModelBuilder, ModelStore, Trainer, load_or_train,
    };
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
