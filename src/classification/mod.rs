//! Ranking documents against a trained [`Model`](crate::model::Model).
//!
//! # Architecture
//!
//! - `DocumentClassifier` trait: common interface for classifiers
//! - `NaiveBayesClassifier`: multinomial Naive Bayes over log10 probabilities
//! - `Classification` / `CategoryScore`: the full ranking of categories
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use ngbayes::analysis::NewsgroupAnalyzer;
//! use ngbayes::classification::NaiveBayesClassifier;
//! use ngbayes::model::ModelBuilder;
//!
//! # fn main() -> ngbayes::error::Result<()> {
//! let mut builder = ModelBuilder::new();
//! builder.add_tokens("A", ["cat", "cat", "dog"]);
//! builder.add_tokens("B", ["dog", "dog", "fish"]);
//!
//! let classifier =
//!     NaiveBayesClassifier::new(Arc::new(builder.build()?), Arc::new(NewsgroupAnalyzer::new()?));
//! let ranking = classifier.classify_tokens(["cat"]);
//! assert_eq!(ranking.top().map(|s| s.category.as_str()), Some("A"));
//! # Ok(())
//! # }
//! ```

mod classifier;
mod naive_bayes;
mod types;

pub use classifier::DocumentClassifier;
pub use naive_bayes::NaiveBayesClassifier;
pub use types::{CategoryScore, Classification};
