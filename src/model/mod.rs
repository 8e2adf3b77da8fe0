//! The probability table and how it is built, trained and persisted.
//!
//! A [`Model`] maps every vocabulary word to one log10 probability per
//! category. It is produced by [`ModelBuilder`] (from token sequences) or
//! [`Trainer`] (from a [`Corpus`](crate::corpus::Corpus)), cached through a
//! [`ModelStore`], and never mutated afterwards.

pub mod builder;
pub mod store;
pub mod trainer;

pub use builder::{CategoryCounts, ModelBuilder, smoothed_log_probability};
pub use store::{CsvModelStore, MemoryModelStore, ModelStore, load_or_train};
pub use trainer::Trainer;

use std::collections::BTreeMap;
use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{NgBayesError, Result};

/// Word × category table of log10 probabilities.
///
/// Every vocabulary word has a value for every category.
///
/// # Examples
///
/// ```
/// use ngbayes::model::ModelBuilder;
///
/// let mut builder = ModelBuilder::new();
/// builder.add_tokens("A", ["cat", "cat", "dog"]);
/// builder.add_tokens("B", ["dog", "dog", "fish"]);
/// let model = builder.build().unwrap();
///
/// assert_eq!(model.shape(), (3, 2));
/// assert_eq!(model.log_prob("cat", "A"), Some(0.0));
/// assert_eq!(model.log_prob("bird", "A"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Model {
    /// Category names, one per column.
    categories: Vec<String>,
    /// Vocabulary word -> log10 probability per category, in column order.
    rows: BTreeMap<String, Vec<f64>>,
}

impl Model {
    /// Assemble a model from its columns and rows, checking every invariant.
    ///
    /// Categories must be non-empty and unique, every row must have one
    /// finite value per category, and words must be non-empty.
    pub fn from_parts(categories: Vec<String>, rows: BTreeMap<String, Vec<f64>>) -> Result<Self> {
        if categories.is_empty() {
            return Err(NgBayesError::model("model has no categories"));
        }

        let mut seen = HashSet::with_capacity(categories.len());
        for category in &categories {
            if category.is_empty() {
                return Err(NgBayesError::model("empty category name"));
            }
            if !seen.insert(category.as_str()) {
                return Err(NgBayesError::model(format!("duplicate category: {category}")));
            }
        }

        for (word, values) in &rows {
            if word.is_empty() {
                return Err(NgBayesError::model("empty vocabulary word"));
            }
            if values.len() != categories.len() {
                return Err(NgBayesError::model(format!(
                    "word {word:?} has {} values, expected {}",
                    values.len(),
                    categories.len()
                )));
            }
            if let Some(value) = values.iter().find(|v| !v.is_finite()) {
                return Err(NgBayesError::model(format!(
                    "word {word:?} has non-finite log-probability {value}"
                )));
            }
        }

        Ok(Model { categories, rows })
    }

    /// Category names in column order.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Column index of a category.
    pub fn category_index(&self, category: &str) -> Option<usize> {
        self.categories.iter().position(|c| c == category)
    }

    /// Log10 probability of `word` in `category`, if both are known.
    pub fn log_prob(&self, word: &str, category: &str) -> Option<f64> {
        let index = self.category_index(category)?;
        self.rows.get(word).map(|values| values[index])
    }

    /// All log-probabilities of a word, in column order.
    pub fn row(&self, word: &str) -> Option<&[f64]> {
        self.rows.get(word).map(Vec::as_slice)
    }

    /// Check whether a word belongs to the vocabulary.
    pub fn contains_word(&self, word: &str) -> bool {
        self.rows.contains_key(word)
    }

    /// Vocabulary words in lexicographic order.
    pub fn vocabulary(&self) -> impl Iterator<Item = &str> {
        self.rows.keys().map(String::as_str)
    }

    /// Iterate over `(word, values)` rows in lexicographic word order.
    pub fn rows(&self) -> impl Iterator<Item = (&str, &[f64])> {
        self.rows
            .iter()
            .map(|(word, values)| (word.as_str(), values.as_slice()))
    }

    pub fn vocabulary_size(&self) -> usize {
        self.rows.len()
    }

    /// `(vocabulary size, number of categories)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), self.categories.len())
    }
}
