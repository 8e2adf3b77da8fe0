//! Frequency aggregation and smoothing.
//!
//! For every category `c` with raw token total `N[c]` and every vocabulary
//! word `w` with raw count `raw[w,c]` (zero when `w` never occurs in `c`):
//!
//! ```text
//! model[w,c] = log10((raw[w,c] + 1) / N[c])
//! ```
//!
//! The denominator is the unsmoothed total, so a category's probabilities
//! do not sum to one over the vocabulary. Models persisted by earlier runs
//! use this exact formula and stay comparable.

use std::collections::{BTreeMap, BTreeSet};

use crate::error::{NgBayesError, Result};
use crate::model::Model;

/// Add-one smoothed log10 probability of a word seen `raw` times in a
/// category holding `total` tokens.
pub fn smoothed_log_probability(raw: u64, total: u64) -> f64 {
    ((raw + 1) as f64 / total as f64).log10()
}

/// Token occurrence counts of one category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryCounts {
    counts: BTreeMap<String, u64>,
    total: u64,
}

impl CategoryCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence of a token.
    pub fn add<S: AsRef<str>>(&mut self, token: S) {
        let token = token.as_ref();
        match self.counts.get_mut(token) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(token.to_string(), 1);
            }
        }
        self.total += 1;
    }

    /// Raw count of a word, zero if absent.
    pub fn count(&self, word: &str) -> u64 {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// Total token occurrences, `N[c]`.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Distinct words seen in this category.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.counts.keys().map(String::as_str)
    }

    pub fn distinct(&self) -> usize {
        self.counts.len()
    }
}

impl<S: AsRef<str>> FromIterator<S> for CategoryCounts {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut counts = CategoryCounts::new();
        for token in iter {
            counts.add(token);
        }
        counts
    }
}

/// Accumulates per-category token counts and turns them into a [`Model`].
///
/// Categories are kept in lexicographic order regardless of the order in
/// which tokens arrive.
#[derive(Debug, Clone, Default)]
pub struct ModelBuilder {
    categories: BTreeMap<String, CategoryCounts>,
}

impl ModelBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a category even if it ends up with no tokens.
    pub fn ensure_category<S: Into<String>>(&mut self, category: S) -> &mut Self {
        self.categories.entry(category.into()).or_default();
        self
    }

    /// Append a token sequence to a category's multiset.
    pub fn add_tokens<C, I, S>(&mut self, category: C, tokens: I) -> &mut Self
    where
        C: Into<String>,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let counts = self.categories.entry(category.into()).or_default();
        for token in tokens {
            counts.add(token);
        }
        self
    }

    /// Counts collected so far for a category.
    pub fn counts(&self, category: &str) -> Option<&CategoryCounts> {
        self.categories.get(category)
    }

    /// Category names in lexicographic order.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    /// Union of the distinct tokens of all categories.
    pub fn vocabulary(&self) -> BTreeSet<&str> {
        self.categories
            .values()
            .flat_map(CategoryCounts::words)
            .collect()
    }

    /// Build the smoothed log-probability table.
    ///
    /// Fails if there are no categories or if a category has no tokens,
    /// since its probabilities would divide by zero.
    pub fn build(&self) -> Result<Model> {
        if self.categories.is_empty() {
            return Err(NgBayesError::model("cannot train a model without categories"));
        }

        if let Some(category) = self
            .categories
            .iter()
            .find_map(|(category, counts)| (counts.total() == 0).then_some(category))
        {
            return Err(NgBayesError::model(format!(
                "category {category} has no training tokens"
            )));
        }

        let columns: Vec<&CategoryCounts> = self.categories.values().collect();
        let rows = self
            .vocabulary()
            .into_iter()
            .map(|word| {
                let values = columns
                    .iter()
                    .map(|counts| smoothed_log_probability(counts.count(word), counts.total()))
                    .collect();
                (word.to_string(), values)
            })
            .collect();

        Model::from_parts(self.categories.keys().cloned().collect(), rows)
    }
}
