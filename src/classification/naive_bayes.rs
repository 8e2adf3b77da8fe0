//! Multinomial Naive Bayes classifier.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::analysis::analyzer::Analyzer;
use crate::classification::classifier::DocumentClassifier;
use crate::classification::types::{CategoryScore, Classification};
use crate::error::Result;
use crate::model::Model;

/// Scores each category by summing `count × log10 p(word | category)` over
/// the document's distinct words.
///
/// Words outside the model vocabulary contribute nothing to any category.
pub struct NaiveBayesClassifier {
    model: Arc<Model>,
    analyzer: Arc<dyn Analyzer>,
}

impl std::fmt::Debug for NaiveBayesClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NaiveBayesClassifier")
            .field("categories", &self.model.categories())
            .field("vocabulary_size", &self.model.vocabulary_size())
            .field("analyzer", &self.analyzer.name())
            .finish()
    }
}

impl NaiveBayesClassifier {
    pub fn new(model: Arc<Model>, analyzer: Arc<dyn Analyzer>) -> Self {
        Self { model, analyzer }
    }

    pub fn model(&self) -> &Arc<Model> {
        &self.model
    }

    pub fn analyzer(&self) -> &Arc<dyn Analyzer> {
        &self.analyzer
    }

    /// Rank every model category for an already normalized token sequence.
    pub fn classify_tokens<I, S>(&self, tokens: I) -> Classification
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut frequencies: BTreeMap<String, u64> = BTreeMap::new();
        for token in tokens {
            *frequencies.entry(token.as_ref().to_string()).or_insert(0) += 1;
        }

        let mut scores = vec![0.0_f64; self.model.categories().len()];
        for (word, count) in &frequencies {
            let Some(row) = self.model.row(word) else {
                continue;
            };
            for (score, log_prob) in scores.iter_mut().zip(row) {
                *score += *count as f64 * log_prob;
            }
        }

        Classification::from_scores(
            self.model
                .categories()
                .iter()
                .zip(scores)
                .map(|(category, score)| CategoryScore::new(category.clone(), score))
                .collect(),
        )
    }

    /// Normalize raw text, then rank every model category.
    pub fn classify_text(&self, text: &str) -> Result<Classification> {
        let tokens = self.analyzer.normalize(text)?;
        Ok(self.classify_tokens(&tokens))
    }
}

impl DocumentClassifier for NaiveBayesClassifier {
    fn classify(&self, text: &str) -> Result<Classification> {
        self.classify_text(text)
    }

    fn name(&self) -> &str {
        "naive_bayes"
    }
}
