//! Accuracy of a classifier over a labeled test corpus.

use std::collections::BTreeMap;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::classification::DocumentClassifier;
use crate::corpus::Corpus;
use crate::error::Result;

/// Correct predictions out of a number of classified documents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    pub correct: u64,
    pub total: u64,
}

impl Tally {
    pub fn new(correct: u64, total: u64) -> Self {
        Tally { correct, total }
    }

    /// Record one prediction.
    pub fn record(&mut self, is_correct: bool) {
        self.total += 1;
        if is_correct {
            self.correct += 1;
        }
    }

    /// `correct / total`, or `None` when nothing was classified.
    pub fn accuracy(&self) -> Option<f64> {
        (self.total > 0).then(|| self.correct as f64 / self.total as f64)
    }
}

/// Outcome of an evaluation run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EvaluationReport {
    pub correct: u64,
    pub total: u64,
    /// Counts per true category, in lexicographic order.
    pub per_category: BTreeMap<String, Tally>,
}

impl EvaluationReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the prediction for one document of `category`.
    pub fn record(&mut self, category: &str, is_correct: bool) {
        self.total += 1;
        if is_correct {
            self.correct += 1;
        }
        self.per_category
            .entry(category.to_string())
            .or_default()
            .record(is_correct);
    }

    pub fn tally(&self) -> Tally {
        Tally::new(self.correct, self.total)
    }

    /// Unrounded accuracy, `None` for an empty test corpus.
    pub fn accuracy(&self) -> Option<f64> {
        self.tally().accuracy()
    }

    /// Accuracy rounded to `places` decimal places.
    pub fn rounded_accuracy(&self, places: u32) -> Option<f64> {
        self.accuracy().map(|accuracy| round_to(accuracy, places))
    }
}

/// Round to `places` decimal places.
///
/// Rounding is done once, on the exact binary value, so `0.00035` (stored
/// just below that decimal) rounds down to `0.0003`.
pub fn round_to(value: f64, places: u32) -> f64 {
    format!("{value:.prec$}", prec = places as usize)
        .parse()
        .unwrap_or(value)
}

/// Classifies every test document and compares the best category to its label.
pub struct Evaluator<'a> {
    classifier: &'a dyn DocumentClassifier,
}

impl<'a> Evaluator<'a> {
    pub fn new(classifier: &'a dyn DocumentClassifier) -> Self {
        Evaluator { classifier }
    }

    /// Evaluate over every category and document of the corpus, in order.
    pub fn evaluate(&self, corpus: &Corpus) -> Result<EvaluationReport> {
        let mut report = EvaluationReport::new();

        for (category, documents) in corpus.iter() {
            info!("Testing with {category}...");
            for document in documents {
                let classification = self.classifier.classify(&document.text)?;
                let predicted = classification.top().map(|s| s.category.as_str());
                report.record(category, predicted == Some(category));
            }
        }

        debug!(
            "{} evaluated {} of {} documents correctly",
            self.classifier.name(),
            report.correct,
            report.total
        );
        Ok(report)
    }
}
