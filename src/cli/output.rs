//! Output formatting for CLI commands.

use std::collections::BTreeMap;
use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use crate::classification::{CategoryScore, Classification};
use crate::cli::args::{NgBayesArgs, OutputFormat};
use crate::error::Result;
use crate::evaluation::{EvaluationReport, Tally, round_to};
use crate::model::Model;

/// Result structure for training.
#[derive(Debug, Serialize, Deserialize)]
pub struct TrainingResult {
    pub model_path: String,
    pub categories: Vec<String>,
    pub vocabulary_size: usize,
}

impl TrainingResult {
    pub fn new(model_path: &str, model: &Model) -> Self {
        TrainingResult {
            model_path: model_path.to_string(),
            categories: model.categories().to_vec(),
            vocabulary_size: model.vocabulary_size(),
        }
    }
}

/// Accuracy of one category.
#[derive(Debug, Serialize, Deserialize)]
pub struct CategoryAccuracy {
    pub correct: u64,
    pub total: u64,
    pub accuracy: Option<f64>,
}

/// Result structure for evaluation.
#[derive(Debug, Serialize, Deserialize)]
pub struct AccuracyResult {
    pub correct: u64,
    pub total: u64,
    /// Rounded accuracy, absent when the test corpus is empty.
    pub accuracy: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_category: Option<BTreeMap<String, CategoryAccuracy>>,
}

impl AccuracyResult {
    /// Summarize a report, rounding accuracies to `places`.
    pub fn new(report: &EvaluationReport, places: u32, breakdown: bool) -> Self {
        let per_category = breakdown.then(|| {
            report
                .per_category
                .iter()
                .map(|(category, tally)| (category.clone(), category_accuracy(tally, places)))
                .collect()
        });

        AccuracyResult {
            correct: report.correct,
            total: report.total,
            accuracy: report.rounded_accuracy(places),
            per_category,
        }
    }
}

fn category_accuracy(tally: &Tally, places: u32) -> CategoryAccuracy {
    CategoryAccuracy {
        correct: tally.correct,
        total: tally.total,
        accuracy: tally.accuracy().map(|a| round_to(a, places)),
    }
}

/// Result structure for classifying a document.
#[derive(Debug, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub file: String,
    pub margin: Option<f64>,
    pub categories: Vec<CategoryScore>,
}

impl ClassificationResult {
    /// Keep the `top` best categories of a ranking.
    pub fn new(file: &str, classification: Classification, top: usize) -> Self {
        let margin = classification.margin();
        ClassificationResult {
            file: file.to_string(),
            margin,
            categories: classification.truncate(top).into_iter().collect(),
        }
    }
}

/// Results that have a human-readable rendering.
pub trait HumanOutput {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()>;
}

impl HumanOutput for TrainingResult {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Model: {}", self.model_path)?;
        writeln!(out, "Categories: {}", self.categories.len())?;
        writeln!(out, "Vocabulary: {} words", self.vocabulary_size)
    }
}

impl HumanOutput for AccuracyResult {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()> {
        if let Some(per_category) = &self.per_category {
            let width = per_category.keys().map(String::len).max().unwrap_or(0);
            for (category, result) in per_category {
                writeln!(
                    out,
                    "{category:<width$}  {:>6}/{:<6} {}",
                    result.correct,
                    result.total,
                    format_accuracy(result.accuracy)
                )?;
            }
        }
        writeln!(out, "Accuracy: {}", format_accuracy(self.accuracy))
    }
}

impl HumanOutput for ClassificationResult {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{}", self.file)?;
        for (rank, score) in self.categories.iter().enumerate() {
            writeln!(out, "{:>3}. {:<30} {:.4}", rank + 1, score.category, score.score)?;
        }
        if let Some(margin) = self.margin {
            writeln!(out, "Margin: {margin:.4}")?;
        }
        Ok(())
    }
}

fn format_accuracy(accuracy: Option<f64>) -> String {
    match accuracy {
        Some(accuracy) => accuracy.to_string(),
        None => "n/a".to_string(),
    }
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize + HumanOutput>(result: &T, args: &NgBayesArgs) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_result(result, args.output_format, args.pretty, &mut out)
}

/// Write a result in the given format.
pub fn write_result<T: Serialize + HumanOutput>(
    result: &T,
    format: OutputFormat,
    pretty: bool,
    out: &mut dyn Write,
) -> Result<()> {
    match format {
        OutputFormat::Human => result.write_human(out)?,
        OutputFormat::Json => {
            let json = if pretty {
                serde_json::to_string_pretty(result)?
            } else {
                serde_json::to_string(result)?
            };
            writeln!(out, "{json}")?;
        }
    }
    Ok(())
}
