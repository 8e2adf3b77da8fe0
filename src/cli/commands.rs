//! Command implementations for the ngbayes CLI.

use std::sync::Arc;

use log::info;

use crate::analysis::analyzer::{Analyzer, NewsgroupAnalyzer};
use crate::classification::NaiveBayesClassifier;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::RunConfig;
use crate::corpus::{Corpus, DocumentReader};
use crate::error::{NgBayesError, Result};
use crate::evaluation::Evaluator;
use crate::model::{CsvModelStore, Model, ModelStore, Trainer, load_or_train};

/// Execute a CLI command.
pub fn execute_command(args: NgBayesArgs) -> Result<()> {
    let config = args.run_config()?;

    match args.command() {
        Command::Run => run(&config, &args),
        Command::Train(train_args) => train(train_args, &config, &args),
        Command::Evaluate => evaluate(&config, &args),
        Command::Classify(classify_args) => classify(classify_args, &config, &args),
    }
}

fn analyzer(config: &RunConfig) -> Result<Arc<dyn Analyzer>> {
    Ok(Arc::new(NewsgroupAnalyzer::with_config(&config.normalizer)?))
}

/// Return the cached model, or train and cache one.
fn load_or_train_model(
    config: &RunConfig,
    analyzer: Arc<dyn Analyzer>,
    force: bool,
) -> Result<Model> {
    let store = CsvModelStore::new(&config.model_path);
    let trainer = Trainer::new(analyzer);
    load_or_train(&store, &trainer, || Corpus::from_dir(&config.train_dir), force)
}

/// Load the cached model, failing if there is none.
fn load_model(config: &RunConfig) -> Result<Model> {
    let store = CsvModelStore::new(&config.model_path);
    store.load()?.ok_or_else(|| {
        NgBayesError::not_found(format!(
            "model {} (run `ngbayes train` first)",
            store.describe()
        ))
    })
}

fn evaluate_model(
    model: Model,
    analyzer: Arc<dyn Analyzer>,
    config: &RunConfig,
    args: &NgBayesArgs,
    breakdown: bool,
) -> Result<()> {
    let test_corpus = Corpus::from_dir(&config.test_dir)?;
    let classifier = NaiveBayesClassifier::new(Arc::new(model), analyzer);
    let report = Evaluator::new(&classifier).evaluate(&test_corpus)?;

    output_result(
        &AccuracyResult::new(&report, config.accuracy_precision, breakdown),
        args,
    )
}

/// Train if needed, then evaluate.
fn run(config: &RunConfig, args: &NgBayesArgs) -> Result<()> {
    let analyzer = analyzer(config)?;
    let model = load_or_train_model(config, analyzer.clone(), false)?;
    evaluate_model(model, analyzer, config, args, false)
}

/// Train and cache a model.
fn train(train_args: TrainArgs, config: &RunConfig, args: &NgBayesArgs) -> Result<()> {
    let model = load_or_train_model(config, analyzer(config)?, train_args.force)?;
    output_result(
        &TrainingResult::new(&config.model_path.display().to_string(), &model),
        args,
    )
}

/// Evaluate a cached model with a per-category breakdown.
fn evaluate(config: &RunConfig, args: &NgBayesArgs) -> Result<()> {
    let model = load_model(config)?;
    evaluate_model(model, analyzer(config)?, config, args, true)
}

/// Classify one document with a cached model.
fn classify(classify_args: ClassifyArgs, config: &RunConfig, args: &NgBayesArgs) -> Result<()> {
    let model = load_model(config)?;
    let text = DocumentReader::new().read(&classify_args.file)?;
    info!("Classifying {}...", classify_args.file.display());

    let classifier = NaiveBayesClassifier::new(Arc::new(model), analyzer(config)?);
    let classification = classifier.classify_text(&text)?;

    output_result(
        &ClassificationResult::new(
            &classify_args.file.display().to_string(),
            classification,
            classify_args.top,
        ),
        args,
    )
}
