//! Training a [`Model`] from a labeled corpus.

use std::fmt::{Debug, Formatter};
use std::sync::Arc;

use log::{debug, info};

use crate::analysis::analyzer::Analyzer;
use crate::corpus::Corpus;
use crate::error::Result;
use crate::model::{Model, ModelBuilder};

/// Normalizes every training document and aggregates the tokens per category.
#[derive(Clone)]
pub struct Trainer {
    analyzer: Arc<dyn Analyzer>,
}

impl Trainer {
    pub fn new(analyzer: Arc<dyn Analyzer>) -> Self {
        Trainer { analyzer }
    }

    pub fn analyzer(&self) -> &Arc<dyn Analyzer> {
        &self.analyzer
    }

    /// Count tokens without building the table.
    pub fn collect(&self, corpus: &Corpus) -> Result<ModelBuilder> {
        let mut builder = ModelBuilder::new();

        for (category, documents) in corpus.iter() {
            info!("Collecting {category}...");
            builder.ensure_category(category);
            for document in documents {
                let tokens = self.analyzer.normalize(&document.text)?;
                builder.add_tokens(category, tokens);
            }
        }

        Ok(builder)
    }

    /// Train a model on every document of the corpus.
    pub fn train(&self, corpus: &Corpus) -> Result<Model> {
        let model = self.collect(corpus)?.build()?;
        let (words, categories) = model.shape();
        debug!("trained model: {words} words x {categories} categories");
        Ok(model)
    }
}

impl Debug for Trainer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Trainer")
            .field("analyzer", &self.analyzer.name())
            .finish()
    }
}
