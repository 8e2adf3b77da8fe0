//! Analyzer for newsgroup posts.
//!
//! Turns a raw post into the ordered token sequence used for training and
//! classification:
//!
//! 1. drop the header block ([`HeaderBlockCharFilter`])
//! 2. drop administrative and quoted lines ([`LineCharFilter`])
//! 3. split on runs of non-word characters ([`RegexTokenizer`])
//! 4. lowercase, keep alphabetic non-stopwords of at least two characters
//! 5. lemmatize and drop lemmas that became too short

use std::fmt::{Debug, Formatter};
use std::sync::Arc;

use crate::analysis::analyzer::{Analyzer, PipelineAnalyzer};
use crate::analysis::char_filter::{HeaderBlockCharFilter, LineCharFilter};
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::{
    AlphabeticFilter, EnglishLemmatizer, LemmaFilter, Lemmatizer, LowercaseFilter,
    MinLengthFilter, StopFilter,
};
use crate::analysis::tokenizer::RegexTokenizer;
use crate::config::NormalizerConfig;
use crate::error::Result;

pub struct NewsgroupAnalyzer {
    inner: PipelineAnalyzer,
}

impl NewsgroupAnalyzer {
    /// Create the analyzer with the default configuration and the English lemmatizer.
    pub fn new() -> Result<Self> {
        Self::with_config(&NormalizerConfig::default())
    }

    /// Create the analyzer from a configuration, using the English lemmatizer.
    pub fn with_config(config: &NormalizerConfig) -> Result<Self> {
        Self::with_lemmatizer(config, Arc::new(EnglishLemmatizer::new()))
    }

    /// Create the analyzer from a configuration and a custom lemmatizer.
    pub fn with_lemmatizer(
        config: &NormalizerConfig,
        lemmatizer: Arc<dyn Lemmatizer>,
    ) -> Result<Self> {
        let tokenizer = Arc::new(RegexTokenizer::new()?);
        let mut pipeline = PipelineAnalyzer::new(tokenizer).with_name("newsgroup");

        if config.strip_header {
            pipeline = pipeline.add_char_filter(Arc::new(HeaderBlockCharFilter::new()));
        }

        let inner = pipeline
            .add_char_filter(Arc::new(LineCharFilter::with_rules(
                config.line_prefixes.iter().cloned(),
                config.line_suffixes.iter().cloned(),
            )))
            .add_filter(Arc::new(LowercaseFilter::new()))
            .add_filter(Arc::new(AlphabeticFilter::new()))
            .add_filter(Arc::new(StopFilter::new()))
            .add_filter(Arc::new(MinLengthFilter::new(config.min_token_len)))
            .add_filter(Arc::new(LemmaFilter::with_lemmatizer(lemmatizer)))
            .add_filter(Arc::new(MinLengthFilter::new(config.min_token_len)));

        Ok(Self { inner })
    }
}

impl Analyzer for NewsgroupAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.inner.analyze(text)
    }

    fn name(&self) -> &'static str {
        "newsgroup"
    }
}

impl Debug for NewsgroupAnalyzer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewsgroupAnalyzer")
            .field("inner", &self.inner)
            .finish()
    }
}
