//! Lemmatizing token filter and lemmatizer implementations.

use std::sync::Arc;

use super::Filter;
use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for lemmatization algorithms.
///
/// A lemmatizer maps an already lowercased word to its dictionary base form.
/// It must be deterministic: the same input always yields the same lemma.
pub trait Lemmatizer: Send + Sync {
    /// Reduce a word to its lemma.
    fn lemmatize(&self, word: &str) -> String;

    /// Get the name of this lemmatizer.
    fn name(&self) -> &'static str;
}

pub mod english;
pub mod identity;

pub use english::EnglishLemmatizer;
pub use identity::IdentityLemmatizer;

/// Filter that replaces each token's text with its lemma.
#[derive(Clone)]
pub struct LemmaFilter {
    lemmatizer: Arc<dyn Lemmatizer>,
}

impl std::fmt::Debug for LemmaFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LemmaFilter")
            .field("lemmatizer", &self.lemmatizer.name())
            .finish()
    }
}

impl LemmaFilter {
    /// Create a new lemma filter with the English lemmatizer.
    pub fn new() -> Self {
        LemmaFilter {
            lemmatizer: Arc::new(EnglishLemmatizer::new()),
        }
    }

    /// Create a lemma filter with a custom lemmatizer.
    pub fn with_lemmatizer(lemmatizer: Arc<dyn Lemmatizer>) -> Self {
        LemmaFilter { lemmatizer }
    }
}

impl Default for LemmaFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for LemmaFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens = tokens
            .map(|token| {
                let lemma = self.lemmatizer.lemmatize(&token.text);
                token.with_text(lemma)
            })
            .collect::<Vec<_>>();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "lemma"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    #[test]
    fn test_lemma_filter() {
        let filter = LemmaFilter::new();
        let tokens = vec![
            Token::new("cars", 0),
            Token::new("churches", 1),
            Token::new("bodies", 2),
        ];
        let token_stream = Box::new(tokens.into_iter());

        let result: Vec<Token> = filter.filter(token_stream).unwrap().collect();

        assert_eq!(result.len(), 3);
        assert_eq!(result[0].text, "car");
        assert_eq!(result[1].text, "church");
        assert_eq!(result[2].text, "body");
        assert_eq!(result[2].position, 2);
    }

    #[test]
    fn test_identity_lemma_filter() {
        let filter = LemmaFilter::with_lemmatizer(Arc::new(IdentityLemmatizer::new()));
        let tokens = vec![Token::new("cars", 0)];

        let result: Vec<Token> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();

        assert_eq!(result[0].text, "cars");
        assert_eq!(format!("{filter:?}"), "LemmaFilter { lemmatizer: \"identity\" }");
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(LemmaFilter::new().name(), "lemma");
    }
}
