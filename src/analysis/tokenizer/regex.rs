//! Regex-based tokenizer implementation.

use std::sync::Arc;

use regex::Regex;

use super::Tokenizer;
use crate::analysis::token::{Token, TokenStream};
use crate::error::{NgBayesError, Result};

/// Pattern matching runs of non-word characters. Tokens are the gaps between them.
///
/// A word character is a letter, a number or `_`. Combining marks are not word
/// characters, so a decomposed `e\u{301}` ends the token at the `e`.
pub const NON_WORD_PATTERN: &str = r"[^\p{L}\p{N}_]+";

/// A regex-based tokenizer.
///
/// The pattern describes separators; the tokens are the non-empty stretches
/// of text between matches.
#[derive(Clone, Debug)]
pub struct RegexTokenizer {
    /// The separator pattern
    pattern: Arc<Regex>,
}

impl RegexTokenizer {
    /// Create a tokenizer that splits on runs of non-word characters.
    pub fn new() -> Result<Self> {
        Self::with_separator(NON_WORD_PATTERN)
    }

    /// Create a tokenizer that splits on matches of `pattern`.
    pub fn with_separator(pattern: &str) -> Result<Self> {
        let pattern = Regex::new(pattern)
            .map_err(|e| NgBayesError::analysis(format!("Invalid regex pattern: {e}")))?;
        Ok(RegexTokenizer {
            pattern: Arc::new(pattern),
        })
    }

    /// Get the regex pattern used by this tokenizer.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

impl Tokenizer for RegexTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let tokens: Vec<Token> = self
            .pattern
            .split(text)
            .filter(|gap| !gap.is_empty())
            .enumerate()
            .map(|(position, gap)| Token::new(gap, position))
            .collect();

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "regex"
    }
}
