//! Minimum length filter implementation.

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// Drops tokens shorter than a minimum number of characters.
///
/// Length is counted in Unicode scalar values, not bytes.
#[derive(Clone, Debug)]
pub struct MinLengthFilter {
    min_len: usize,
}

impl MinLengthFilter {
    /// Create a filter that keeps tokens with at least `min_len` characters.
    pub fn new(min_len: usize) -> Self {
        MinLengthFilter { min_len }
    }

    /// The minimum number of characters a token must have.
    pub fn min_len(&self) -> usize {
        self.min_len
    }
}

impl Default for MinLengthFilter {
    /// Single-character tokens are dropped.
    fn default() -> Self {
        Self::new(2)
    }
}

impl Filter for MinLengthFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let min_len = self.min_len;
        let filtered_tokens: Vec<Token> = tokens
            .filter(|token| token.char_len() >= min_len)
            .collect();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "min_length"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_length_filter() {
        let filter = MinLengthFilter::default();
        let tokens = vec![
            Token::new("a", 0),
            Token::new("ab", 1),
            Token::new("é", 2),
            Token::new("xyz", 3),
        ];

        let result: Vec<Token> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].text, "ab");
        assert_eq!(result[1].text, "xyz");
        assert_eq!(result[1].position, 3);
    }

    #[test]
    fn test_multibyte_characters_count_once() {
        let filter = MinLengthFilter::new(3);
        let tokens = vec![Token::new("éé", 0), Token::new("ééé", 1)];

        let result: Vec<Token> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].text, "ééé");
        assert_eq!(filter.min_len(), 3);
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(MinLengthFilter::default().name(), "min_length");
    }
}
