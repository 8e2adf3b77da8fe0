//! Filter keeping only purely alphabetic tokens.

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// Drops empty tokens and tokens containing any non-alphabetic character.
///
/// "Alphabetic" follows Unicode, so `naïve` survives while `mp3`, `x_y` and
/// `42` do not.
#[derive(Clone, Debug, Default)]
pub struct AlphabeticFilter;

impl AlphabeticFilter {
    pub fn new() -> Self {
        AlphabeticFilter
    }

    /// Check if a word is non-empty and made only of alphabetic characters.
    pub fn is_alphabetic(word: &str) -> bool {
        !word.is_empty() && word.chars().all(char::is_alphabetic)
    }
}

impl Filter for AlphabeticFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens: Vec<Token> = tokens
            .filter(|token| Self::is_alphabetic(&token.text))
            .collect();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "alphabetic"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabetic_filter() {
        let filter = AlphabeticFilter::new();
        let tokens = vec![
            Token::new("engine", 0),
            Token::new("mp3", 1),
            Token::new("x_y", 2),
            Token::new("", 3),
            Token::new("naïve", 4),
            Token::new("1993", 5),
        ];

        let result: Vec<String> = filter
            .filter(Box::new(tokens.into_iter()))
            .unwrap()
            .map(|t| t.text)
            .collect();

        assert_eq!(result, vec!["engine", "naïve"]);
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(AlphabeticFilter::new().name(), "alphabetic");
    }
}
