//! Token types and utilities for text analysis.
//!
//! A [`Token`] is the unit that flows through the analysis pipeline: the
//! tokenizer produces them, token filters rewrite or drop them, and the
//! analyzer hands the survivors to the model.
//!
//! # Examples
//!
//! ```
//! use ngbayes::analysis::token::Token;
//!
//! let token = Token::new("World", 1).with_text("world");
//! assert_eq!(token.text, "world");
//! assert_eq!(token.position, 1);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// A token represents a single unit of text after tokenization.
///
/// # Fields
///
/// - `text` - The token's text content
/// - `position` - Position in the token stream (0-based)
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The text content of the token
    pub text: String,

    /// The position of the token in the original token stream (0-based)
    pub position: usize,
}

impl Token {
    /// Create a new token with the given text and position.
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        Token {
            text: text.into(),
            position,
        }
    }

    /// Number of characters in the token text.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Check if the token is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Replace the text, keeping the position.
    pub fn with_text<S: Into<String>>(self, text: S) -> Self {
        Token {
            text: text.into(),
            ..self
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// A token stream represents a sequence of tokens from the analysis pipeline.
pub type TokenStream = Box<dyn Iterator<Item = Token>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_creation() {
        let token = Token::new("hello", 3);
        assert_eq!(token.text, "hello");
        assert_eq!(token.position, 3);
        assert!(!token.is_empty());
        assert!(Token::new("", 0).is_empty());
    }

    #[test]
    fn test_char_len_counts_characters() {
        let token = Token::new("café", 0);
        assert_eq!(token.char_len(), 4);
        assert_eq!(token.text.len(), 5);
    }

    #[test]
    fn test_with_text_keeps_position() {
        let token = Token::new("Cars", 2).with_text("car");
        assert_eq!(token.text, "car");
        assert_eq!(token.position, 2);
        assert_eq!(token.to_string(), "car");
    }
}
