//! Text analysis for ngbayes.
//!
//! Char filters, a tokenizer and token filters are chained by an analyzer to
//! turn a raw document into the ordered token sequence the model is built
//! from. [`NewsgroupAnalyzer`] is the normalizer used for training,
//! classification and evaluation.

pub mod analyzer;
pub mod char_filter;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

pub use analyzer::*;
pub use token::*;
