//! Char filter implementations for text normalization.
//!
//! Char filters pre-process the raw text before it reaches the tokenizer.
//! Newsgroup posts carry transport headers, quoted replies and attribution
//! lines that say nothing about the post's own topic; the filters here strip
//! them at line granularity.
//!
//! # Available Filters
//!
//! - [`header::HeaderBlockCharFilter`] - Drops the header block up to the first blank line
//! - [`line::LineCharFilter`] - Drops lines by configured prefixes and suffixes
//!
//! # Examples
//!
//! ```
//! use ngbayes::analysis::char_filter::CharFilter;
//! use ngbayes::analysis::char_filter::header::HeaderBlockCharFilter;
//!
//! let filter = HeaderBlockCharFilter::new();
//! assert_eq!(filter.filter("Subject: hi\n\nbody text\n"), "body text\n");
//! ```

/// Trait for character filters that transform text before tokenization.
pub trait CharFilter: Send + Sync {
    /// Apply this filter to the input text and return the filtered text.
    fn filter(&self, input: &str) -> String;

    /// Get the name of this char filter.
    fn name(&self) -> &'static str;
}

/// Split text into lines, each keeping its terminator.
///
/// A line ends at `\r\n`, `\n` or a lone `\r`. A trailing terminator does
/// not start an empty last line.
pub fn split_lines_inclusive(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let end = match rest.find(['\r', '\n']) {
            Some(i) if rest[i..].starts_with("\r\n") => i + 2,
            Some(i) => i + 1,
            None => rest.len(),
        };
        let (line, tail) = rest.split_at(end);
        rest = tail;
        Some(line)
    })
}

pub mod header;
pub mod line;

pub use header::HeaderBlockCharFilter;
pub use line::LineCharFilter;
