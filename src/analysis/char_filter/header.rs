use super::{CharFilter, split_lines_inclusive};

/// A char filter that removes the header block of a message.
///
/// Every line up to and including the first blank line is dropped. A line
/// holding only whitespace counts as blank. Text without any blank line is
/// all header and filters to the empty string. Lines may end in `\n`,
/// `\r\n` or a lone `\r`.
#[derive(Clone, Debug, Default)]
pub struct HeaderBlockCharFilter;

impl HeaderBlockCharFilter {
    /// Create a new header block filter.
    pub fn new() -> Self {
        HeaderBlockCharFilter
    }
}

impl CharFilter for HeaderBlockCharFilter {
    fn filter(&self, input: &str) -> String {
        let mut offset = 0;
        for line in split_lines_inclusive(input) {
            offset += line.len();
            if line.trim().is_empty() {
                return input[offset..].to_string();
            }
        }
        String::new()
    }

    fn name(&self) -> &'static str {
        "header_block"
    }
}
