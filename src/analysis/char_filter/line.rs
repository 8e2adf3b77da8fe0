//! Line-level filter for administrative and quoted lines.

use std::sync::Arc;

use super::{CharFilter, split_lines_inclusive};

/// Line prefixes that mark administrative headers, attributions and quoting.
pub const DEFAULT_LINE_PREFIXES: &[&str] = &[
    "From:",
    "Subject:",
    "X-Xxmessage-Id:",
    "X-Xxdate:",
    "Summary:",
    "Keywords:",
    "Expires:",
    "Distribution:",
    "Organization:",
    "Supersedes:",
    "News-Software:",
    "X-Newsreader:",
    "X-Useragent:",
    "Lines:",
    "Archive-name:",
    "Last-modified:",
    "Version:",
    "NNTP-Posting-Host:",
    "Nntp-Posting-Host:",
    "Reply-To:",
    "Disclaimer:",
    "In article",
    ">",
    "|>",
    ":",
    "--",
    "* ",
];

/// Line suffixes that mark reply attributions.
pub const DEFAULT_LINE_SUFFIXES: &[&str] = &["writes:", "wrote:"];

/// A char filter that drops whole lines by prefix or suffix.
///
/// Each line is trimmed first; the trimmed line is tested against the
/// prefixes and suffixes and, when kept, written back followed by `\n`.
///
/// # Examples
///
/// ```
/// use ngbayes::analysis::char_filter::CharFilter;
/// use ngbayes::analysis::char_filter::line::LineCharFilter;
///
/// let filter = LineCharFilter::new();
/// let text = "In article <1@x>, bob writes:\n> quoted\n  kept line  \n";
/// assert_eq!(filter.filter(text), "kept line\n");
/// ```
#[derive(Clone, Debug)]
pub struct LineCharFilter {
    prefixes: Arc<Vec<String>>,
    suffixes: Arc<Vec<String>>,
}

impl LineCharFilter {
    /// Create a filter with the default prefix and suffix lists.
    pub fn new() -> Self {
        Self::with_rules(
            DEFAULT_LINE_PREFIXES.iter().copied(),
            DEFAULT_LINE_SUFFIXES.iter().copied(),
        )
    }

    /// Create a filter with custom prefix and suffix lists.
    pub fn with_rules<P, S, T, U>(prefixes: P, suffixes: S) -> Self
    where
        P: IntoIterator<Item = T>,
        S: IntoIterator<Item = U>,
        T: Into<String>,
        U: Into<String>,
    {
        LineCharFilter {
            prefixes: Arc::new(prefixes.into_iter().map(Into::into).collect()),
            suffixes: Arc::new(suffixes.into_iter().map(Into::into).collect()),
        }
    }

    /// Check whether a trimmed line is dropped by this filter.
    pub fn is_dropped(&self, line: &str) -> bool {
        self.prefixes.iter().any(|p| line.starts_with(p.as_str()))
            || self.suffixes.iter().any(|s| line.ends_with(s.as_str()))
    }

    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }

    pub fn suffixes(&self) -> &[String] {
        &self.suffixes
    }
}

impl Default for LineCharFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl CharFilter for LineCharFilter {
    fn filter(&self, input: &str) -> String {
        let mut output = String::with_capacity(input.len());
        for line in split_lines_inclusive(input).map(str::trim) {
            if !self.is_dropped(line) {
                output.push_str(line);
                output.push('\n');
            }
        }
        output
    }

    fn name(&self) -> &'static str {
        "line"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drops_prefixed_and_suffixed_lines() {
        let filter = LineCharFilter::new();
        let input = "\
Organization: University of Somewhere
John Smith wrote:
|> nested quote
--
* bullet noise
The engine runs hot.
: continuation quote
";
        assert_eq!(filter.filter(input), "The engine runs hot.\n");
    }

    #[test]
    fn test_trims_before_matching() {
        let filter = LineCharFilter::new();
        assert_eq!(filter.filter("   > indented quote\n\tkeep me\t\n"), "keep me\n");
    }

    #[test]
    fn test_lone_carriage_return_ends_a_line() {
        let filter = LineCharFilter::new();
        assert_eq!(filter.filter("> quoted\rbody text\r"), "body text\n");
        assert_eq!(
            filter.filter("Lines: 2\r\nkept\rJohn wrote:\r\n"),
            "kept\n"
        );
    }

    #[test]
    fn test_blank_lines_are_kept() {
        let filter = LineCharFilter::new();
        assert_eq!(filter.filter("a\n\nb"), "a\n\nb\n");
    }

    #[test]
    fn test_prefix_match_is_case_sensitive() {
        let filter = LineCharFilter::new();
        assert!(filter.is_dropped("NNTP-Posting-Host: x"));
        assert!(filter.is_dropped("Nntp-Posting-Host: x"));
        assert!(!filter.is_dropped("nntp-posting-host: x"));
    }

    #[test]
    fn test_custom_rules() {
        let filter = LineCharFilter::with_rules(vec!["#"], Vec::<String>::new());
        assert_eq!(filter.filter("# comment\n> kept\n"), "> kept\n");
        assert_eq!(filter.prefixes(), ["#".to_string()]);
        assert!(filter.suffixes().is_empty());
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(LineCharFilter::new().name(), "line");
    }
}
