//! Reading document bytes with a bounded encoding fallback.

use std::path::Path;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::{NgBayesError, Result};

/// Text encodings a document may be stored in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextEncoding {
    /// UTF-8. Fails on invalid byte sequences.
    Utf8,
    /// ISO-8859-1. Every byte maps to the code point of the same value.
    Latin1,
}

impl TextEncoding {
    /// The conventional label of this encoding.
    pub fn label(&self) -> &'static str {
        match self {
            TextEncoding::Utf8 => "utf-8",
            TextEncoding::Latin1 => "iso-8859-1",
        }
    }

    /// Decode bytes, or `None` if they are not valid in this encoding.
    pub fn decode(&self, bytes: &[u8]) -> Option<String> {
        match self {
            TextEncoding::Utf8 => std::str::from_utf8(bytes).ok().map(str::to_owned),
            TextEncoding::Latin1 => Some(bytes.iter().map(|&b| char::from(b)).collect()),
        }
    }
}

/// UTF-8 first, then exactly one retry as ISO-8859-1.
pub const DEFAULT_ENCODINGS: [TextEncoding; 2] = [TextEncoding::Utf8, TextEncoding::Latin1];

/// Reads document files, trying each configured encoding once, in order.
#[derive(Debug, Clone)]
pub struct DocumentReader {
    encodings: Vec<TextEncoding>,
}

impl DocumentReader {
    /// Create a reader with the default UTF-8 → ISO-8859-1 chain.
    pub fn new() -> Self {
        Self::with_encodings(DEFAULT_ENCODINGS.to_vec())
    }

    /// Create a reader with a custom encoding chain.
    pub fn with_encodings(encodings: Vec<TextEncoding>) -> Self {
        DocumentReader { encodings }
    }

    pub fn encodings(&self) -> &[TextEncoding] {
        &self.encodings
    }

    /// Decode bytes with the first encoding that accepts them.
    pub fn decode(&self, bytes: &[u8]) -> Option<(String, TextEncoding)> {
        self.encodings
            .iter()
            .find_map(|encoding| encoding.decode(bytes).map(|text| (text, *encoding)))
    }

    /// Read and decode a file.
    ///
    /// I/O failures and bytes rejected by every encoding are errors.
    pub fn read<P: AsRef<Path>>(&self, path: P) -> Result<String> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;

        match self.decode(&bytes) {
            Some((text, encoding)) => {
                if Some(&encoding) != self.encodings.first() {
                    warn!("{} decoded as {}", path.display(), encoding.label());
                }
                Ok(text)
            }
            None => Err(NgBayesError::decode(
                path,
                self.encodings
                    .iter()
                    .map(|e| e.label())
                    .collect::<Vec<_>>()
                    .join(", "),
            )),
        }
    }
}

impl Default for DocumentReader {
    fn default() -> Self {
        Self::new()
    }
}
