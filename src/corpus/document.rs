//! Document type.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// A raw document and, for training and test data, its true category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Raw document text, before normalization.
    pub text: String,

    /// True category, absent for ad-hoc classification.
    pub label: Option<String>,

    /// File the document was read from, if any.
    pub source: Option<PathBuf>,
}

impl Document {
    /// Create an unlabeled document.
    pub fn new<S: Into<String>>(text: S) -> Self {
        Document {
            text: text.into(),
            label: None,
            source: None,
        }
    }

    /// Create a document with a true category.
    pub fn labeled<S: Into<String>, L: Into<String>>(text: S, label: L) -> Self {
        Document {
            text: text.into(),
            label: Some(label.into()),
            source: None,
        }
    }

    /// Set the label.
    pub fn with_label<L: Into<String>>(mut self, label: L) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the source path.
    pub fn with_source<P: Into<PathBuf>>(mut self, source: P) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_builders() {
        let doc = Document::new("text");
        assert_eq!(doc.label(), None);
        assert_eq!(doc.source(), None);

        let doc = Document::labeled("text", "sci.space").with_source("train/sci.space/1");
        assert_eq!(doc.label(), Some("sci.space"));
        assert_eq!(doc.source(), Some(Path::new("train/sci.space/1")));

        let doc = Document::new("text").with_label("rec.autos");
        assert_eq!(doc.label(), Some("rec.autos"));
    }
}
