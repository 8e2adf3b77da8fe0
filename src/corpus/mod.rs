//! Labeled document collections.
//!
//! A [`Corpus`] maps category names to their documents. On disk a corpus is
//! a root directory with one subdirectory per category, each regular file in
//! a subdirectory being one document:
//!
//! ```text
//! 20news-bydate-train/
//! ├── alt.atheism/
//! │   ├── 49960
//! │   └── 51060
//! └── sci.space/
//!     └── 59848
//! ```
//!
//! Categories and documents are sorted by name, so iteration order never
//! depends on the file system.

pub mod decode;
pub mod document;

pub use decode::{DocumentReader, TextEncoding};
pub use document::Document;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::{NgBayesError, Result};

/// Documents grouped by category, iterated in lexicographic category order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    categories: BTreeMap<String, Vec<Document>>,
}

impl Corpus {
    /// Create an empty corpus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a corpus from a directory using the default document reader.
    pub fn from_dir<P: AsRef<Path>>(root: P) -> Result<Self> {
        Self::from_dir_with_reader(root, &DocumentReader::new())
    }

    /// Read a corpus from a directory.
    ///
    /// Non-directory entries at the root and non-file entries inside a
    /// category are skipped. A root without any category is an error.
    pub fn from_dir_with_reader<P: AsRef<Path>>(root: P, reader: &DocumentReader) -> Result<Self> {
        let root = root.as_ref();
        let mut corpus = Corpus::new();

        for category_path in sorted_entries(root, |p| p.is_dir())? {
            let category = file_name(&category_path)?;
            let files = sorted_entries(&category_path, |p| p.is_file())?;
            debug!("{category}: {} documents", files.len());

            let documents = corpus.categories.entry(category.clone()).or_default();
            for path in files {
                let text = reader.read(&path)?;
                documents.push(Document::labeled(text, category.clone()).with_source(path));
            }
        }

        if corpus.categories.is_empty() {
            return Err(NgBayesError::corpus(format!(
                "no category directories under {}",
                root.display()
            )));
        }

        Ok(corpus)
    }

    /// Add a document to a category. The document's label is set to the category.
    pub fn add_document<S: Into<String>>(&mut self, category: S, document: Document) {
        let category = category.into();
        let document = document.with_label(category.clone());
        self.categories.entry(category).or_default().push(document);
    }

    /// Add a document given only its text.
    pub fn add_text<S: Into<String>, T: Into<String>>(&mut self, category: S, text: T) {
        self.add_document(category, Document::new(text));
    }

    /// Category names in lexicographic order.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    /// Documents of a category, in corpus order.
    pub fn documents(&self, category: &str) -> &[Document] {
        self.categories
            .get(category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Iterate over `(category, documents)` pairs in category order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Document])> {
        self.categories
            .iter()
            .map(|(category, docs)| (category.as_str(), docs.as_slice()))
    }

    pub fn num_categories(&self) -> usize {
        self.categories.len()
    }

    pub fn num_documents(&self) -> usize {
        self.categories.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

fn sorted_entries(dir: &Path, keep: impl Fn(&Path) -> bool) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if keep(&path) {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}

fn file_name(path: &Path) -> Result<String> {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(str::to_owned)
        .ok_or_else(|| NgBayesError::corpus(format!("invalid category name: {}", path.display())))
}
