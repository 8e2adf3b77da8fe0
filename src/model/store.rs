//! Model persistence and the load-or-train cache step.
//!
//! The on-disk artifact is a CSV table:
//!
//! ```csv
//! words,alt.atheism,comp.graphics
//! atheist,-2.1760912590556813,-4.0
//! ```
//!
//! Values are written in shortest round-trip form, so loading a saved model
//! gives back bit-identical floats.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use log::{debug, info};
use parking_lot::RwLock;

use crate::corpus::Corpus;
use crate::error::{NgBayesError, Result};
use crate::model::{Model, Trainer};

/// First header cell of the CSV artifact.
pub const WORDS_COLUMN: &str = "words";

/// Storage backend for a trained model.
pub trait ModelStore: Send + Sync {
    /// Load the stored model, or `None` if nothing has been stored yet.
    ///
    /// A stored model that cannot be read back is an error, not a miss.
    fn load(&self) -> Result<Option<Model>>;

    /// Store a model, replacing any previous one.
    fn save(&self, model: &Model) -> Result<()>;

    /// Human-readable location of the store, for log messages.
    fn describe(&self) -> String;
}

/// Return the stored model, or train one and store it.
///
/// The corpus is only read on a cache miss. With `force` the stored model is
/// ignored and overwritten.
pub fn load_or_train<S, F>(store: &S, trainer: &Trainer, corpus: F, force: bool) -> Result<Model>
where
    S: ModelStore + ?Sized,
    F: FnOnce() -> Result<Corpus>,
{
    if !force {
        if let Some(model) = store.load()? {
            let (words, categories) = model.shape();
            debug!(
                "loaded model from {}: {words} words x {categories} categories",
                store.describe()
            );
            return Ok(model);
        }
    }

    let corpus = corpus()?;
    let model = trainer.train(&corpus)?;

    info!("Save model on disk.");
    store.save(&model)?;
    debug!("model saved to {}", store.describe());

    Ok(model)
}

/// A model stored as a CSV file.
#[derive(Debug, Clone)]
pub struct CsvModelStore {
    path: PathBuf,
}

impl CsvModelStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        CsvModelStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write a model as CSV to any writer.
    pub fn write_to<W: Write>(model: &Model, writer: W) -> Result<()> {
        let mut writer = WriterBuilder::new().from_writer(writer);

        let mut header = Vec::with_capacity(model.categories().len() + 1);
        header.push(WORDS_COLUMN);
        header.extend(model.categories().iter().map(String::as_str));
        writer.write_record(&header)?;

        let mut record = Vec::with_capacity(header.len());
        for (word, values) in model.rows() {
            record.clear();
            record.push(word.to_string());
            record.extend(values.iter().map(f64::to_string));
            writer.write_record(&record)?;
        }

        writer.flush()?;
        Ok(())
    }

    /// Read a CSV model from any reader.
    pub fn read_from<R: io::Read>(reader: R) -> Result<Model> {
        let mut reader = ReaderBuilder::new().has_headers(true).from_reader(reader);

        let header = reader.headers().map_err(malformed)?.clone();
        let categories = parse_header(&header)?;

        let mut rows = BTreeMap::new();
        for record in reader.records() {
            let record = record.map_err(malformed)?;
            let (word, values) = parse_record(&record, categories.len())?;
            if rows.insert(word.clone(), values).is_some() {
                return Err(NgBayesError::model(format!("duplicate word: {word}")));
            }
        }

        Model::from_parts(categories, rows)
    }
}

impl ModelStore for CsvModelStore {
    fn load(&self) -> Result<Option<Model>> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };

        Self::read_from(file)
            .map(Some)
            .map_err(|err| NgBayesError::model(format!("{}: {err}", self.path.display())))
    }

    fn save(&self, model: &Model) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        // The artifact only appears once it is complete.
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        let result = Self::write_to(model, BufWriter::new(File::create(&tmp)?))
            .and_then(|()| Ok(std::fs::rename(&tmp, &self.path)?));
        if result.is_err() {
            // The write error is the one reported.
            let _ = std::fs::remove_file(&tmp);
        }
        result
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

fn malformed(err: csv::Error) -> NgBayesError {
    NgBayesError::model(format!("malformed model file: {err}"))
}

fn parse_header(header: &StringRecord) -> Result<Vec<String>> {
    let mut fields = header.iter();
    match fields.next() {
        Some(WORDS_COLUMN) => {}
        Some(other) => {
            return Err(NgBayesError::model(format!(
                "expected {WORDS_COLUMN:?} as first header cell, found {other:?}"
            )));
        }
        None => return Err(NgBayesError::model("empty model header")),
    }
    Ok(fields.map(str::to_owned).collect())
}

fn parse_record(record: &StringRecord, num_categories: usize) -> Result<(String, Vec<f64>)> {
    let line = record.position().map_or(0, |p| p.line());
    let mut fields = record.iter();
    let word = fields
        .next()
        .ok_or_else(|| NgBayesError::model(format!("line {line}: empty row")))?;

    let values = fields
        .map(|cell| {
            cell.parse::<f64>().map_err(|err| {
                NgBayesError::model(format!("line {line}: invalid value {cell:?}: {err}"))
            })
        })
        .collect::<Result<Vec<_>>>()?;

    if values.len() != num_categories {
        return Err(NgBayesError::model(format!(
            "line {line}: expected {num_categories} values, found {}",
            values.len()
        )));
    }

    Ok((word.to_string(), values))
}

/// A model kept in memory.
#[derive(Debug, Default)]
pub struct MemoryModelStore {
    model: RwLock<Option<Model>>,
}

impl MemoryModelStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds a model.
    pub fn with_model(model: Model) -> Self {
        MemoryModelStore {
            model: RwLock::new(Some(model)),
        }
    }

    pub fn clear(&self) {
        *self.model.write() = None;
    }

    pub fn is_empty(&self) -> bool {
        self.model.read().is_none()
    }
}

impl ModelStore for MemoryModelStore {
    fn load(&self) -> Result<Option<Model>> {
        Ok(self.model.read().clone())
    }

    fn save(&self, model: &Model) -> Result<()> {
        *self.model.write() = Some(model.clone());
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::sync::Arc;

    use tempfile::TempDir;

    use super::*;
    use crate::analysis::analyzer::NewsgroupAnalyzer;
    use crate::model::ModelBuilder;

    fn sample_model() -> Model {
        let mut builder = ModelBuilder::new();
        builder
            .add_tokens("A", ["cat", "cat", "dog"])
            .add_tokens("B", ["dog", "dog", "fish"]);
        builder.build().unwrap()
    }

    fn bits(model: &Model) -> Vec<(String, Vec<u64>)> {
        model
            .rows()
            .map(|(w, v)| (w.to_string(), v.iter().map(|x| x.to_bits()).collect()))
            .collect()
    }

    fn trainer() -> Trainer {
        Trainer::new(Arc::new(NewsgroupAnalyzer::new().unwrap()))
    }

    fn corpus() -> Corpus {
        let mut corpus = Corpus::new();
        corpus.add_text("rec.autos", "Subject: x\n\nengine engine brake\n");
        corpus.add_text("sci.space", "Subject: y\n\norbit rocket\n");
        corpus
    }

    #[test]
    fn test_csv_layout() {
        let mut buf = Vec::new();
        CsvModelStore::write_to(&sample_model(), &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "words,A,B");
        assert_eq!(lines.len(), 4);
        assert!(lines[1].starts_with("cat,0,"));
        assert!(lines[2].starts_with("dog,"));
        assert!(lines[3].starts_with("fish,"));
    }

    #[test]
    fn test_csv_round_trip_is_bit_identical() {
        let dir = TempDir::new().unwrap();
        let store = CsvModelStore::new(dir.path().join("model.csv"));
        let model = sample_model();

        store.save(&model).unwrap();
        let loaded = store.load().unwrap().unwrap();

        assert_eq!(loaded.categories(), model.categories());
        assert_eq!(bits(&loaded), bits(&model));
    }

    #[test]
    fn test_missing_file_is_a_miss() {
        let dir = TempDir::new().unwrap();
        let store = CsvModelStore::new(dir.path().join("absent.csv"));
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let store = CsvModelStore::new(dir.path().join("nested/dir/model.csv"));
        store.save(&sample_model()).unwrap();
        assert!(store.path().exists());
    }

    #[test]
    fn test_failed_save_leaves_no_temporary_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("model.csv");
        // A non-empty directory at the target path makes the final rename fail.
        std::fs::create_dir(&path).unwrap();
        std::fs::write(path.join("occupied"), "x").unwrap();

        let store = CsvModelStore::new(&path);
        assert!(store.save(&sample_model()).is_err());
        assert!(!dir.path().join("model.csv.tmp").exists());
        assert!(path.is_dir());
    }

    #[test]
    fn test_malformed_artifacts_are_model_errors() {
        let cases = [
            "",
            "word,A\ncat,0\n",
            "words,A,B\ncat,0\n",
            "words,A\ncat,zero\n",
            "words,A\ncat,inf\n",
            "words,A\ncat,0\ncat,-1\n",
            "words,A,A\ncat,0,0\n",
            "words,,B\ncat,0,0\n",
        ];

        for content in cases {
            let result = CsvModelStore::read_from(content.as_bytes());
            assert!(
                matches!(result, Err(NgBayesError::Model(_))),
                "{content:?} gave {result:?}"
            );
        }
    }

    #[test]
    fn test_malformed_file_is_not_a_miss() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("model.csv");
        std::fs::write(&path, "words,A\ncat,not-a-number\n").unwrap();

        let result = CsvModelStore::new(&path).load();
        assert!(matches!(result, Err(NgBayesError::Model(_))));
    }

    #[test]
    fn test_memory_store() {
        let store = MemoryModelStore::new();
        assert!(store.is_empty());
        assert!(store.load().unwrap().is_none());

        store.save(&sample_model()).unwrap();
        assert_eq!(store.load().unwrap(), Some(sample_model()));

        store.clear();
        assert!(store.is_empty());
        assert_eq!(store.describe(), "memory");
    }

    #[test]
    fn test_load_or_train_trains_once() {
        let store = MemoryModelStore::new();
        let reads = Cell::new(0);
        let read_corpus = || {
            reads.set(reads.get() + 1);
            Ok(corpus())
        };

        let first = load_or_train(&store, &trainer(), read_corpus, false).unwrap();
        let second = load_or_train(
            &store,
            &trainer(),
            || -> Result<Corpus> { panic!("corpus must not be read on a cache hit") },
            false,
        )
        .unwrap();

        assert_eq!(reads.get(), 1);
        assert_eq!(first, second);
    }

    #[test]
    fn test_load_or_train_force_overwrites() {
        let store = MemoryModelStore::with_model(sample_model());

        let model = load_or_train(&store, &trainer(), || Ok(corpus()), true).unwrap();
        assert_eq!(model.categories(), ["rec.autos".to_string(), "sci.space".to_string()]);
        assert_eq!(store.load().unwrap(), Some(model));
    }

    #[test]
    fn test_load_or_train_with_dyn_store() {
        let dir = TempDir::new().unwrap();
        let store: Box<dyn ModelStore> = Box::new(CsvModelStore::new(dir.path().join("m.csv")));

        let trained = load_or_train(store.as_ref(), &trainer(), || Ok(corpus()), false).unwrap();
        let loaded = store.load().unwrap().unwrap();
        assert_eq!(bits(&trained), bits(&loaded));
    }
}
