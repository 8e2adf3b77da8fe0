//! Document classifier trait.

use crate::classification::types::Classification;
use crate::error::Result;

/// Trait for classifiers that rank categories for a raw document.
pub trait DocumentClassifier: Send + Sync {
    /// Rank every known category for the given document text.
    fn classify(&self, text: &str) -> Result<Classification>;

    /// Get the name of this classifier for debugging and logging.
    fn name(&self) -> &str;
}
