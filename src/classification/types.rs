//! Classification result types.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// Score of one category for one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryScore {
    pub category: String,
    /// Sum of `count × log10 p(word | category)` over in-vocabulary words.
    pub score: f64,
}

impl CategoryScore {
    pub fn new<S: Into<String>>(category: S, score: f64) -> Self {
        CategoryScore {
            category: category.into(),
            score,
        }
    }

    /// Higher score first, then category name ascending.
    fn rank(a: &CategoryScore, b: &CategoryScore) -> Ordering {
        b.score
            .total_cmp(&a.score)
            .then_with(|| a.category.cmp(&b.category))
    }
}

/// Every category of a model, ranked best first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    scores: Vec<CategoryScore>,
}

impl Classification {
    /// Rank the given scores.
    pub fn from_scores(mut scores: Vec<CategoryScore>) -> Self {
        scores.sort_by(CategoryScore::rank);
        Classification { scores }
    }

    /// The best category, if the model had any.
    pub fn top(&self) -> Option<&CategoryScore> {
        self.scores.first()
    }

    /// Score gap between the first and second category.
    pub fn margin(&self) -> Option<f64> {
        match self.scores.as_slice() {
            [first, second, ..] => Some(first.score - second.score),
            _ => None,
        }
    }

    /// Keep the `k` best categories.
    pub fn truncate(mut self, k: usize) -> Self {
        self.scores.truncate(k);
        self
    }

    /// Position of a category in the ranking, zero-based.
    pub fn rank_of(&self, category: &str) -> Option<usize> {
        self.scores.iter().position(|s| s.category == category)
    }

    pub fn scores(&self) -> &[CategoryScore] {
        &self.scores
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CategoryScore> {
        self.scores.iter()
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

impl IntoIterator for Classification {
    type Item = CategoryScore;
    type IntoIter = std::vec::IntoIter<CategoryScore>;

    fn into_iter(self) -> Self::IntoIter {
        self.scores.into_iter()
    }
}

impl<'a> IntoIterator for &'a Classification {
    type Item = &'a CategoryScore;
    type IntoIter = std::slice::Iter<'a, CategoryScore>;

    fn into_iter(self) -> Self::IntoIter {
        self.scores.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(classification: &Classification) -> Vec<&str> {
        classification.iter().map(|s| s.category.as_str()).collect()
    }

    #[test]
    fn test_sorted_by_score_descending() {
        let classification = Classification::from_scores(vec![
            CategoryScore::new("a", -3.0),
            CategoryScore::new("b", -1.0),
            CategoryScore::new("c", -2.0),
        ]);

        assert_eq!(names(&classification), vec!["b", "c", "a"]);
        assert_eq!(classification.top().unwrap().category, "b");
        assert_eq!(classification.margin(), Some(1.0));
        assert_eq!(classification.rank_of("a"), Some(2));
        assert_eq!(classification.rank_of("z"), None);
    }

    #[test]
    fn test_ties_are_broken_by_name() {
        let classification = Classification::from_scores(vec![
            CategoryScore::new("sci.space", 0.0),
            CategoryScore::new("alt.atheism", 0.0),
            CategoryScore::new("rec.autos", 0.0),
        ]);

        assert_eq!(names(&classification), vec!["alt.atheism", "rec.autos", "sci.space"]);
        assert_eq!(classification.margin(), Some(0.0));
    }

    #[test]
    fn test_truncate() {
        let classification = Classification::from_scores(vec![
            CategoryScore::new("a", -3.0),
            CategoryScore::new("b", -1.0),
        ])
        .truncate(1);

        assert_eq!(classification.len(), 1);
        assert_eq!(classification.margin(), None);
        assert_eq!(classification.into_iter().next().unwrap().category, "b");
    }

    #[test]
    fn test_empty() {
        let classification = Classification::default();
        assert!(classification.is_empty());
        assert!(classification.top().is_none());
        assert!(classification.margin().is_none());
    }
}
