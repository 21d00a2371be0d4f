use serde::{Deserialize, Serialize};

use crate::token::{Classification, StemResult};

/// Results for a run of stemming calls, in call order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StemmedDocument {
    results: Vec<StemResult>,
}

impl StemmedDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, result: StemResult) {
        self.results.push(result);
    }

    pub fn clear(&mut self) {
        self.results.clear();
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &StemResult> {
        self.results.iter()
    }

    pub fn results(&self) -> &[StemResult] {
        &self.results
    }

    /// The resolved form of every token, in order.
    pub fn resolved(&self) -> Vec<&str> {
        self.results.iter().map(|r| r.resolved.as_str()).collect()
    }

    /// Original forms of the words reduced to a root.
    pub fn stemmed_words(&self) -> Vec<&str> {
        self.originals_of(Classification::Root)
    }

    pub fn roots_found(&self) -> Vec<&str> {
        self.resolved_of(Classification::Root)
    }

    pub fn stopwords_found(&self) -> Vec<&str> {
        self.resolved_of(Classification::Stopword)
    }

    /// Surface forms in which each found stopword appeared.
    pub fn original_stopword_forms(&self) -> Vec<&str> {
        self.originals_of(Classification::Stopword)
    }

    fn resolved_of(&self, class: Classification) -> Vec<&str> {
        self.results
            .iter()
            .filter(|r| r.classification == class)
            .map(|r| r.resolved.as_str())
            .collect()
    }

    fn originals_of(&self, class: Classification) -> Vec<&str> {
        self.results
            .iter()
            .filter(|r| r.classification == class)
            .map(|r| r.original.as_str())
            .collect()
    }
}

impl<'a> IntoIterator for &'a StemmedDocument {
    type Item = &'a StemResult;
    type IntoIter = std::slice::Iter<'a, StemResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.iter()
    }
}
