//! Pair aligner: turns the two parallel literal lists into translation pairs.

use serde::Serialize;

/// One output row: a source-language term and its target-language term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranslationPair {
    pub source: String,
    pub target: String,
}

impl TranslationPair {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}

/// Pair `source[i]` with `target[i]`, in order.
///
/// Lists of different length produce no pairs at all, since a shifted
/// index would pair unrelated terms. Indices with an empty source term are
/// dropped on both sides. Terms are copied as-is, no trimming or dedup.
pub fn align(source: &[String], target: &[String]) -> Vec<TranslationPair> {
    if source.len() != target.len() {
        return Vec::new();
    }

    source
        .iter()
        .zip(target)
        .filter(|(source, _)| !source.is_empty())
        .map(|(source, target)| TranslationPair::new(source.as_str(), target.as_str()))
        .collect()
}
