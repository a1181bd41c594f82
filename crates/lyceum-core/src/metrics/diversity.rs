//! Vocabulary diversity.

use std::collections::HashSet;

/// Unique and total word counts with their ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiversityMetric {
    /// Distinct words in the stream.
    pub unique_words: usize,
    /// Total words in the stream.
    pub total_words: usize,
    /// `unique_words / total_words`; 0 exactly when the stream is empty.
    pub ratio: f64,
}

/// Compute vocabulary diversity for a token stream.
pub fn diversity(tokens: &[String]) -> DiversityMetric {
    let unique: HashSet<&str> = tokens.iter().map(String::as_str).collect();
    let total = tokens.len();
    let ratio = if total == 0 {
        0.0
    } else {
        unique.len() as f64 / total as f64
    };
    DiversityMetric {
        unique_words: unique.len(),
        total_words: total,
        ratio,
    }
}
