//! Pairwise vocabulary overlap.

use std::collections::HashSet;

use super::reports::{OverlapEntry, round_to};

/// A document id with its content vocabulary.
pub struct Vocabulary<'a> {
    /// Document id.
    pub id: &'a str,
    /// Distinct content words.
    pub words: &'a HashSet<String>,
}

/// Compute overlap entries for every unordered pair, in corpus order.
///
/// For n documents this yields C(n, 2) entries. The ratio is relative
/// to the smaller vocabulary; the sample is the alphabetically-first
/// `sample_size` shared words, a deterministic rule kept stable for
/// reproducibility.
#[tracing::instrument(skip_all, fields(documents = vocabularies.len()))]
pub fn compute_overlaps(vocabularies: &[Vocabulary<'_>], sample_size: usize) -> Vec<OverlapEntry> {
    let n = vocabularies.len();
    let mut entries = Vec::with_capacity(n * n.saturating_sub(1) / 2);

    for (i, a) in vocabularies.iter().enumerate() {
        for b in &vocabularies[i + 1..] {
            entries.push(overlap_pair(a, b, sample_size));
        }
    }

    entries
}

fn overlap_pair(a: &Vocabulary<'_>, b: &Vocabulary<'_>, sample_size: usize) -> OverlapEntry {
    let mut shared: Vec<&str> = a
        .words
        .intersection(b.words)
        .map(String::as_str)
        .collect();
    shared.sort_unstable();

    let smaller = a.words.len().min(b.words.len());
    let ratio = if smaller == 0 {
        0.0
    } else {
        shared.len() as f64 / smaller as f64
    };

    OverlapEntry {
        doc_a: a.id.to_string(),
        doc_b: b.id.to_string(),
        shared_words: shared.len(),
        overlap_ratio: round_to(ratio, 4),
        sample_words: shared
            .into_iter()
            .take(sample_size)
            .map(str::to_string)
            .collect(),
    }
}
