//! Word frequency tables.

use std::collections::HashMap;

use super::reports::WordCount;

/// Count occurrences and return the top `k` words by descending count.
///
/// Ties break by first occurrence in the token stream, so reruns over
/// unchanged input produce identical tables.
pub fn top_k_words(tokens: &[String], k: usize) -> Vec<WordCount> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut first_seen: HashMap<&str, usize> = HashMap::new();

    for (idx, token) in tokens.iter().enumerate() {
        *counts.entry(token.as_str()).or_insert(0) += 1;
        first_seen.entry(token.as_str()).or_insert(idx);
    }

    let mut entries: Vec<(&str, usize)> = counts.into_iter().collect();
    entries.sort_by_key(|(word, count)| (std::cmp::Reverse(*count), first_seen[word]));

    entries
        .into_iter()
        .take(k)
        .map(|(word, count)| WordCount {
            word: word.to_string(),
            count,
        })
        .collect()
}
