//! Curated word lists for corpus analysis.
//!
//! Stopwords (common English function words plus classical-translation
//! filler) and the closed set of tracked philosophical terms. Both are
//! defaults: configuration can extend the stopword set and replace the
//! tracked-term list entirely.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Common English function words excluded from content-token streams.
pub static STOP_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
        "from", "up", "about", "into", "through", "during", "before", "after", "above", "below",
        "between", "out", "off", "over", "under", "again", "further", "then", "once", "here",
        "there", "all", "any", "both", "each", "few", "more", "most", "other", "some", "such",
        "not", "only", "own", "same", "than", "too", "very", "can", "will", "just", "now", "that",
        "this", "these", "those", "what", "which", "who", "whom", "when", "where", "why", "how",
        "is", "are", "was", "were", "be", "been", "being", "have", "has", "had", "having", "do",
        "does", "did", "doing", "it", "its", "itself", "they", "them", "their", "theirs", "him",
        "his", "himself", "her", "hers", "herself", "you", "your", "yours", "yourself", "we",
        "our", "ours", "ourselves", "me", "my", "myself", "she", "he", "i", "am", "as",
        "if", "because", "while", "until", "against", "down", "no", "nor", "so",
    ]
    .into_iter()
    .collect()
});

/// Additional stops common in translations of classical prose.
pub static ADDITIONAL_STOPS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "said", "would", "could", "shall", "must", "one", "two", "may", "also", "yet", "thus",
        "therefore", "however", "moreover",
    ]
    .into_iter()
    .collect()
});

/// The closed set of tracked philosophical terms.
///
/// Matching is case-insensitive exact token match; no stemming, no
/// substring matches.
pub static PHILOSOPHICAL_TERMS: LazyLock<Vec<&'static str>> = LazyLock::new(|| {
    vec![
        "virtue",
        "justice",
        "good",
        "evil",
        "soul",
        "truth",
        "knowledge",
        "wisdom",
        "beauty",
        "reason",
        "nature",
        "form",
        "idea",
        "being",
        "reality",
        "existence",
    ]
});

/// A stopword set merged from the two built-in lists plus any extras.
pub fn stopword_set(extra: &[String]) -> HashSet<String> {
    STOP_WORDS
        .iter()
        .chain(ADDITIONAL_STOPS.iter())
        .map(|w| (*w).to_string())
        .chain(extra.iter().map(|w| w.to_lowercase()))
        .collect()
}
