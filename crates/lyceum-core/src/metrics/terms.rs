//! Tracked philosophical term counting.

use std::collections::HashMap;

use super::reports::TermCount;

/// Count tracked terms in a token stream.
///
/// Case folding already happened at tokenization; matching here is
/// exact token equality — no stemming, no substring matches. Every
/// tracked term appears in the result (possibly with count 0) so the
/// artifact shape is uniform across documents.
pub fn count_terms(tokens: &[String], terms: &[String]) -> Vec<TermCount> {
    let mut counts: HashMap<&str, usize> = terms.iter().map(|t| (t.as_str(), 0)).collect();
    for token in tokens {
        if let Some(count) = counts.get_mut(token.as_str()) {
            *count += 1;
        }
    }

    terms
        .iter()
        .map(|term| TermCount {
            term: term.clone(),
            count: counts[term.as_str()],
        })
        .collect()
}

/// Sum per-document term counts into an aggregate, preserving term order.
pub fn sum_terms(per_document: &[Vec<TermCount>], terms: &[String]) -> Vec<TermCount> {
    terms
        .iter()
        .enumerate()
        .map(|(idx, term)| TermCount {
            term: term.clone(),
            count: per_document.iter().map(|doc| doc[idx].count).sum(),
        })
        .collect()
}
