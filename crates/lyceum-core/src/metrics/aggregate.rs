//! Author-level and global aggregation.
//!
//! Aggregates merge member token streams (multiset union, corpus
//! order) and then apply the same formulas as per-document metrics, so
//! an aggregate's numbers are those of one long concatenated text.

use super::diversity::diversity;
use super::frequency::top_k_words;
use super::reports::{AggregateReport, TermCount, round_to};
use super::terms::sum_terms;
use crate::text::TokenSet;

/// One member document feeding an aggregate.
pub struct AggregateMember<'a> {
    /// Document id.
    pub id: &'a str,
    /// The document's tokenized text.
    pub tokens: &'a TokenSet,
    /// The document's tracked-term counts.
    pub term_counts: &'a [TermCount],
}

/// Merge member documents into one aggregate report.
///
/// `terms` is the tracked-term list in canonical order; term counts
/// sum over members, which equals recounting the merged stream because
/// matching is per-token.
#[tracing::instrument(skip_all, fields(key = %key, members = members.len()))]
pub fn aggregate(
    key: &str,
    members: &[AggregateMember<'_>],
    terms: &[String],
    top_k: usize,
) -> AggregateReport {
    let merged_content: Vec<String> = members
        .iter()
        .flat_map(|m| m.tokens.content_tokens.iter().cloned())
        .collect();
    let total_words: usize = members.iter().map(|m| m.tokens.all_tokens.len()).sum();

    let diversity = diversity(&merged_content);
    let per_member_terms: Vec<Vec<TermCount>> =
        members.iter().map(|m| m.term_counts.to_vec()).collect();

    AggregateReport {
        key: key.to_string(),
        document_ids: members.iter().map(|m| m.id.to_string()).collect(),
        total_words,
        unique_words: diversity.unique_words,
        content_words: diversity.total_words,
        vocabulary_diversity: round_to(diversity.ratio, 4),
        top_words: top_k_words(&merged_content, top_k),
        philosophical_terms: sum_terms(&per_member_terms, terms),
    }
}
