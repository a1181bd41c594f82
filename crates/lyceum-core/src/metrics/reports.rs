//! Report structs for corpus analysis.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema`: the
//! JSON artifact is consumed by a static viewer that relies on a stable,
//! published shape.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::corpus::DocumentSpec;

/// Version stamp written into every artifact. Bump on any breaking
/// change to the report shape.
pub const SCHEMA_VERSION: u32 = 1;

/// The complete analysis artifact: six documents, two author
/// aggregates, one global aggregate, and the pairwise overlap matrix.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CorpusReport {
    /// Artifact schema version.
    pub schema_version: u32,
    /// Per-document analyses, in corpus order.
    pub documents: Vec<DocumentReport>,
    /// Per-author aggregates, in first-appearance order.
    pub authors: Vec<AggregateReport>,
    /// Aggregate over every document.
    pub global: AggregateReport,
    /// One entry per unordered document pair.
    pub vocabulary_overlap: Vec<OverlapEntry>,
    /// Corpus-level totals.
    pub summary: Summary,
}

/// Full analysis of a single document.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DocumentReport {
    /// Which document this is.
    pub metadata: DocumentSpec,
    /// Count and ratio statistics.
    pub statistics: DocumentStatistics,
    /// Top-K content words by descending count.
    pub top_words: Vec<WordCount>,
    /// Tracked philosophical term counts, in tracked order.
    pub philosophical_terms: Vec<TermCount>,
    /// Approximate sentiment of the document text.
    pub sentiment: SentimentScore,
}

/// Count and ratio statistics for one document.
///
/// A document with zero extractable tokens still produces this struct,
/// with every ratio reported as 0.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DocumentStatistics {
    /// All normalized words, stopwords included.
    pub total_words: usize,
    /// Distinct content words.
    pub unique_words: usize,
    /// Content words, stopwords excluded.
    pub content_words: usize,
    /// `unique_words / content_words`, 0 when the document is empty.
    pub vocabulary_diversity: f64,
    /// Sentences detected.
    pub total_sentences: usize,
    /// Mean character length of all words, 0 when empty.
    pub avg_word_length: f64,
    /// `total_words / total_sentences`, 0 when no sentences.
    pub avg_sentence_length: f64,
    /// Sentences ending with a question mark.
    pub question_count: usize,
    /// `question_count / total_sentences`, 0 when no sentences.
    pub question_density: f64,
}

/// A word paired with its occurrence count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct WordCount {
    /// The word.
    pub word: String,
    /// Number of occurrences.
    pub count: usize,
}

/// A tracked term paired with its occurrence count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TermCount {
    /// The tracked term.
    pub term: String,
    /// Exact-token-match occurrences.
    pub count: usize,
}

/// Polarity and subjectivity scores from the sentiment collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SentimentScore {
    /// Polarity in `[-1, 1]`; negative is negative sentiment.
    pub polarity: f64,
    /// Subjectivity in `[0, 1]`; higher is more opinionated.
    pub subjectivity: f64,
}

impl SentimentScore {
    /// The neutral score reported for empty documents.
    pub const NEUTRAL: Self = Self {
        polarity: 0.0,
        subjectivity: 0.0,
    };
}

/// Metrics over a merged token stream (one author, or all texts).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct AggregateReport {
    /// Aggregation key: the author name, or `all_texts`.
    pub key: String,
    /// Ids of the member documents, in corpus order.
    pub document_ids: Vec<String>,
    /// All words across members, stopwords included.
    pub total_words: usize,
    /// Distinct content words across members.
    pub unique_words: usize,
    /// Content words across members.
    pub content_words: usize,
    /// `unique_words / content_words`, 0 when empty.
    pub vocabulary_diversity: f64,
    /// Top-K content words of the merged stream.
    pub top_words: Vec<WordCount>,
    /// Tracked term counts summed over members.
    pub philosophical_terms: Vec<TermCount>,
}

/// Vocabulary overlap between one unordered pair of documents.
///
/// Symmetric by construction: the entry for `(a, b)` equals the entry
/// for `(b, a)` and is stored once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct OverlapEntry {
    /// First document id (corpus order).
    pub doc_a: String,
    /// Second document id (corpus order).
    pub doc_b: String,
    /// Size of the vocabulary intersection.
    pub shared_words: usize,
    /// `shared_words / min(|vocab_a|, |vocab_b|)`, 0 when either
    /// vocabulary is empty.
    pub overlap_ratio: f64,
    /// Alphabetically-first shared words, bounded by the configured
    /// sample size.
    pub sample_words: Vec<String>,
}

/// Corpus-level totals for the artifact's summary block.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Summary {
    /// Number of documents analyzed.
    pub total_documents: usize,
    /// Documents per author, in first-appearance order.
    pub documents_per_author: Vec<AuthorCount>,
}

/// An author paired with their document count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct AuthorCount {
    /// Author name.
    pub author: String,
    /// Number of documents by this author.
    pub documents: usize,
}

/// Round to `places` decimal places for presentation.
pub(crate) fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}
