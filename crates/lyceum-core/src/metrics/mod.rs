//! The metrics engine.
//!
//! Turns tokenized documents into the figures the artifact carries:
//! frequency tables, diversity ratios, tracked-term counts, length and
//! question statistics, sentiment scores, pairwise vocabulary overlap,
//! and author/global aggregates. Each concern is a pure function in its
//! own module; [`analyze_document`] orchestrates the per-document set.

pub mod aggregate;
pub mod diversity;
pub mod frequency;
pub mod overlap;
pub mod reports;
pub mod sentences;
pub mod sentiment;
pub mod terms;

pub use reports::{CorpusReport, DocumentReport, SCHEMA_VERSION};
pub use sentiment::{LexiconScorer, SentimentScorer};

use crate::corpus::DocumentSpec;
use crate::text::TokenSet;
use reports::{DocumentStatistics, SentimentScore, round_to};

/// Compute all per-document metrics.
///
/// A document with zero tokens still produces a complete report with
/// zero-valued ratios, keeping the artifact shape uniform.
#[tracing::instrument(skip_all, fields(id = %spec.id))]
pub fn analyze_document(
    spec: &DocumentSpec,
    tokens: &TokenSet,
    tracked_terms: &[String],
    top_k: usize,
    scorer: &dyn SentimentScorer,
) -> DocumentReport {
    let diversity = diversity::diversity(&tokens.content_tokens);
    let lengths = sentences::sentence_stats(tokens);

    let sentiment = if tokens.cleaned_text.is_empty() {
        SentimentScore::NEUTRAL
    } else {
        scorer.score(sentiment::sentiment_window(&tokens.cleaned_text))
    };

    DocumentReport {
        metadata: spec.clone(),
        statistics: DocumentStatistics {
            total_words: tokens.all_tokens.len(),
            unique_words: diversity.unique_words,
            content_words: diversity.total_words,
            vocabulary_diversity: round_to(diversity.ratio, 4),
            total_sentences: tokens.sentence_count,
            avg_word_length: round_to(lengths.avg_word_length, 2),
            avg_sentence_length: round_to(lengths.avg_sentence_length, 2),
            question_count: tokens.question_count,
            question_density: round_to(lengths.question_density, 4),
        },
        top_words: frequency::top_k_words(&tokens.content_tokens, top_k),
        // Terms are counted on the unfiltered stream: "being" and "good"
        // overlap with the stopword list.
        philosophical_terms: terms::count_terms(&tokens.all_tokens, tracked_terms),
        sentiment: SentimentScore {
            polarity: round_to(sentiment.polarity, 3),
            subjectivity: round_to(sentiment.subjectivity, 3),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    /// Contract stub: the core never depends on real scorer behavior.
    struct FixedScorer(SentimentScore);

    impl SentimentScorer for FixedScorer {
        fn score(&self, _text: &str) -> SentimentScore {
            self.0
        }
    }

    fn spec() -> DocumentSpec {
        DocumentSpec {
            id: "plato_phaedo".into(),
            author: "Plato".into(),
            title: "Phaedo".into(),
            filename: "plato_phaedo.txt".into(),
        }
    }

    fn tokenize(text: &str, stops: &[&str]) -> TokenSet {
        let stopwords: HashSet<String> = stops.iter().map(|w| (*w).to_string()).collect();
        crate::text::tokenize_document(&[text.to_string()], &stopwords)
    }

    #[test]
    fn stopword_filtered_frequency_and_diversity() {
        // "the" and "is" are stopwords; "good" is the only content word.
        let tokens = tokenize("The good. Good is good.", &["the", "is"]);
        let report = analyze_document(
            &spec(),
            &tokens,
            &["good".to_string()],
            50,
            &FixedScorer(SentimentScore::NEUTRAL),
        );

        assert_eq!(report.top_words.len(), 1);
        assert_eq!(report.top_words[0].word, "good");
        assert_eq!(report.top_words[0].count, 3);
        assert_eq!(report.statistics.unique_words, 1);
        assert_eq!(report.statistics.vocabulary_diversity, 1.0);
        assert_eq!(report.philosophical_terms[0].count, 3);
    }

    #[test]
    fn empty_document_yields_degenerate_report() {
        let tokens = tokenize("", &[]);
        let report = analyze_document(
            &spec(),
            &tokens,
            &["good".to_string()],
            50,
            &FixedScorer(SentimentScore { polarity: 0.9, subjectivity: 0.9 }),
        );

        assert_eq!(report.statistics.vocabulary_diversity, 0.0);
        assert_eq!(report.statistics.question_density, 0.0);
        assert!(report.top_words.is_empty());
        assert_eq!(report.philosophical_terms.len(), 1);
        // empty documents never reach the scorer
        assert_eq!(report.sentiment, SentimentScore::NEUTRAL);
    }

    #[test]
    fn diversity_zero_iff_no_content_words() {
        let empty = tokenize("the the the", &["the"]);
        let report = analyze_document(
            &spec(),
            &empty,
            &[],
            50,
            &FixedScorer(SentimentScore::NEUTRAL),
        );
        assert_eq!(report.statistics.content_words, 0);
        assert_eq!(report.statistics.vocabulary_diversity, 0.0);

        let nonempty = tokenize("wisdom", &[]);
        let report = analyze_document(
            &spec(),
            &nonempty,
            &[],
            50,
            &FixedScorer(SentimentScore::NEUTRAL),
        );
        assert!(report.statistics.vocabulary_diversity > 0.0);
    }

    #[test]
    fn sentiment_scores_are_recorded_rounded() {
        let tokens = tokenize("What is virtue? It is knowledge.", &[]);
        let report = analyze_document(
            &spec(),
            &tokens,
            &[],
            50,
            &FixedScorer(SentimentScore { polarity: 0.12345, subjectivity: 0.6789 }),
        );
        assert_eq!(report.sentiment.polarity, 0.123);
        assert_eq!(report.sentiment.subjectivity, 0.679);
        assert_eq!(report.statistics.question_count, 1);
        assert_eq!(report.statistics.total_sentences, 2);
    }
}
