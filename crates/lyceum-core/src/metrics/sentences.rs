//! Word-length, sentence-length, and question-density statistics.

use crate::text::TokenSet;

/// Length and question statistics for one document.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SentenceStats {
    /// Mean character length of all words, 0 when there are none.
    pub avg_word_length: f64,
    /// All words divided by sentences, 0 when there are no sentences.
    pub avg_sentence_length: f64,
    /// Question sentences divided by all sentences, 0 when there are
    /// no sentences.
    pub question_density: f64,
}

/// Compute length statistics over a tokenized document.
///
/// Word-based figures use the unfiltered token stream: stopwords count
/// toward word and sentence lengths even though they are excluded from
/// frequency analysis.
pub fn sentence_stats(tokens: &TokenSet) -> SentenceStats {
    let word_count = tokens.all_tokens.len();
    let avg_word_length = if word_count == 0 {
        0.0
    } else {
        let chars: usize = tokens.all_tokens.iter().map(|w| w.chars().count()).sum();
        chars as f64 / word_count as f64
    };

    let (avg_sentence_length, question_density) = if tokens.sentence_count == 0 {
        (0.0, 0.0)
    } else {
        (
            word_count as f64 / tokens.sentence_count as f64,
            tokens.question_count as f64 / tokens.sentence_count as f64,
        )
    };

    SentenceStats {
        avg_word_length,
        avg_sentence_length,
        question_density,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token_set(all: &[&str], sentences: usize, questions: usize) -> TokenSet {
        TokenSet {
            content_tokens: Vec::new(),
            all_tokens: all.iter().map(|w| (*w).to_string()).collect(),
            sentence_count: sentences,
            question_count: questions,
            cleaned_text: String::new(),
        }
    }

    #[test]
    fn average_lengths() {
        let stats = sentence_stats(&token_set(&["soul", "is", "deathless", "form"], 2, 1));
        assert_eq!(stats.avg_word_length, 19.0 / 4.0);
        assert_eq!(stats.avg_sentence_length, 2.0);
        assert_eq!(stats.question_density, 0.5);
    }

    #[test]
    fn zero_sentences_reports_zero_ratios() {
        let stats = sentence_stats(&token_set(&[], 0, 0));
        assert_eq!(stats.avg_word_length, 0.0);
        assert_eq!(stats.avg_sentence_length, 0.0);
        assert_eq!(stats.question_density, 0.0);
    }

    #[test]
    fn density_is_bounded_by_one() {
        let stats = sentence_stats(&token_set(&["why"], 3, 3));
        assert_eq!(stats.question_density, 1.0);
    }
}
