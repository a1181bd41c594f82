//! Approximate sentiment scoring.
//!
//! Sentiment is an external concern: the pipeline only calls a
//! [`SentimentScorer`] and records the two resulting scalars. The
//! shipped [`LexiconScorer`] is a small embedded-lexicon scorer;
//! callers wanting a real NLP backend implement the trait.

use std::collections::HashSet;
use std::sync::LazyLock;

use super::reports::SentimentScore;

/// How much of a document the scorer sees. Classical texts run long
/// and the opening pages are representative enough for an approximate
/// score.
pub const SENTIMENT_WINDOW_CHARS: usize = 5000;

/// Scores text for polarity (`[-1, 1]`) and subjectivity (`[0, 1]`).
pub trait SentimentScorer {
    /// Score the given text. Implementations must be deterministic.
    fn score(&self, text: &str) -> SentimentScore;
}

/// Positive polar words.
static POSITIVE_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "good", "best", "better", "noble", "just", "wise", "true", "beautiful", "fair",
        "excellent", "virtuous", "happy", "happiness", "pleasure", "love", "friend", "friendship",
        "harmony", "honor", "right", "great", "perfect", "divine", "blessed", "worthy", "praise",
        "courage", "temperate", "gentle", "pure",
    ]
    .into_iter()
    .collect()
});

/// Negative polar words.
static NEGATIVE_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "bad", "worst", "worse", "evil", "unjust", "foolish", "false", "ugly", "base", "vicious",
        "unhappy", "pain", "hate", "enemy", "discord", "shame", "wrong", "corrupt", "ignorant",
        "wicked", "coward", "fear", "death", "suffer", "suffering", "vice", "error", "blame",
        "miserable", "tyrant",
    ]
    .into_iter()
    .collect()
});

/// Words signaling opinion rather than description; they raise
/// subjectivity without moving polarity.
static SUBJECTIVE_MARKERS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "think", "believe", "seem", "seems", "surely", "certainly", "perhaps", "opinion", "feel",
        "suppose", "doubt", "agree", "deny", "admit", "wish", "hope", "ought", "should",
    ]
    .into_iter()
    .collect()
});

/// Embedded-lexicon sentiment scorer.
///
/// Polarity is the signed fraction of polar hits:
/// `(positive - negative) / (positive + negative)`. Subjectivity is the
/// share of tokens that are polar or opinion markers, scaled so typical
/// argumentative prose lands mid-range, clamped to `[0, 1]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconScorer;

impl LexiconScorer {
    /// Scaling factor lifting the subjective-token share into `[0, 1]`.
    const SUBJECTIVITY_SCALE: f64 = 10.0;
}

impl SentimentScorer for LexiconScorer {
    fn score(&self, text: &str) -> SentimentScore {
        let tokens: Vec<&str> = text
            .split(|c: char| !c.is_alphabetic())
            .filter(|t| !t.is_empty())
            .collect();
        if tokens.is_empty() {
            return SentimentScore::NEUTRAL;
        }

        let mut positive = 0usize;
        let mut negative = 0usize;
        let mut markers = 0usize;
        for token in &tokens {
            if POSITIVE_WORDS.contains(token) {
                positive += 1;
            } else if NEGATIVE_WORDS.contains(token) {
                negative += 1;
            } else if SUBJECTIVE_MARKERS.contains(token) {
                markers += 1;
            }
        }

        let polar = positive + negative;
        let polarity = if polar == 0 {
            0.0
        } else {
            (positive as f64 - negative as f64) / polar as f64
        };
        let subjectivity = (((polar + markers) as f64 / tokens.len() as f64)
            * Self::SUBJECTIVITY_SCALE)
            .min(1.0);

        SentimentScore {
            polarity,
            subjectivity,
        }
    }
}

/// Truncate `text` to the scoring window on a char boundary.
pub fn sentiment_window(text: &str) -> &str {
    match text.char_indices().nth(SENTIMENT_WINDOW_CHARS) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
