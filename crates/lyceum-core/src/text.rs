//! Text normalization and tokenization.
//!
//! Provides cleaning, sentence splitting, and word tokenization for the
//! metrics engine. All downstream metrics consume the [`TokenSet`]
//! produced here, never raw text.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

/// Regex for whitespace runs collapsed during cleaning.
static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Minimum token length; shorter alphabetic fragments carry no signal
/// in translated classical prose.
const MIN_TOKEN_LEN: usize = 3;

/// Tokenized view of one document.
///
/// `content_tokens` is the stopword-filtered stream in document order,
/// not deduplicated. `all_tokens` keeps stopwords and feeds the
/// length/sentence statistics, matching how the raw counts are defined.
#[derive(Debug, Clone, Default)]
pub struct TokenSet {
    /// Normalized tokens with stopwords removed, in document order.
    pub content_tokens: Vec<String>,
    /// Normalized tokens including stopwords, in document order.
    pub all_tokens: Vec<String>,
    /// Number of sentences detected.
    pub sentence_count: usize,
    /// Number of sentences ending with a question mark.
    pub question_count: usize,
    /// Cleaned text the tokens were drawn from.
    pub cleaned_text: String,
}

impl TokenSet {
    /// Whether the document produced no content tokens.
    pub fn is_empty(&self) -> bool {
        self.content_tokens.is_empty()
    }
}

/// Lowercase and strip a paragraph sequence down to analyzable prose.
///
/// Characters outside `a-z`, whitespace, and basic punctuation
/// (`.,;:!?`) become spaces; whitespace runs collapse to one space.
pub fn clean_text(paragraphs: &[String]) -> String {
    let joined = paragraphs.join("\n").to_lowercase();
    let stripped: String = joined
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_whitespace() || ".,;:!?".contains(c) {
                c
            } else {
                ' '
            }
        })
        .collect();
    WHITESPACE_RUN.replace_all(&stripped, " ").trim().to_string()
}

/// Split cleaned text into sentences on terminal punctuation.
///
/// Runs of `.`, `?`, `!` collapse to a single boundary. Returns each
/// sentence together with whether it ended in a question mark.
pub fn split_sentences(text: &str) -> Vec<(String, bool)> {
    let mut sentences = Vec::new();
    let mut current = String::new();
    let mut terminator: Option<char> = None;

    for ch in text.chars() {
        if matches!(ch, '.' | '?' | '!') {
            // Question marks win within a terminator run: "what?!" asks.
            if terminator != Some('?') {
                terminator = Some(ch);
            }
            continue;
        }
        if let Some(term) = terminator.take() {
            push_sentence(&mut sentences, &mut current, term);
        }
        current.push(ch);
    }
    if let Some(term) = terminator {
        push_sentence(&mut sentences, &mut current, term);
    } else {
        let tail = current.trim();
        if !tail.is_empty() {
            sentences.push((tail.to_string(), false));
        }
    }

    sentences
}

fn push_sentence(sentences: &mut Vec<(String, bool)>, current: &mut String, terminator: char) {
    let sentence = current.trim().to_string();
    if !sentence.is_empty() {
        sentences.push((sentence, terminator == '?'));
    }
    current.clear();
}

/// Extract normalized word tokens from cleaned text.
///
/// Splits on whitespace, strips residual punctuation, and keeps purely
/// alphabetic tokens of at least [`MIN_TOKEN_LEN`] characters. When
/// `stopwords` is `Some`, tokens in the set are dropped.
pub fn extract_tokens(text: &str, stopwords: Option<&HashSet<String>>) -> Vec<String> {
    text.split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_alphabetic()))
        .filter(|w| w.len() >= MIN_TOKEN_LEN && w.chars().all(|c| c.is_ascii_lowercase()))
        .filter(|w| stopwords.is_none_or(|set| !set.contains(*w)))
        .map(str::to_string)
        .collect()
}

/// Tokenize one document's paragraphs into a [`TokenSet`].
///
/// Null/empty input yields an empty token set with sentence count 0.
#[tracing::instrument(skip_all, fields(paragraphs = paragraphs.len()))]
pub fn tokenize_document(paragraphs: &[String], stopwords: &HashSet<String>) -> TokenSet {
    let cleaned = clean_text(paragraphs);
    if cleaned.is_empty() {
        return TokenSet::default();
    }

    let sentences = split_sentences(&cleaned);
    let question_count = sentences.iter().filter(|(_, q)| *q).count();

    TokenSet {
        content_tokens: extract_tokens(&cleaned, Some(stopwords)),
        all_tokens: extract_tokens(&cleaned, None),
        sentence_count: sentences.len(),
        question_count,
        cleaned_text: cleaned,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stops(words: &[&str]) -> HashSet<String> {
        words.iter().map(|w| (*w).to_string()).collect()
    }

    #[test]
    fn clean_lowercases_and_strips() {
        let cleaned = clean_text(&["The GOOD — is  one?".to_string()]);
        assert_eq!(cleaned, "the good is one?");
    }

    #[test]
    fn digits_become_spaces() {
        let cleaned = clean_text(&["book 7 of the republic".to_string()]);
        assert_eq!(cleaned, "book of the republic");
    }

    #[test]
    fn sentences_split_on_terminators() {
        let s = split_sentences("what is justice? justice is harmony. indeed!");
        assert_eq!(s.len(), 3);
        assert!(s[0].1);
        assert!(!s[1].1);
        assert!(!s[2].1);
    }

    #[test]
    fn consecutive_terminators_collapse() {
        let s = split_sentences("is it so?! it is so... truly.");
        assert_eq!(s.len(), 3);
        assert!(s[0].1, "question mark wins inside a terminator run");
    }

    #[test]
    fn unterminated_tail_counts_as_sentence() {
        let s = split_sentences("the soul is immortal");
        assert_eq!(s.len(), 1);
        assert!(!s[0].1);
    }

    #[test]
    fn tokens_filter_short_and_stopwords() {
        let tokens = extract_tokens("the good is good, so good", Some(&stops(&["the", "is"])));
        assert_eq!(tokens, vec!["good", "good", "good"]);
    }

    #[test]
    fn empty_input_yields_empty_token_set() {
        let ts = tokenize_document(&[], &stops(&[]));
        assert!(ts.is_empty());
        assert_eq!(ts.sentence_count, 0);
        assert_eq!(ts.question_count, 0);

        let blank = tokenize_document(&["   ".to_string()], &stops(&[]));
        assert!(blank.is_empty());
        assert_eq!(blank.sentence_count, 0);
    }

    #[test]
    fn tokenize_counts_sentences_and_questions() {
        let paragraphs = vec![
            "What is virtue? Virtue is knowledge.".to_string(),
            "And knowledge is recollection.".to_string(),
        ];
        let ts = tokenize_document(&paragraphs, &stops(&["what", "is", "and"]));
        assert_eq!(ts.sentence_count, 3);
        assert_eq!(ts.question_count, 1);
        assert_eq!(
            ts.content_tokens,
            vec!["virtue", "virtue", "knowledge", "knowledge", "recollection"]
        );
        assert!(ts.all_tokens.contains(&"what".to_string()));
    }
}
