//! The fixed source corpus and paragraph extraction.
//!
//! Extraction from the original word-processor files is an external
//! concern; this module only defines the [`ParagraphSource`] seam and a
//! plain-text implementation for corpora that have already been
//! exported to `.txt`.

use camino::{Utf8Path, Utf8PathBuf};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CorpusError, CorpusResult};

/// One entry in the source corpus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DocumentSpec {
    /// Stable key used in the JSON artifact and image filenames.
    pub id: String,
    /// Author name, also the aggregation key.
    pub author: String,
    /// Work title.
    pub title: String,
    /// Source filename, resolved against the corpus directory.
    pub filename: String,
}

impl DocumentSpec {
    fn new(id: &str, author: &str, title: &str, filename: &str) -> Self {
        Self {
            id: id.to_string(),
            author: author.to_string(),
            title: title.to_string(),
            filename: filename.to_string(),
        }
    }
}

/// The six classical texts analyzed by default.
pub fn default_corpus() -> Vec<DocumentSpec> {
    vec![
        DocumentSpec::new("aristotle_politics", "Aristotle", "Politics", "aristotle_politics.txt"),
        DocumentSpec::new("aristotle_poetics", "Aristotle", "Poetics", "aristotle_poetics.txt"),
        DocumentSpec::new(
            "aristotle_ethics",
            "Aristotle",
            "Nicomachean Ethics",
            "aristotle_ethics.txt",
        ),
        DocumentSpec::new("plato_phaedo", "Plato", "Phaedo", "plato_phaedo.txt"),
        DocumentSpec::new("plato_republic", "Plato", "Republic", "plato_republic.txt"),
        DocumentSpec::new("plato_symposium", "Plato", "Symposium", "plato_symposium.txt"),
    ]
}

/// Produces the ordered paragraph text of a source document.
///
/// The word-processor extraction step lives behind this trait so the
/// pipeline and its tests never depend on a document-format library.
pub trait ParagraphSource {
    /// Return the non-empty paragraphs of `spec`'s document, in order.
    fn paragraphs(&self, spec: &DocumentSpec) -> CorpusResult<Vec<String>>;
}

/// Reads plain-text exports: paragraphs are blank-line-separated blocks.
#[derive(Debug, Clone)]
pub struct PlainTextSource {
    corpus_dir: Utf8PathBuf,
}

impl PlainTextSource {
    /// Create a source rooted at `corpus_dir`.
    pub fn new(corpus_dir: impl AsRef<Utf8Path>) -> Self {
        Self {
            corpus_dir: corpus_dir.as_ref().to_path_buf(),
        }
    }

    fn resolve(&self, spec: &DocumentSpec) -> Utf8PathBuf {
        self.corpus_dir.join(&spec.filename)
    }
}

impl ParagraphSource for PlainTextSource {
    fn paragraphs(&self, spec: &DocumentSpec) -> CorpusResult<Vec<String>> {
        let path = self.resolve(spec);
        if !path.exists() {
            return Err(CorpusError::MissingSourceDocument {
                path: path.into_string(),
            });
        }

        let raw = std::fs::read_to_string(path.as_std_path()).map_err(|source| {
            CorpusError::Read {
                path: path.clone().into_string(),
                source,
            }
        })?;

        let paragraphs: Vec<String> = raw
            .split("\n\n")
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty())
            .collect();

        debug!(id = %spec.id, paragraphs = paragraphs.len(), "extracted document");
        Ok(paragraphs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_corpus_has_six_texts_two_authors() {
        let corpus = default_corpus();
        assert_eq!(corpus.len(), 6);
        assert_eq!(corpus.iter().filter(|d| d.author == "Plato").count(), 3);
        assert_eq!(corpus.iter().filter(|d| d.author == "Aristotle").count(), 3);
    }

    #[test]
    fn ids_are_unique() {
        let corpus = default_corpus();
        let mut ids: Vec<_> = corpus.iter().map(|d| d.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 6);
    }

    #[test]
    fn plain_text_source_splits_paragraphs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plato_phaedo.txt");
        std::fs::write(&path, "First paragraph.\n\nSecond one.\n\n\n\nThird.").unwrap();

        let source = PlainTextSource::new(Utf8Path::from_path(dir.path()).unwrap());
        let spec = DocumentSpec::new("plato_phaedo", "Plato", "Phaedo", "plato_phaedo.txt");
        let paragraphs = source.paragraphs(&spec).unwrap();
        assert_eq!(paragraphs.len(), 3);
        assert_eq!(paragraphs[0], "First paragraph.");
    }

    #[test]
    fn missing_document_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = PlainTextSource::new(Utf8Path::from_path(dir.path()).unwrap());
        let spec = DocumentSpec::new("plato_phaedo", "Plato", "Phaedo", "nope.txt");
        let err = source.paragraphs(&spec).unwrap_err();
        assert!(matches!(err, CorpusError::MissingSourceDocument { .. }));
    }
}
