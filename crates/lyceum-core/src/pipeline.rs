//! The end-to-end analysis pipeline.
//!
//! Strictly forward: load → tokenize → compute metrics → serialize →
//! render. All computation finishes in memory before the first write,
//! so a missing source document aborts the run with no artifact
//! touched. In-progress state lives in an explicit [`CorpusAccumulator`]
//! passed through the stages.

use std::collections::HashSet;

use camino::Utf8PathBuf;
use tracing::info;

use crate::config::Config;
use crate::corpus::{DocumentSpec, ParagraphSource};
use crate::emit::{self, CloudJob};
use crate::error::PipelineResult;
use crate::metrics::aggregate::{AggregateMember, aggregate};
use crate::metrics::overlap::{Vocabulary, compute_overlaps};
use crate::metrics::reports::{AuthorCount, CorpusReport, SCHEMA_VERSION, Summary, WordCount};
use crate::metrics::{SentimentScorer, analyze_document};
use crate::render::WordcloudRenderer;
use crate::text::{TokenSet, tokenize_document};
use crate::word_lists;

/// Key used for the all-texts aggregate and its word cloud.
const GLOBAL_KEY: &str = "all_texts";

/// One fully analyzed document held by the accumulator.
struct AnalyzedDocument {
    spec: DocumentSpec,
    tokens: TokenSet,
    report: crate::metrics::DocumentReport,
}

/// Accumulates per-document results until the corpus is complete.
#[derive(Default)]
pub struct CorpusAccumulator {
    documents: Vec<AnalyzedDocument>,
}

impl CorpusAccumulator {
    fn push(&mut self, spec: DocumentSpec, tokens: TokenSet, report: crate::metrics::DocumentReport) {
        self.documents.push(AnalyzedDocument { spec, tokens, report });
    }

    /// Authors in first-appearance order.
    fn authors(&self) -> Vec<String> {
        let mut seen = Vec::new();
        for doc in &self.documents {
            if !seen.contains(&doc.spec.author) {
                seen.push(doc.spec.author.clone());
            }
        }
        seen
    }

    fn members_for(&self, author: Option<&str>) -> Vec<AggregateMember<'_>> {
        self.documents
            .iter()
            .filter(|d| author.is_none_or(|a| d.spec.author == a))
            .map(|d| AggregateMember {
                id: &d.spec.id,
                tokens: &d.tokens,
                term_counts: &d.report.philosophical_terms,
            })
            .collect()
    }
}

/// Paths written by a successful run.
#[derive(Debug)]
pub struct RunOutput {
    /// The JSON artifact.
    pub artifact: Utf8PathBuf,
    /// The rendered word clouds, in write order.
    pub images: Vec<Utf8PathBuf>,
    /// Number of documents analyzed.
    pub documents: usize,
}

/// Run the whole pipeline over `corpus` and write all artifacts.
#[tracing::instrument(skip_all, fields(documents = corpus.len()))]
pub fn run(
    config: &Config,
    corpus: &[DocumentSpec],
    source: &dyn ParagraphSource,
    scorer: &dyn SentimentScorer,
    renderer: &dyn WordcloudRenderer,
) -> PipelineResult<RunOutput> {
    let stopwords = word_lists::stopword_set(&config.extra_stopwords);
    let terms = config.effective_terms();

    // Stage 1+2: load and analyze every document. A missing source
    // errors out here, before any output exists.
    let mut acc = CorpusAccumulator::default();
    for spec in corpus {
        let paragraphs = source.paragraphs(spec)?;
        let tokens = tokenize_document(&paragraphs, &stopwords);
        let report = analyze_document(spec, &tokens, &terms, config.top_k, scorer);
        info!(
            id = %spec.id,
            total_words = report.statistics.total_words,
            unique_words = report.statistics.unique_words,
            diversity = report.statistics.vocabulary_diversity,
            "analyzed document"
        );
        acc.push(spec.clone(), tokens, report);
    }

    // Stage 3: cross-document metrics and aggregates.
    let (report, clouds) = assemble(&acc, config, &terms);

    // Stage 4: emit. Writes happen only after all computation succeeded.
    let artifact = emit::write_report(&report, &config.output_dir)?;
    let jobs: Vec<CloudJob<'_>> = clouds
        .iter()
        .map(|(stem, title, weights)| CloudJob {
            stem: stem.clone(),
            title: title.clone(),
            weights,
        })
        .collect();
    let images = emit::write_wordclouds(&jobs, renderer, &config.output_dir)?;

    Ok(RunOutput {
        artifact,
        images,
        documents: report.documents.len(),
    })
}

/// Assemble the final report plus the word-cloud weight lists.
///
/// Cloud sizing follows the corpus presentation: documents use the
/// top-K table as-is, author clouds 1.5×K, the global cloud 2×K.
fn assemble(
    acc: &CorpusAccumulator,
    config: &Config,
    terms: &[String],
) -> (CorpusReport, Vec<(String, String, Vec<WordCount>)>) {
    let author_k = config.top_k * 3 / 2;
    let global_k = config.top_k * 2;

    let vocabularies: Vec<HashSet<String>> = acc
        .documents
        .iter()
        .map(|d| d.tokens.content_tokens.iter().cloned().collect())
        .collect();
    let overlap_inputs: Vec<Vocabulary<'_>> = acc
        .documents
        .iter()
        .zip(&vocabularies)
        .map(|(d, words)| Vocabulary { id: &d.spec.id, words })
        .collect();
    let vocabulary_overlap = compute_overlaps(&overlap_inputs, config.overlap_sample_size);

    let mut clouds: Vec<(String, String, Vec<WordCount>)> = acc
        .documents
        .iter()
        .map(|d| {
            (
                d.spec.id.clone(),
                format!("{} by {}", d.spec.title, d.spec.author),
                d.report.top_words.clone(),
            )
        })
        .collect();

    let mut authors = Vec::new();
    for author in acc.authors() {
        let mut agg = aggregate(&author, &acc.members_for(Some(&author)), terms, author_k);
        clouds.push((
            format!("{}_combined", author.to_lowercase()),
            format!("{author} - All Works Combined"),
            agg.top_words.clone(),
        ));
        agg.top_words.truncate(config.top_k);
        authors.push(agg);
    }

    let mut global = aggregate(GLOBAL_KEY, &acc.members_for(None), terms, global_k);
    clouds.push((
        format!("{GLOBAL_KEY}_combined"),
        "All Philosophical Texts Combined".to_string(),
        global.top_words.clone(),
    ));
    global.top_words.truncate(config.top_k);

    let summary = Summary {
        total_documents: acc.documents.len(),
        documents_per_author: authors
            .iter()
            .map(|a| AuthorCount {
                author: a.key.clone(),
                documents: a.document_ids.len(),
            })
            .collect(),
    };

    let report = CorpusReport {
        schema_version: SCHEMA_VERSION,
        documents: acc.documents.iter().map(|d| d.report.clone()).collect(),
        authors,
        global,
        vocabulary_overlap,
        summary,
    };

    (report, clouds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::PlainTextSource;
    use crate::error::{CorpusError, PipelineError};
    use crate::metrics::reports::SentimentScore;
    use crate::render::SvgWordcloud;
    use camino::Utf8Path;

    struct NeutralScorer;

    impl SentimentScorer for NeutralScorer {
        fn score(&self, _text: &str) -> SentimentScore {
            SentimentScore::NEUTRAL
        }
    }

    fn spec(id: &str, author: &str, filename: &str) -> DocumentSpec {
        DocumentSpec {
            id: id.to_string(),
            author: author.to_string(),
            title: id.to_string(),
            filename: filename.to_string(),
        }
    }

    fn test_config(dir: &Utf8Path) -> Config {
        Config {
            corpus_dir: dir.to_path_buf(),
            output_dir: dir.join("out"),
            ..Config::default()
        }
    }

    #[test]
    fn full_run_writes_artifact_and_clouds() {
        let dir = tempfile::tempdir().unwrap();
        let root = Utf8Path::from_path(dir.path()).unwrap();
        std::fs::write(
            root.join("a.txt").as_std_path(),
            "What is justice? Justice is harmony of the soul.",
        )
        .unwrap();
        std::fs::write(
            root.join("b.txt").as_std_path(),
            "Virtue is a mean between excess and deficiency.",
        )
        .unwrap();

        let corpus = vec![spec("plato_republic", "Plato", "a.txt"), spec("aristotle_ethics", "Aristotle", "b.txt")];
        let config = test_config(root);
        let output = run(
            &config,
            &corpus,
            &PlainTextSource::new(root),
            &NeutralScorer,
            &SvgWordcloud::default(),
        )
        .unwrap();

        assert_eq!(output.documents, 2);
        assert!(output.artifact.exists());
        // 2 documents + 2 authors + 1 global
        assert_eq!(output.images.len(), 5);

        let raw = std::fs::read_to_string(output.artifact.as_std_path()).unwrap();
        let report: CorpusReport = serde_json::from_str(&raw).unwrap();
        assert_eq!(report.schema_version, SCHEMA_VERSION);
        assert_eq!(report.documents.len(), 2);
        assert_eq!(report.authors.len(), 2);
        assert_eq!(report.vocabulary_overlap.len(), 1);
        assert_eq!(report.summary.total_documents, 2);
    }

    #[test]
    fn missing_document_aborts_before_any_write() {
        let dir = tempfile::tempdir().unwrap();
        let root = Utf8Path::from_path(dir.path()).unwrap();
        std::fs::write(root.join("a.txt").as_std_path(), "Present text.").unwrap();

        let corpus = vec![spec("a", "Plato", "a.txt"), spec("b", "Plato", "absent.txt")];
        let config = test_config(root);
        let err = run(
            &config,
            &corpus,
            &PlainTextSource::new(root),
            &NeutralScorer,
            &SvgWordcloud::default(),
        )
        .unwrap_err();

        assert!(matches!(
            err,
            PipelineError::Corpus(CorpusError::MissingSourceDocument { .. })
        ));
        assert!(!config.output_dir.exists(), "no output may be written");
    }

    #[test]
    fn empty_document_gets_a_degenerate_entry() {
        let dir = tempfile::tempdir().unwrap();
        let root = Utf8Path::from_path(dir.path()).unwrap();
        std::fs::write(root.join("a.txt").as_std_path(), "The soul is immortal.").unwrap();
        std::fs::write(root.join("empty.txt").as_std_path(), "").unwrap();

        let corpus = vec![spec("a", "Plato", "a.txt"), spec("b", "Plato", "empty.txt")];
        let config = test_config(root);
        let output = run(
            &config,
            &corpus,
            &PlainTextSource::new(root),
            &NeutralScorer,
            &SvgWordcloud::default(),
        )
        .unwrap();

        let raw = std::fs::read_to_string(output.artifact.as_std_path()).unwrap();
        let report: CorpusReport = serde_json::from_str(&raw).unwrap();
        let empty_doc = &report.documents[1];
        assert_eq!(empty_doc.statistics.vocabulary_diversity, 0.0);
        assert_eq!(empty_doc.statistics.question_density, 0.0);
        assert!(empty_doc.top_words.is_empty());
        assert_eq!(empty_doc.philosophical_terms.len(), 16);
    }

    #[test]
    fn rerun_produces_identical_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let root = Utf8Path::from_path(dir.path()).unwrap();
        std::fs::write(
            root.join("a.txt").as_std_path(),
            "Knowledge and wisdom and truth. Truth above all.",
        )
        .unwrap();

        let corpus = vec![spec("a", "Plato", "a.txt")];
        let config = test_config(root);
        let source = PlainTextSource::new(root);

        let first = run(&config, &corpus, &source, &NeutralScorer, &SvgWordcloud::default()).unwrap();
        let bytes_a = std::fs::read(first.artifact.as_std_path()).unwrap();
        let second = run(&config, &corpus, &source, &NeutralScorer, &SvgWordcloud::default()).unwrap();
        let bytes_b = std::fs::read(second.artifact.as_std_path()).unwrap();
        assert_eq!(first.artifact, second.artifact);
        assert_eq!(bytes_a, bytes_b);
    }

    #[test]
    fn author_term_counts_sum_member_documents() {
        let dir = tempfile::tempdir().unwrap();
        let root = Utf8Path::from_path(dir.path()).unwrap();
        std::fs::write(root.join("a.txt").as_std_path(), "Virtue and justice. Virtue.").unwrap();
        std::fs::write(root.join("b.txt").as_std_path(), "Justice is virtue of the city.").unwrap();

        let corpus = vec![spec("a", "Plato", "a.txt"), spec("b", "Plato", "b.txt")];
        let config = test_config(root);
        let output = run(
            &config,
            &corpus,
            &PlainTextSource::new(root),
            &NeutralScorer,
            &SvgWordcloud::default(),
        )
        .unwrap();

        let raw = std::fs::read_to_string(output.artifact.as_std_path()).unwrap();
        let report: CorpusReport = serde_json::from_str(&raw).unwrap();
        let author = &report.authors[0];
        for (idx, term) in author.philosophical_terms.iter().enumerate() {
            let member_sum: usize = report
                .documents
                .iter()
                .map(|d| d.philosophical_terms[idx].count)
                .sum();
            assert_eq!(term.count, member_sum, "term {}", term.term);
        }
    }
}
