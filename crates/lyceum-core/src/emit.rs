//! Artifact emission.
//!
//! Writes the JSON report and the rendered word clouds. All metrics are
//! already computed by the time anything here runs; a failed write is
//! fatal for the run and nothing is rolled back.

use camino::{Utf8Path, Utf8PathBuf};
use tracing::info;

use crate::error::{EmitError, EmitResult};
use crate::metrics::reports::{CorpusReport, WordCount};
use crate::render::WordcloudRenderer;

/// Relative path of the JSON artifact under the output directory.
pub const ARTIFACT_RELPATH: &str = "data/analysis.json";

/// Relative directory for word clouds under the output directory.
pub const WORDCLOUD_RELDIR: &str = "wordclouds";

/// One word cloud to render: output stem, display title, weights.
pub struct CloudJob<'a> {
    /// Filename stem (no extension).
    pub stem: String,
    /// Human-readable title drawn on the image.
    pub title: String,
    /// Weighted words, descending by count.
    pub weights: &'a [WordCount],
}

/// Serialize the report to `<output_dir>/data/analysis.json`,
/// overwriting any prior artifact.
#[tracing::instrument(skip_all, fields(output_dir = %output_dir))]
pub fn write_report(report: &CorpusReport, output_dir: &Utf8Path) -> EmitResult<Utf8PathBuf> {
    let path = output_dir.join(ARTIFACT_RELPATH);
    ensure_parent(&path)?;

    let json = serde_json::to_string_pretty(report)?;
    std::fs::write(path.as_std_path(), json).map_err(|source| EmitError::WriteJson {
        path: path.clone().into_string(),
        source,
    })?;

    info!(path = %path, documents = report.documents.len(), "wrote JSON artifact");
    Ok(path)
}

/// Render and write every requested word cloud.
#[tracing::instrument(skip_all, fields(clouds = jobs.len()))]
pub fn write_wordclouds(
    jobs: &[CloudJob<'_>],
    renderer: &dyn WordcloudRenderer,
    output_dir: &Utf8Path,
) -> EmitResult<Vec<Utf8PathBuf>> {
    let dir = output_dir.join(WORDCLOUD_RELDIR);
    std::fs::create_dir_all(dir.as_std_path()).map_err(|source| EmitError::CreateDir {
        path: dir.clone().into_string(),
        source,
    })?;

    let mut written = Vec::with_capacity(jobs.len());
    for job in jobs {
        let path = dir.join(format!("{}.{}", job.stem, renderer.file_extension()));
        let bytes = renderer.render(&job.title, job.weights);
        std::fs::write(path.as_std_path(), bytes).map_err(|source| EmitError::WriteImage {
            path: path.clone().into_string(),
            source,
        })?;
        info!(path = %path, words = job.weights.len(), "wrote wordcloud");
        written.push(path);
    }

    Ok(written)
}

fn ensure_parent(path: &Utf8Path) -> EmitResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent.as_std_path()).map_err(|source| EmitError::CreateDir {
            path: parent.to_string(),
            source,
        })?;
    }
    Ok(())
}
