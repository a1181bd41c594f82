//! Error types for lyceum-core.

use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur while loading the source corpus.
#[derive(Error, Debug)]
pub enum CorpusError {
    /// A named source document is absent. Fatal: the run aborts before
    /// any output is written.
    #[error("missing source document: {path}")]
    MissingSourceDocument {
        /// Path that was expected to exist.
        path: String,
    },

    /// A source document exists but could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        /// Path of the unreadable document.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias using [`CorpusError`].
pub type CorpusResult<T> = Result<T, CorpusError>;

/// Errors that can occur while emitting output artifacts.
#[derive(Error, Debug)]
pub enum EmitError {
    /// Failed to create an output directory.
    #[error("failed to create output directory {path}: {source}")]
    CreateDir {
        /// Directory that could not be created.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the JSON artifact.
    #[error("failed to write JSON artifact {path}: {source}")]
    WriteJson {
        /// Artifact path.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a rendered word-cloud image.
    #[error("failed to write image {path}: {source}")]
    WriteImage {
        /// Image path.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The report could not be serialized.
    #[error("failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type alias using [`EmitError`].
pub type EmitResult<T> = Result<T, EmitError>;

/// Errors spanning a whole pipeline run.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Corpus loading failed.
    #[error(transparent)]
    Corpus(#[from] CorpusError),

    /// Output emission failed.
    #[error(transparent)]
    Emit(#[from] EmitError),
}

/// Result type alias using [`PipelineError`].
pub type PipelineResult<T> = Result<T, PipelineError>;
