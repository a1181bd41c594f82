//! Core library for lyceum.
//!
//! This crate computes descriptive statistics over a fixed corpus of
//! classical texts and emits a versioned JSON artifact plus word-cloud
//! images. The `lyceum` CLI is a thin wrapper around [`pipeline::run`].
//!
//! # Modules
//!
//! - [`config`] - Configuration loading and management
//! - [`corpus`] - Document specs and the paragraph-extraction seam
//! - [`text`] - Normalization, sentence splitting, tokenization
//! - [`metrics`] - Frequency, diversity, terms, sentiment, overlap
//! - [`render`] - Word-cloud rendering seam
//! - [`emit`] - Artifact writing
//! - [`pipeline`] - The end-to-end run
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```no_run
//! use lyceum_core::config::Config;
//! use lyceum_core::corpus::{PlainTextSource, default_corpus};
//! use lyceum_core::metrics::LexiconScorer;
//! use lyceum_core::pipeline;
//! use lyceum_core::render::SvgWordcloud;
//!
//! let config = Config::default();
//! let source = PlainTextSource::new(&config.corpus_dir);
//! let output = pipeline::run(
//!     &config,
//!     &default_corpus(),
//!     &source,
//!     &LexiconScorer,
//!     &SvgWordcloud::default(),
//! )
//! .expect("pipeline failed");
//! println!("wrote {}", output.artifact);
//! ```
#![deny(unsafe_code)]

pub mod config;
pub mod corpus;
pub mod emit;
pub mod error;
pub mod metrics;
pub mod pipeline;
pub mod render;
pub mod text;
pub mod word_lists;

pub use config::{Config, ConfigLoader, LogLevel};
pub use error::{ConfigError, ConfigResult, CorpusError, EmitError, PipelineError};
