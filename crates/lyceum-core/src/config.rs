//! Configuration loading and discovery.
//!
//! Configuration is discovered by walking up from the current directory
//! and merged via figment. Precedence (highest to lowest):
//!
//! 1. `LYCEUM_` environment variables
//! 2. Explicit files (`--config`)
//! 3. Project config (`lyceum.<ext>` / `.lyceum.<ext>`, closest wins)
//! 4. Default values
//!
//! Where `<ext>` is one of `toml`, `yaml`, `yml`, `json`.
//!
//! The stopword and tracked-term defaults live in [`crate::word_lists`];
//! config can extend the stopwords (`extra_stopwords`) and replace the
//! tracked terms (`tracked_terms`).

use camino::{Utf8Path, Utf8PathBuf};
use figment::Figment;
use figment::providers::{Env, Format, Json, Serialized, Toml, Yaml};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};
use crate::word_lists;

/// Application name used for config file discovery.
const APP_NAME: &str = "lyceum";

/// Supported config file extensions, in merge order.
const CONFIG_EXTENSIONS: &[&str] = &["toml", "yaml", "yml", "json"];

/// Pipeline configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Log level for the application (e.g., "debug", "info", "warn", "error").
    pub log_level: LogLevel,
    /// Directory holding the exported source texts.
    pub corpus_dir: Utf8PathBuf,
    /// Directory receiving the JSON artifact and word clouds.
    pub output_dir: Utf8PathBuf,
    /// Frequency table size per document.
    pub top_k: usize,
    /// Maximum shared words listed per overlap entry.
    pub overlap_sample_size: usize,
    /// Stopwords added on top of the built-in lists.
    pub extra_stopwords: Vec<String>,
    /// Tracked philosophical terms. Omit to use the built-in sixteen.
    pub tracked_terms: Option<Vec<String>>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: LogLevel::default(),
            corpus_dir: Utf8PathBuf::from("corpus"),
            output_dir: Utf8PathBuf::from("output"),
            top_k: 50,
            overlap_sample_size: 20,
            extra_stopwords: Vec::new(),
            tracked_terms: None,
        }
    }
}

impl Config {
    /// The effective tracked-term list: configured terms, lowercased,
    /// or the built-in closed set.
    pub fn effective_terms(&self) -> Vec<String> {
        self.tracked_terms.as_ref().map_or_else(
            || {
                word_lists::PHILOSOPHICAL_TERMS
                    .iter()
                    .map(|t| (*t).to_string())
                    .collect()
            },
            |terms| terms.iter().map(|t| t.to_lowercase()).collect(),
        )
    }
}

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Verbose output for debugging and development.
    Debug,
    /// Standard operational information (default).
    #[default]
    Info,
    /// Warnings about potential issues.
    Warn,
    /// Errors that indicate failures.
    Error,
}

impl LogLevel {
    /// Returns the log level as a lowercase string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// Builder for discovering and merging configuration sources.
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    project_search_root: Option<Utf8PathBuf>,
    boundary_marker: Option<String>,
    explicit_files: Vec<Utf8PathBuf>,
}

impl ConfigLoader {
    /// Create a new config loader with default settings.
    pub fn new() -> Self {
        Self {
            project_search_root: None,
            boundary_marker: Some(".git".to_string()),
            explicit_files: Vec::new(),
        }
    }

    /// Set the starting directory for project config search.
    pub fn with_project_search<P: AsRef<Utf8Path>>(mut self, path: P) -> Self {
        self.project_search_root = Some(path.as_ref().to_path_buf());
        self
    }

    /// Add an explicit config file, loaded after discovered files.
    pub fn with_file<P: AsRef<Utf8Path>>(mut self, path: P) -> Self {
        self.explicit_files.push(path.as_ref().to_path_buf());
        self
    }

    /// Load configuration, merging all discovered sources.
    #[tracing::instrument(skip(self), fields(search_root = ?self.project_search_root))]
    pub fn load(self) -> ConfigResult<Config> {
        tracing::debug!("loading configuration");
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

        if let Some(ref root) = self.project_search_root {
            for pc in self.find_project_configs(root) {
                figment = Self::merge_file(figment, &pc);
            }
        }

        for file in &self.explicit_files {
            figment = Self::merge_file(figment, file);
        }

        // Environment variables (highest precedence)
        // LYCEUM_TOP_K=30, LYCEUM_LOG_LEVEL=debug, etc.
        figment = figment.merge(Env::prefixed("LYCEUM_").lowercase(true));

        let config: Config = figment
            .extract()
            .map_err(|e| ConfigError::Deserialize(Box::new(e)))?;
        tracing::debug!(log_level = config.log_level.as_str(), "configuration loaded");
        Ok(config)
    }

    /// Find project config files by walking up from the given directory.
    ///
    /// Returns all matching files from the closest directory with any
    /// match, ordered low-to-high precedence: dotfiles before regular
    /// files.
    fn find_project_configs(&self, start: &Utf8Path) -> Vec<Utf8PathBuf> {
        let mut current = Some(start.to_path_buf());

        while let Some(dir) = current {
            let mut found = Vec::new();

            for ext in CONFIG_EXTENSIONS {
                let dotfile = dir.join(format!(".{APP_NAME}.{ext}"));
                if dotfile.is_file() {
                    found.push(dotfile);
                }
            }
            for ext in CONFIG_EXTENSIONS {
                let regular = dir.join(format!("{APP_NAME}.{ext}"));
                if regular.is_file() {
                    found.push(regular);
                }
            }

            if !found.is_empty() {
                return found;
            }

            // Check for the boundary marker AFTER checking config files,
            // so a config next to the marker is still found.
            if let Some(ref marker) = self.boundary_marker
                && dir.join(marker).exists()
                && dir != start
            {
                break;
            }

            current = dir.parent().map(Utf8Path::to_path_buf);
        }

        Vec::new()
    }

    /// Merge a config file into the figment, detecting format from extension.
    fn merge_file(figment: Figment, path: &Utf8Path) -> Figment {
        match path.extension() {
            Some("yaml" | "yml") => figment.merge(Yaml::file_exact(path.as_str())),
            Some("json") => figment.merge(Json::file_exact(path.as_str())),
            _ => figment.merge(Toml::file_exact(path.as_str())),
        }
    }
}
