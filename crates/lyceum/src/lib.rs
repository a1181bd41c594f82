//! Library interface for the `lyceum` CLI.
//!
//! This crate exposes the argument parser as a library for testing and
//! documentation generation. The actual entry point is in `main.rs`.
//!
//! The tool has a single behavior — run the whole analysis pipeline —
//! so there are no subcommands, only overrides for paths and logging.

use clap::Parser;
use std::path::PathBuf;

/// Color output preference.
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect terminal capabilities automatically.
    #[default]
    Auto,
    /// Always emit colors.
    Always,
    /// Never emit colors.
    Never,
}

impl ColorChoice {
    /// Configure global color output based on this choice.
    ///
    /// Call this once at startup to set the color mode.
    pub fn apply(self) {
        match self {
            Self::Auto => {} // owo-colors auto-detects by default
            Self::Always => owo_colors::set_override(true),
            Self::Never => owo_colors::set_override(false),
        }
    }
}

const ENV_HELP: &str = "\
ENVIRONMENT VARIABLES:
    RUST_LOG             Log filter (e.g., debug, lyceum_core=trace)
    LYCEUM_CORPUS_DIR    Directory holding the source texts
    LYCEUM_OUTPUT_DIR    Directory receiving the artifacts
    LYCEUM_TOP_K         Frequency table size per document
";

/// Command-line interface definition for lyceum.
#[derive(Parser)]
#[command(name = "lyceum")]
#[command(about = "Descriptive statistics over a corpus of classical texts", long_about = None)]
#[command(version)]
#[command(after_long_help = ENV_HELP)]
pub struct Cli {
    /// Path to configuration file (overrides discovery)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Directory holding the source texts (overrides config)
    #[arg(long, value_name = "DIR")]
    pub corpus_dir: Option<PathBuf>,

    /// Directory receiving the JSON artifact and word clouds (overrides config)
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Run as if started in DIR
    #[arg(short = 'C', long, value_name = "DIR")]
    pub chdir: Option<PathBuf>,

    /// Only print errors (suppresses warnings/info)
    #[arg(short, long)]
    pub quiet: bool,

    /// More detail (repeatable; e.g. -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Colorize output
    #[arg(long, value_enum, default_value_t)]
    pub color: ColorChoice,
}
