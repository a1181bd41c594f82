//! lyceum CLI
#![deny(unsafe_code)]

use anyhow::Context;
use clap::Parser;
use lyceum::Cli;
use lyceum_core::config::ConfigLoader;
use lyceum_core::corpus::{PlainTextSource, default_corpus};
use lyceum_core::metrics::LexiconScorer;
use lyceum_core::pipeline;
use lyceum_core::render::SvgWordcloud;
use owo_colors::OwoColorize;
use tracing::debug;

mod observability;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.color.apply();

    if let Some(ref dir) = cli.chdir {
        std::env::set_current_dir(dir)
            .with_context(|| format!("failed to change directory to {}", dir.display()))?;
    }

    let cwd = std::env::current_dir().context("failed to determine current directory")?;
    let cwd = camino::Utf8PathBuf::try_from(cwd).map_err(|e| {
        anyhow::anyhow!(
            "current directory is not valid UTF-8: {}",
            e.into_path_buf().display()
        )
    })?;

    let mut loader = ConfigLoader::new().with_project_search(&cwd);
    if let Some(ref config_path) = cli.config {
        let config_path = camino::Utf8PathBuf::try_from(config_path.clone()).map_err(|e| {
            anyhow::anyhow!(
                "config path is not valid UTF-8: {}",
                e.into_path_buf().display()
            )
        })?;
        loader = loader.with_file(&config_path);
    }
    let mut config = loader.load().context("failed to load configuration")?;

    if let Some(ref dir) = cli.corpus_dir {
        config.corpus_dir = utf8_path(dir, "corpus directory")?;
    }
    if let Some(ref dir) = cli.output_dir {
        config.output_dir = utf8_path(dir, "output directory")?;
    }

    let filter = observability::env_filter(cli.quiet, cli.verbose, config.log_level.as_str());
    observability::init(filter);

    debug!(
        corpus_dir = %config.corpus_dir,
        output_dir = %config.output_dir,
        top_k = config.top_k,
        "CLI initialized"
    );

    let source = PlainTextSource::new(&config.corpus_dir);
    let output = pipeline::run(
        &config,
        &default_corpus(),
        &source,
        &LexiconScorer,
        &SvgWordcloud::default(),
    );

    match output {
        Ok(output) => {
            println!("{}", "Analysis complete.".green());
            println!("  {} {}", "Artifact:".cyan(), output.artifact);
            println!(
                "  {} {} images in {}",
                "Wordclouds:".cyan(),
                output.images.len(),
                config.output_dir.join(lyceum_core::emit::WORDCLOUD_RELDIR),
            );
            println!("  {} {}", "Documents:".cyan(), output.documents);
            Ok(())
        }
        Err(err) => {
            tracing::error!(error = %err, "fatal error");
            Err(err.into())
        }
    }
}

fn utf8_path(path: &std::path::Path, what: &str) -> anyhow::Result<camino::Utf8PathBuf> {
    camino::Utf8PathBuf::try_from(path.to_path_buf())
        .map_err(|e| anyhow::anyhow!("{what} is not valid UTF-8: {}", e.into_path_buf().display()))
}
