use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

/// Print the flattened view manifest of the package tree in the current
/// directory (`./<package>/<version>/...`).
#[derive(Parser)]
#[command(name = "viewgen")]
#[command(author, version, about, long_about = None)]
struct Cli {}

fn main() -> Result<()> {
    // Logs go to stderr; stdout carries only the manifest.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let _cli = Cli::parse();

    let summary = viewgen::generate(".", std::io::stdout().lock())
        .context("failed to generate view manifest")?;

    info!(
        matched = summary.matched,
        lines   = summary.lines,
        dirs    = summary.stats.dirs,
        elapsed = ?summary.stats.duration,
        "view manifest written"
    );

    Ok(())
}
