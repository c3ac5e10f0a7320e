use std::io;

use clap::Parser;
use eyre::Context;
use style_types::{collect_document_types, load, report, tally, Format, DEFAULT_PATH};
use tracing_subscriber::EnvFilter;

/// Counts the "type" values in the style reference, most frequent first
#[derive(Parser, Debug)]
#[clap(version, color = clap::ColorChoice::Never)]
struct Args {
    /// text or json
    #[clap(short, long, arg_enum, default_value = "text")]
    format: Format,
}

fn main() -> eyre::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let document = load(DEFAULT_PATH)?;
    let types = collect_document_types(&document);
    let tally = tally(types);
    tracing::debug!(distinct = tally.len(), total = tally.total(), "tallied types");

    report(&tally, args.format, io::stdout().lock()).context("failed to write report")?;

    Ok(())
}
