//! Command-line front end for the summarizer.
//!
//! Reads a text file, runs the frequency-based pipeline, and prints the
//! summary (or a JSON envelope with selection metadata) to stdout. All
//! failures — unreadable file, more sentences requested than available —
//! are reported on stderr with a nonzero exit.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use freqsum::Summarizer;

#[derive(Debug, Parser)]
#[command(name = "freqsum", version, about = "Frequency-based extractive text summarizer")]
struct Args {
    /// File containing the text to summarize
    filepath: PathBuf,

    /// Number of sentences to return
    #[arg(short, long, default_value_t = 7)]
    length: usize,

    /// Stop-word language code (en, de, fr, ...)
    #[arg(long, default_value = "en")]
    language: String,

    /// Emit the summary as JSON with selection metadata
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let content = fs::read_to_string(&args.filepath)
        .with_context(|| format!("could not read file {}", args.filepath.display()))?;

    let summarizer = Summarizer::new().with_language(&args.language);
    let summary = summarizer
        .run(&content, args.length)
        .context("use -l (--length) to adjust the requested sentence count")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("{}", summary.text);
    }
    Ok(())
}
