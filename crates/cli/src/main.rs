//! Analyze an IVR call from a transcript file and a flowchart file.
//!
//! Usage: ivr-insights --transcript call.txt --flowchart flow.mmd [--summary]
//!
//! The report is printed to stdout as JSON. Logs go to stderr and are
//! controlled by `RUST_LOG` (default `warn`).

use anyhow::{bail, Context, Result};
use clap::Parser;
use ivr_insights_analysis::{AnalysisInput, AnalysisOptions, Analyzer};
use ivr_insights_parser::strip_code_fence;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "ivr-insights")]
#[command(about = "Score an IVR call flow from its transcript and flowchart")]
#[command(version)]
struct Cli {
    /// Transcript text file
    #[arg(long, short = 't')]
    transcript: Option<PathBuf>,

    /// Flowchart text file; a surrounding Markdown code fence is removed
    #[arg(long, short = 'f')]
    flowchart: Option<PathBuf>,

    /// JSON file with analysis options
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// Reject empty transcripts
    #[arg(long)]
    strict: bool,

    /// Print only the summary instead of the full report
    #[arg(long)]
    summary: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if cli.transcript.is_none() && cli.flowchart.is_none() {
        bail!("provide --transcript, --flowchart, or both");
    }

    let mut options = match &cli.config {
        Some(path) => AnalysisOptions::from_json(&read(path)?)
            .with_context(|| format!("Invalid config file '{}'", path.display()))?,
        None => AnalysisOptions::default(),
    };
    if cli.strict {
        options.strict = true;
    }

    let input = AnalysisInput {
        transcript: cli.transcript.as_deref().map(read).transpose()?,
        flowchart: cli
            .flowchart
            .as_deref()
            .map(|path| read(path).map(|text| strip_code_fence(&text).to_string()))
            .transpose()?,
    };

    tracing::info!(?options, "analyzing");
    let report = Analyzer::new(options).analyze_input(input)?;

    let json = if cli.summary {
        serde_json::to_string_pretty(&report.summary)?
    } else {
        report.to_json()?
    };
    println!("{}", json);
    Ok(())
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Error reading file '{}'", path.display()))
}
