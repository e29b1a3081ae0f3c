//! im-stats CLI
//!
//! Summarises a sample given as arguments or on stdin.
//!
//! ```text
//! im-stats 1 3 5 7
//! echo "2.75,1.75,1.25" | im-stats --measure variance --precision 4
//! im-stats --config stats.toml --json < data.txt
//! ```

use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use im_stats::{parse_sample, render, Measure, StatsConfig, Summary};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "im-stats", version, about = "Descriptive statistics for a sample")]
struct Args {
    /// Sample values; read from stdin when none are given
    #[arg(allow_negative_numbers = true)]
    values: Vec<String>,

    /// Report configuration file (TOML, or JSON by extension)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Emit JSON instead of text
    #[arg(long)]
    json: bool,

    /// Decimal places for text output
    #[arg(short, long)]
    precision: Option<usize>,

    /// Measure to report (repeatable); defaults to all
    #[arg(short, long = "measure")]
    measures: Vec<Measure>,
}

fn run(args: Args) -> im_stats::Result<String> {
    let config = match &args.config {
        Some(path) => StatsConfig::load(path)?,
        None => StatsConfig::default(),
    }
    .with_overrides(args.json, args.precision, args.measures);

    let input = if args.values.is_empty() {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        args.values.join(" ")
    };

    let sample = parse_sample(&input)?;
    if sample.is_empty() {
        tracing::warn!("Empty sample, every measure is undefined");
    }

    render(&Summary::from_data(&sample), &config)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(Args::parse()) {
        Ok(report) => {
            println!("{report}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
