use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
    process::ExitCode,
};

use anyhow::{Context, Result};
use clap::Parser;
use soup_recommender::{Config, Recommender};
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Recommend catalog titles similar to the ones given
#[derive(Parser, Debug)]
#[command(
    name = "soup-recommender",
    version,
    about = "Recommend titles that share country, director or cast with a given title",
    long_about = "Recommend titles that share country, director or cast with a given title.

With no TITLE arguments, titles are read from stdin, one per line, until EOF.

EXAMPLES:
  soup-recommender --data netflixData.csv \"Black Mirror\"
  soup-recommender -n 5 --scores \"Inception\" \"Leon\"
  cat titles.txt | soup-recommender"
)]
struct Args {
    /// CSV catalog with Title, Production Country, Director and Cast columns
    #[arg(long, value_name = "PATH", env = "RECOMMENDER_DATA_PATH")]
    data: Option<PathBuf>,

    /// Number of recommendations per title
    #[arg(short = 'n', long = "count", value_name = "N", env = "RECOMMENDER_TOP_N")]
    count: Option<usize>,

    /// Print the similarity score next to each title
    #[arg(long)]
    scores: bool,

    /// Logging verbosity level, overridden by RUST_LOG
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,

    /// Titles to look up
    #[arg(value_name = "TITLE")]
    titles: Vec<String>,
}

fn setup_logging(log_level: &str) {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level)))
        .init();
}

/// CLI flags win over the environment
fn resolve_config(args: &Args) -> Result<Config> {
    let mut config = Config::from_env().context("Failed to read configuration")?;
    if let Some(path) = &args.data {
        config.data_path = path.clone();
    }
    if let Some(n) = args.count {
        config.top_n = n;
    }
    if let Some(level) = &args.log_level {
        config.log_level = level.clone();
    }
    Ok(config)
}

fn print_recommendations(out: &mut impl Write, recommender: &Recommender, title: &str, n: usize, scores: bool) -> io::Result<()> {
    let recs = recommender.scored_recommendations(title, n);
    if recs.is_empty() {
        eprintln!("No recommendations for \"{}\"", title.trim());
        return Ok(());
    }
    for (rec, score) in recs {
        if scores {
            writeln!(out, "{:.4}\t{}", score, rec)?;
        } else {
            writeln!(out, "{}", rec)?;
        }
    }
    Ok(())
}

fn run(args: Args, config: Config) -> Result<()> {
    let recommender = Recommender::from_config(&config).with_context(|| {
        format!("Failed to initialize recommender from {}", config.data_path.display())
    })?;
    info!(items = recommender.len(), "accepting queries");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if !args.titles.is_empty() {
        for title in &args.titles {
            print_recommendations(&mut out, &recommender, title, config.top_n, args.scores)?;
        }
        return Ok(());
    }

    for line in io::stdin().lock().lines() {
        let line = line.context("Failed to read title from stdin")?;
        if line.trim().is_empty() {
            continue;
        }
        print_recommendations(&mut out, &recommender, &line, config.top_n, args.scores)?;
        out.flush()?;
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    let config = match resolve_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            return ExitCode::FAILURE;
        }
    };
    setup_logging(&config.log_level);

    match run(args, config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
