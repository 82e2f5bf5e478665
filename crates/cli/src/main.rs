use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use data_loader::MovieCatalog;
use ranking::{DEFAULT_TOP, RankingEngine, Report};
use std::io::{self, BufRead, BufWriter, IsTerminal, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

/// ReelStats - top movies by rating and by number of reviews
#[derive(Parser)]
#[command(name = "reel-stats")]
#[command(about = "Aggregate movie reviews and print top-N rankings", long_about = None)]
struct Cli {
    /// Movie catalog CSV (MovieID,MovieName,PubYear). Read from stdin if omitted
    #[arg(short, long)]
    movies: Option<PathBuf>,

    /// Review CSV (MovieID,UserID,Rating,ReviewDate). Read from stdin if omitted
    #[arg(short, long)]
    reviews: Option<PathBuf>,

    /// Number of movies listed per ranking
    #[arg(short, long, default_value_t = DEFAULT_TOP)]
    top: usize,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> ExitCode {
    // Logs go to stderr so stdout carries nothing but the report
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    match run(&cli, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {:#}", "**Error:".red().bold(), err);
            ExitCode::FAILURE
        }
    }
}

/// Load both inputs and write the report to `out`.
///
/// Nothing is written unless both files load completely.
fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<()> {
    let (movies_path, reviews_path) = resolve_input_paths(cli)?;
    tracing::debug!(
        "Reading movies from {} and reviews from {}",
        movies_path.display(),
        reviews_path.display()
    );

    let start = Instant::now();
    let catalog = MovieCatalog::load_from_files(&movies_path, &reviews_path)
        .context("Failed to load movie data")?;
    eprintln!(
        "{} Loaded {} movies and {} reviews in {:?}",
        "✓".green(),
        catalog.movie_count(),
        catalog.reviews_seen(),
        start.elapsed()
    );

    let engine = RankingEngine::standard();
    let report = Report::build(&catalog, &engine, cli.top);

    match cli.format {
        OutputFormat::Text => report.write_text(out).context("Failed to write report")?,
        OutputFormat::Json => report.write_json(out).context("Failed to write report")?,
    }
    out.flush().context("Failed to write report")?;

    Ok(())
}

/// Take each path from the command line, or else the next line of stdin.
///
/// Movies are always asked for before reviews.
fn resolve_input_paths(cli: &Cli) -> Result<(PathBuf, PathBuf)> {
    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    let mut lines = stdin.lock().lines();

    let movies = match &cli.movies {
        Some(path) => path.clone(),
        None => prompt_path(&mut lines, "movies", interactive)?,
    };
    let reviews = match &cli.reviews {
        Some(path) => path.clone(),
        None => prompt_path(&mut lines, "reviews", interactive)?,
    };

    Ok((movies, reviews))
}

fn prompt_path(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    label: &str,
    interactive: bool,
) -> Result<PathBuf> {
    if interactive {
        eprint!("{} file: ", label.cyan());
        io::stderr().flush().ok();
    }

    let line = lines
        .next()
        .transpose()
        .with_context(|| format!("Failed to read {} file name", label))?
        .unwrap_or_default();

    let name = line.trim();
    if name.is_empty() {
        bail!("cannot open file: no {} file name given", label);
    }
    Ok(PathBuf::from(name))
}
