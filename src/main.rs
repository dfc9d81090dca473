use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use rapid_wordfreq::pipeline::StageTimingObserver;
use rapid_wordfreq::{AnalysisReport, AnalysisSpec, FileSource, Pipeline, StopwordSpec, WordFreqError};

/// Word-frequency statistics for a text file
#[derive(Parser)]
#[command(name = "rapid-wordfreq", version, about)]
struct Cli {
    /// Corpus text file.
    #[arg(default_value = "alice29.txt")]
    corpus: PathBuf,

    /// Whitespace-delimited stopword list.
    #[arg(long, short = 's', default_value = "stopwords.txt", conflicts_with = "language")]
    stopwords: PathBuf,

    /// Use a built-in stopword list instead of a file (e.g. "en").
    #[arg(long)]
    language: Option<String>,

    /// Number of top words to report.
    #[arg(long, short = 'n', default_value_t = 10)]
    top: usize,

    /// Aggregate in this many parallel shards.
    #[arg(long, default_value_t = 1)]
    shards: usize,

    /// JSON analysis spec; overrides the stopword/top/shard flags.
    #[arg(long)]
    spec: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let Some(WordFreqError::EmptyCorpus) = err.downcast_ref::<WordFreqError>() {
                eprintln!("Error: no tokens were processed from {}", cli.corpus.display());
            } else {
                eprintln!("Error: {err:#}");
            }
            ExitCode::FAILURE
        }
    }
}

fn build_spec(cli: &Cli) -> anyhow::Result<AnalysisSpec> {
    if let Some(path) = &cli.spec {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("reading spec {}", path.display()))?;
        return Ok(AnalysisSpec::from_json(&json)?);
    }

    let stopwords = match &cli.language {
        Some(language) => StopwordSpec::language(language.clone()),
        None => StopwordSpec::path(cli.stopwords.clone()),
    };
    let mut spec = AnalysisSpec::new(stopwords).with_top_n(cli.top);
    if cli.shards > 1 {
        spec = spec.with_shards(cli.shards);
    }
    Ok(spec)
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let spec = build_spec(cli)?;
    let mut observer = StageTimingObserver::new();

    let pipeline = match Pipeline::from_spec_observed(&spec, &mut observer) {
        Ok(p) => p,
        Err(WordFreqError::InvalidSpec(report)) => {
            for err in report.errors() {
                eprintln!("{err}");
            }
            anyhow::bail!("invalid analysis spec");
        }
        Err(err) => return Err(err.into()),
    };

    let report = pipeline.run(&FileSource::new(&cli.corpus), &mut observer)?;

    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => print_text(&report),
    }

    for (stage, stage_report) in observer.reports() {
        tracing::debug!(stage, elapsed = ?stage_report.elapsed(), "stage timing");
    }
    Ok(())
}

fn print_text(report: &AnalysisReport) {
    println!("Stopwords loaded: {} words", report.stopword_count);
    println!(
        "Text processing complete: {} total tokens processed, {} unique words remaining",
        report.total_tokens, report.unique_word_count
    );

    println!();
    println!("Top {} words:", report.top_n);
    for (rank, entry) in report.top_words.iter().enumerate() {
        println!("{:>3}. {}: {}", rank + 1, entry.word, entry.count);
    }

    println!();
    println!("Total count of top {} words: {}", report.top_words.len(), report.top_n_count);
    println!(
        "Ratio (top {} words / total tokens): {:.6}",
        report.top_words.len(),
        report.top_n_ratio
    );

    println!();
    println!("Unique word count: {}", report.unique_word_count);
    println!("Total characters: {}", report.total_characters);
    println!("Average word length: {:.4} characters", report.average_word_length);
}
