use std::{
    fs,
    io::{self, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::{ArgGroup, Parser};
use ticket_cleaner::{CleanResult, TicketCleaner};
use tracing_subscriber::EnvFilter;

/// Clean helpdesk ticket responses and optionally score them.
#[derive(Parser, Debug)]
#[command(name = "ticket-clean", version, about, long_about = None)]
#[command(group(ArgGroup::new("input").required(true).args(["text", "file"])))]
struct Cli {
    /// Raw ticket text to clean
    #[arg(long)]
    text: Option<String>,

    /// UTF-8 file(s) holding one raw ticket each
    #[arg(long, num_args = 1..)]
    file: Vec<PathBuf>,

    /// Also print a 0-100 quality score
    #[arg(long)]
    show_score: bool,

    /// Treat the input as HTML and flatten it first
    #[arg(long)]
    html: bool,

    /// Config file (.json/.toml) or inline JSON
    #[arg(long)]
    config: Option<String>,

    /// Print results as JSON
    #[arg(long)]
    json: bool,
}

/// Default level when `RUST_LOG` is unset or unparsable.
const DEFAULT_LOG_FILTER: &str = "ticket_cleaner=warn";

fn log_filter(rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

fn main() -> Result<()> {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(log_filter(rust_log.as_deref()))
        .init();

    let cli = Cli::parse();
    let stdout = io::stdout();
    run(cli, &mut stdout.lock())
}

fn run(cli: Cli, out: &mut impl Write) -> Result<()> {
    let mut builder = TicketCleaner::new().strip_html(cli.html);
    if let Some(config) = &cli.config {
        builder = builder.with_config(config);
    }
    let cleaner = builder.build().context("invalid cleaner config")?;

    // Read everything up front so a bad path prints nothing.
    let (labels, inputs): (Vec<Option<String>>, Vec<String>) = match cli.text {
        Some(text) => (vec![None], vec![text]),
        None => {
            let mut inputs = Vec::with_capacity(cli.file.len());
            for path in &cli.file {
                let raw = fs::read_to_string(path)
                    .with_context(|| format!("failed to read {}", path.display()))?;
                inputs.push(raw);
            }
            (cli.file.iter().map(|p| Some(p.display().to_string())).collect(), inputs)
        }
    };

    let results = cleaner.process_batch(inputs.as_slice(), cli.show_score);

    if cli.json {
        let json = match results.as_slice() {
            [single] => sonic_rs::to_string(single)?,
            many => sonic_rs::to_string(many)?,
        };
        writeln!(out, "{json}")?;
        return Ok(());
    }

    let several = results.len() > 1;
    for (label, result) in labels.iter().zip(&results) {
        if let Some(label) = label.as_deref().filter(|_| several) {
            writeln!(out, "==> {label} <==")?;
        }
        print_result(out, result)?;
    }

    Ok(())
}

fn print_result(out: &mut impl Write, result: &CleanResult) -> io::Result<()> {
    writeln!(out, "{}", result.cleaned_text)?;
    if let Some(score) = result.quality_score {
        writeln!(out, "\n[score] {score}")?;
    }
    Ok(())
}
