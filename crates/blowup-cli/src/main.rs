//! CLI binary for the blow-up transform: feed words through the gap/energy
//! pipeline and print the rendered results.

mod fixtures;

use anyhow::{Context, Result, bail};
use blowup_core::render;
use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "blowup", about = "Gap-driven blow-up transform for symbol sequences")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Transform words and print one result per line
    Run {
        /// Words to transform; reads lines from stdin when absent
        words: Vec<String>,

        /// Read input lines from a file instead
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },

    /// Run the bundled acceptance fixtures and report mismatches
    Demo {
        /// Run only the first N fixtures
        #[arg(long)]
        limit: Option<usize>,
    },
}

/// Output format for the run subcommand.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    /// Rendered text: literals and decimal energies, concatenated
    Text,
    /// JSON token array per input line
    Json,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Run {
            words,
            file,
            format,
        } => cmd_run(words, file.as_deref(), format),
        Commands::Demo { limit } => cmd_demo(limit),
    }
}

/// Collect input words: explicit arguments, lines of a file, or stdin lines.
fn gather_words(words: Vec<String>, file: Option<&Path>) -> Result<Vec<String>> {
    if let Some(path) = file {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read input from {}", path.display()))?;
        return Ok(content.lines().map(str::to_string).collect());
    }
    if !words.is_empty() {
        return Ok(words);
    }
    tracing::debug!("no words given, reading from stdin");
    let mut lines = Vec::new();
    for line in io::stdin().lock().lines() {
        lines.push(line.context("failed to read from stdin")?);
    }
    Ok(lines)
}

fn cmd_run(words: Vec<String>, file: Option<&Path>, format: Format) -> Result<()> {
    let words = gather_words(words, file)?;
    tracing::debug!(count = words.len(), "transforming words");

    let mut out = io::stdout().lock();
    for word in &words {
        let symbols: Vec<char> = word.chars().collect();
        let tokens = blowup_core::transform(&symbols)
            .with_context(|| format!("failed to transform {word:?}"))?;
        match format {
            Format::Text => {
                render::write_tokens(&mut out, &tokens).context("failed to write to stdout")?;
            }
            Format::Json => {
                serde_json::to_writer(&mut out, &tokens).context("failed to serialize tokens")?;
            }
        }
        writeln!(out)?;
    }
    Ok(())
}

fn cmd_demo(limit: Option<usize>) -> Result<()> {
    let mut fixtures = fixtures::parse(fixtures::BUNDLED)?;
    if let Some(limit) = limit {
        fixtures.truncate(limit);
    }

    let total = fixtures.len();
    let mut failed = 0;
    for (i, fixture) in fixtures.iter().enumerate() {
        let got = blowup_core::blow_up(&fixture.input)
            .with_context(|| format!("failed to transform {:?}", fixture.input))?;
        let ok = got == fixture.expected;
        if !ok {
            failed += 1;
        }
        println!(
            "{}: {:?} -> {:?} (expected {:?}, {})",
            i + 1,
            fixture.input,
            got,
            fixture.expected,
            if ok { "ok" } else { "FAIL" }
        );
    }

    if failed > 0 {
        bail!("{failed} of {total} fixtures failed");
    }
    tracing::info!(total, "all fixtures passed");
    Ok(())
}
