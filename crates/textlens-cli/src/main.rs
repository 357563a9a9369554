mod input;

use std::io::{self, BufRead, Write};

use clap::Parser;
use textlens_core::AnalysisResult;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "textlens", version)]
#[command(
    about = "Read one line from stdin and print its word count, top keywords and sentiment as JSON"
)]
struct Cli {}

fn main() -> anyhow::Result<()> {
    let _cli = Cli::parse();

    // stdout carries only the JSON line; diagnostics go to stderr.
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    run(&mut stdin.lock(), &mut stdout.lock())?;
    Ok(())
}

/// Analyze the first line of `reader` and write one JSON line to `writer`.
///
/// A failing reader is not fatal: the text read before the failure is
/// analyzed instead.
///
/// # Errors
///
/// Returns an error only if writing to `writer` fails.
fn run<R: BufRead, W: Write>(reader: &mut R, writer: &mut W) -> anyhow::Result<AnalysisResult> {
    let text = input::read_first_line(reader).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "input stream failed; analyzing partial text");
        e.into_partial()
    });

    let result = textlens_core::analyze(&text);
    tracing::debug!(
        word_count = result.word_count,
        keywords = ?result.keywords,
        sentiment_score = result.sentiment_score,
        "analysis complete"
    );

    writeln!(writer, "{}", result.to_json_line()?)?;
    writer.flush()?;
    Ok(result)
}
