use calcpad::domain::key::Key;
use calcpad::domain::state::CalculatorState;
use calcpad::error::Result as CalcResult;
use calcpad::interfaces::csv::key_reader::{KeyReader, parse_key_sequence};
use calcpad::interfaces::csv::trace_writer::TraceWriter;
use calcpad::interfaces::keypad::{Keypad, KeypadConfig};
use clap::{Parser, ValueEnum};
use miette::{IntoDiagnostic, Result};
use serde::Serialize;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Final screen only
    Text,
    /// CSV row per key press
    Trace,
    /// Final state as JSON
    Json,
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Key script as CSV with a `key` column. Reads stdin when omitted.
    input: Option<PathBuf>,

    /// Whitespace-separated keys, e.g. "7 + 8 =". Takes precedence over INPUT.
    #[arg(long)]
    keys: Option<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Let "." through even when the display already has one.
    #[arg(long)]
    allow_repeated_decimal: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Snapshot<'a> {
    formatted_display: String,
    pending_expression: Option<String>,
    state: &'a CalculatorState,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let keys: Box<dyn Iterator<Item = CalcResult<Key>> + '_> = match (&cli.keys, &cli.input) {
        (Some(sequence), _) => Box::new(parse_key_sequence(sequence)),
        (None, Some(path)) => {
            let file = File::open(path).into_diagnostic()?;
            Box::new(KeyReader::new(file).keys())
        }
        (None, None) => Box::new(KeyReader::new(io::stdin().lock()).keys()),
    };

    let mut keypad = Keypad::new(KeypadConfig {
        guard_decimal_point: !cli.allow_repeated_decimal,
    });
    let stdout = io::stdout();
    let mut trace = (cli.format == OutputFormat::Trace).then(|| TraceWriter::new(stdout.lock()));

    let mut pressed = 0usize;
    for key_result in keys {
        match key_result {
            Ok(key) => {
                keypad.press(key);
                pressed += 1;
                if let Some(writer) = trace.as_mut() {
                    writer.write_step(key, &keypad).into_diagnostic()?;
                }
            }
            Err(e) => {
                warn!("Error reading key: {}", e);
            }
        }
    }
    info!(pressed, "key script replayed");

    match trace {
        Some(writer) => writer.finish().into_diagnostic()?,
        None => write_summary(cli.format, &keypad).into_diagnostic()?,
    }

    Ok(())
}

fn write_summary(format: OutputFormat, keypad: &Keypad) -> CalcResult<()> {
    let screen = keypad.screen();
    let mut out = io::stdout().lock();
    match format {
        OutputFormat::Json => {
            let snapshot = Snapshot {
                formatted_display: screen.main,
                pending_expression: screen.secondary,
                state: keypad.state(),
            };
            serde_json::to_writer_pretty(&mut out, &snapshot)?;
            writeln!(out)?;
        }
        OutputFormat::Text | OutputFormat::Trace => {
            writeln!(out, "{}", screen.main)?;
            if let Some(pending) = screen.secondary {
                writeln!(out, "{pending}")?;
            }
        }
    }
    Ok(())
}
