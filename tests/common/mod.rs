#![allow(dead_code)]

use calcpad::application::engine::CalculatorEngine;
use std::io::{Error, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Writes `tokens` as a one-column `key` CSV.
pub fn write_key_csv(path: &Path, tokens: &[&str]) -> Result<(), Error> {
    let mut wtr = csv::WriterBuilder::new().from_path(path)?;
    wtr.write_record(["key"])?;
    for token in tokens {
        wtr.write_record([*token])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Same as [`write_key_csv`] but into a temporary file that is removed on drop.
pub fn temp_key_csv(tokens: &[&str]) -> Result<NamedTempFile, Error> {
    let mut file = NamedTempFile::new()?;
    writeln!(file, "key")?;
    for token in tokens {
        writeln!(file, "{token}")?;
    }
    file.flush()?;
    Ok(file)
}

/// Replays whitespace-separated key tokens on a fresh engine.
pub fn run_keys(tokens: &str) -> CalculatorEngine {
    let mut engine = CalculatorEngine::new();
    for token in tokens.split_whitespace() {
        engine.press(token.parse().expect("valid key token"));
    }
    engine
}
