use crate::domain::key::Key;
use crate::error::{CalcError, Result};
use serde::Deserialize;
use std::io::Read;

#[derive(Debug, Deserialize)]
struct KeyRecord {
    key: Key,
}

/// Reads a key script from a CSV source.
///
/// The source needs a `key` header column; each following record is one key
/// press. Whitespace is trimmed and extra columns are tolerated.
pub struct KeyReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> KeyReader<R> {
    /// Creates a new `KeyReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and parses key presses.
    pub fn keys(self) -> impl Iterator<Item = Result<Key>> {
        self.reader
            .into_deserialize::<KeyRecord>()
            .map(|result| result.map(|record| record.key).map_err(CalcError::from))
    }
}

/// Parses whitespace-separated key tokens such as `"7 + 8 ="`.
pub fn parse_key_sequence(input: &str) -> impl Iterator<Item = Result<Key>> + '_ {
    input.split_whitespace().map(str::parse)
}
