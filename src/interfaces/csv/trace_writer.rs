use crate::domain::key::Key;
use crate::domain::numeric::number_to_string;
use crate::domain::operation::Operation;
use crate::error::Result;
use crate::interfaces::keypad::Keypad;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Serialize)]
struct TraceRow {
    key: String,
    display: String,
    previous: Option<String>,
    operation: Option<Operation>,
    waiting: bool,
}

/// Writes one CSV row per key press with the calculator state after it.
pub struct TraceWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> TraceWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_step(&mut self, key: Key, keypad: &Keypad) -> Result<()> {
        let state = keypad.state();
        self.writer.serialize(TraceRow {
            key: key.to_string(),
            display: keypad.screen().main,
            previous: state.previous_value.map(number_to_string),
            operation: state.operation,
            waiting: state.waiting_for_operand,
        })?;
        Ok(())
    }

    pub fn finish(mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
