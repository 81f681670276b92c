use crate::domain::display::{ERROR_MARKER, format_display};
use crate::domain::key::{Digit, Key};
use crate::domain::numeric::{number_to_string, parse_float};
use crate::domain::operation::{Operation, compute};
use crate::domain::state::CalculatorState;
use crate::error::CalcError;
use tracing::{debug, trace};

/// The calculator state machine.
///
/// `CalculatorEngine` owns the state of a single session and applies one key
/// press at a time. Every method completes its whole transition before
/// returning, so the display is always consistent with the pending operation.
#[derive(Debug, Default, Clone)]
pub struct CalculatorEngine {
    state: CalculatorState,
}

impl CalculatorEngine {
    /// Creates an engine showing `0` with nothing pending.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resumes a session from a previously captured state.
    pub fn from_state(state: CalculatorState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    pub fn into_state(self) -> CalculatorState {
        self.state
    }

    /// The raw display buffer.
    pub fn display(&self) -> &str {
        &self.state.display
    }

    /// The display buffer as it should be rendered.
    pub fn formatted_display(&self) -> String {
        format_display(&self.state.display)
    }

    pub fn pending_expression(&self) -> Option<String> {
        self.state.pending_expression()
    }

    /// Whether the display has room for a decimal point.
    ///
    /// The engine itself never refuses a second `.`; this lets the input
    /// surface decide.
    pub fn accepts_decimal_point(&self) -> bool {
        !self.state.display.contains('.')
    }

    /// Applies a single key press.
    pub fn press(&mut self, key: Key) {
        match key {
            Key::Digit(d) => self.digit(d),
            Key::Operator(op) => self.operator(op),
            Key::Equals => self.equals(),
            Key::Clear => self.clear(),
        }
    }

    /// Appends a digit, or starts a fresh number after an operator, equals or error.
    pub fn digit(&mut self, d: Digit) {
        let c = d.as_char();
        if self.state.waiting_for_operand {
            self.state.display = c.to_string();
            self.state.waiting_for_operand = false;
        } else if self.state.display == "0" {
            self.state.display = c.to_string();
        } else {
            self.state.display.push(c);
        }
        trace!(digit = %c, display = %self.state.display, "digit entered");
    }

    /// Arms `op`, first evaluating any operation that is already pending.
    pub fn operator(&mut self, op: Operation) {
        let input_value = parse_float(&self.state.display);

        match self.state.previous_value {
            None => self.state.previous_value = Some(input_value),
            Some(previous) => {
                let current = if previous.is_nan() { 0.0 } else { previous };
                match compute(current, input_value, self.state.operation) {
                    Ok(result) => {
                        self.state.display = number_to_string(result);
                        self.state.previous_value = Some(result);
                    }
                    Err(e) => {
                        self.fail(e);
                        return;
                    }
                }
            }
        }

        self.state.waiting_for_operand = true;
        self.state.operation = Some(op);
        trace!(operation = %op, previous = ?self.state.previous_value, "operation armed");
    }

    /// Evaluates the pending operation against the display.
    ///
    /// Does nothing unless both a left operand and an operation are pending, so
    /// pressing equals repeatedly is harmless.
    pub fn equals(&mut self) {
        let (Some(previous), Some(op)) = (self.state.previous_value, self.state.operation) else {
            trace!("equals ignored, nothing pending");
            return;
        };

        let input_value = parse_float(&self.state.display);
        match compute(previous, input_value, Some(op)) {
            Ok(result) => {
                self.state.display = number_to_string(result);
                self.state.previous_value = None;
                self.state.operation = None;
                self.state.waiting_for_operand = true;
                trace!(display = %self.state.display, "equals evaluated");
            }
            Err(e) => self.fail(e),
        }
    }

    /// Resets the session to its initial state.
    pub fn clear(&mut self) {
        self.state = CalculatorState::default();
        trace!("cleared");
    }

    fn fail(&mut self, error: CalcError) {
        debug!(%error, "computation failed");
        self.state.display = ERROR_MARKER.to_string();
        self.state.previous_value = None;
        self.state.operation = None;
        self.state.waiting_for_operand = true;
    }
}
