use super::display::ERROR_MARKER;
use super::numeric::number_to_string;
use super::operation::Operation;
use serde::{Deserialize, Serialize};

/// The complete state of one calculator session.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorState {
    /// Raw display buffer: digits being entered, the last result, or the error marker.
    pub display: String,
    /// Left-hand operand of the pending operation.
    pub previous_value: Option<f64>,
    /// Operation waiting for its right-hand operand.
    pub operation: Option<Operation>,
    /// Set after operator, equals and errors; the next digit starts a fresh number.
    pub waiting_for_operand: bool,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self {
            display: "0".to_string(),
            previous_value: None,
            operation: None,
            waiting_for_operand: false,
        }
    }
}

impl CalculatorState {
    pub fn is_error(&self) -> bool {
        self.display == ERROR_MARKER
    }

    /// The `"<left operand> <operator>"` line shown while an operation is pending.
    pub fn pending_expression(&self) -> Option<String> {
        match (self.previous_value, self.operation) {
            (Some(value), Some(op)) => Some(format!("{} {}", number_to_string(value), op)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state() {
        let state = CalculatorState::default();
        assert_eq!(state.display, "0");
        assert_eq!(state.previous_value, None);
        assert_eq!(state.operation, None);
        assert!(!state.waiting_for_operand);
        assert!(!state.is_error());
    }

    #[test]
    fn test_pending_expression() {
        let mut state = CalculatorState {
            previous_value: Some(7.0),
            ..Default::default()
        };
        assert_eq!(state.pending_expression(), None);

        state.operation = Some(Operation::Multiply);
        assert_eq!(state.pending_expression().as_deref(), Some("7 ×"));
    }

    #[test]
    fn test_state_serialization_uses_camel_case() {
        let state = CalculatorState {
            display: "3".to_string(),
            previous_value: Some(5.0),
            operation: Some(Operation::Add),
            waiting_for_operand: false,
        };
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["display"], "3");
        assert_eq!(json["previousValue"], 5.0);
        assert_eq!(json["operation"], "+");
        assert_eq!(json["waitingForOperand"], false);

        let restored: CalculatorState = serde_json::from_value(json).unwrap();
        assert_eq!(restored, state);
    }
}
