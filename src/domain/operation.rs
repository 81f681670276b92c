use crate::error::{CalcError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A binary operation armed by an operator key.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Operation {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Subtract,
    #[serde(rename = "×")]
    Multiply,
    #[serde(rename = "÷")]
    Divide,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
    ];

    /// The symbol shown on the keypad.
    pub fn symbol(&self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "×",
            Operation::Divide => "÷",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Operation {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "+" => Ok(Operation::Add),
            "-" => Ok(Operation::Subtract),
            "×" | "*" | "x" | "X" => Ok(Operation::Multiply),
            "÷" | "/" => Ok(Operation::Divide),
            other => Err(CalcError::InvalidKey(other.to_string())),
        }
    }
}

/// Applies `op` to the operands.
///
/// Without an operation the right operand is returned unchanged. Dividing by
/// zero (of either sign) yields [`CalcError::DivisionByZero`].
pub fn compute(a: f64, b: f64, op: Option<Operation>) -> Result<f64> {
    match op {
        Some(Operation::Add) => Ok(a + b),
        Some(Operation::Subtract) => Ok(a - b),
        Some(Operation::Multiply) => Ok(a * b),
        Some(Operation::Divide) => {
            if b == 0.0 {
                Err(CalcError::DivisionByZero)
            } else {
                Ok(a / b)
            }
        }
        None => Ok(b),
    }
}
