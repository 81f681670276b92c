//! Application layer containing the calculator state machine.
//!
//! This module defines the `CalculatorEngine`, the single entry point that
//! turns key presses into state transitions. It is synchronous and owned by
//! exactly one caller; there is nothing to share or lock.

pub mod engine;
