//! Domain types of the calculator: keys, operations, state and the
//! number/text rules that connect the display buffer to arithmetic.

pub mod display;
pub mod key;
pub mod numeric;
pub mod operation;
pub mod state;
