pub mod csv;
pub mod keypad;
