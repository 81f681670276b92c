use super::numeric::{number_to_string, parse_float, round_to_fixed, to_exponential};

/// Display value shown after an invalid computation.
pub const ERROR_MARKER: &str = "Error";

/// Largest magnitude rendered in positional notation.
pub const DISPLAY_LIMIT: f64 = 999_999_999.0;

const EXPONENT_DIGITS: usize = 3;
const FRACTION_DIGITS: u32 = 8;

/// Formats a raw display buffer for rendering.
///
/// Large magnitudes switch to exponential notation, whole numbers drop the
/// decimal point, and everything else is rounded to 8 fractional digits with
/// trailing zeroes removed. Text that does not parse is returned as is.
pub fn format_display(value: &str) -> String {
    if value == ERROR_MARKER {
        return value.to_string();
    }

    let num = parse_float(value);
    if num.is_nan() {
        return value.to_string();
    }

    if num.abs() > DISPLAY_LIMIT {
        return to_exponential(num, EXPONENT_DIGITS);
    }

    if num.fract() == 0.0 {
        return number_to_string(num);
    }

    number_to_string(round_to_fixed(num, FRACTION_DIGITS))
}
