//! Conversions between display text and `f64`.
//!
//! The display buffer is text, so every operator press re-reads it and every
//! result is written back. These helpers pin down exactly how that happens:
//! lenient prefix parsing on the way in, shortest round-trip text on the way out.

use rust_decimal::{Decimal, RoundingStrategy};

/// Parses the longest numeric prefix of `text`.
///
/// Leading whitespace is skipped and trailing garbage ignored, so `"1.2.3"`
/// reads as `1.2`. Text without a numeric prefix yields `NaN`.
pub fn parse_float(text: &str) -> f64 {
    let s = text.trim_start();
    let bytes = s.as_bytes();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    if s[end..].starts_with("Infinity") {
        return if bytes.first() == Some(&b'-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return f64::NAN;
    }

    // The exponent only counts when at least one digit follows it.
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    s[..end].parse().unwrap_or(f64::NAN)
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Renders `x` as the shortest text that reads back to the same value.
///
/// Fixed notation is used for magnitudes in `[1e-6, 1e21)`, exponential
/// notation with a signed exponent otherwise. Negative zero renders as `0`.
pub fn number_to_string(x: f64) -> String {
    if x.is_nan() {
        return "NaN".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if x == 0.0 {
        return "0".to_string();
    }

    if (1e-6..1e21).contains(&x.abs()) {
        format!("{x}")
    } else {
        signed_exponent(format!("{x:e}"))
    }
}

/// Renders `x` in exponential notation with exactly `digits` fractional digits.
///
/// The mantissa is rounded with ties away from zero, so `1234500000` renders
/// as `1.235e+9`.
pub fn to_exponential(x: f64, digits: usize) -> String {
    if !x.is_finite() {
        return number_to_string(x);
    }

    // 17 significant digits identify any f64, leaving room to round exactly.
    let wide = format!("{x:.16e}");
    let Some((mantissa, exponent)) = wide.split_once('e') else {
        return signed_exponent(format!("{x:.digits$e}"));
    };
    let (Ok(mantissa), Ok(mut exponent)) = (mantissa.parse::<Decimal>(), exponent.parse::<i32>())
    else {
        return signed_exponent(format!("{x:.digits$e}"));
    };

    let mut rounded =
        mantissa.round_dp_with_strategy(digits as u32, RoundingStrategy::MidpointAwayFromZero);
    if rounded.abs() >= Decimal::TEN {
        rounded = if rounded.is_sign_negative() {
            Decimal::NEGATIVE_ONE
        } else {
            Decimal::ONE
        };
        exponent += 1;
    }

    let sign = if exponent < 0 { "-" } else { "+" };
    format!("{rounded:.digits$}e{sign}{}", exponent.abs())
}

/// Rounds the exact decimal value of `x` to `digits` fractional places.
///
/// Ties round away from zero.
pub fn round_to_fixed(x: f64, digits: u32) -> f64 {
    match Decimal::from_f64_retain(x) {
        Some(exact) => exact
            .round_dp_with_strategy(digits, RoundingStrategy::MidpointAwayFromZero)
            .to_string()
            .parse()
            .unwrap_or(x),
        None => format!("{x:.prec$}", prec = digits as usize)
            .parse()
            .unwrap_or(x),
    }
}

fn signed_exponent(formatted: String) -> String {
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => formatted,
    }
}
