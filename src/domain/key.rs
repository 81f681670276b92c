use super::operation::Operation;
use crate::error::{CalcError, Result};
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// A single digit-entry character: `0`-`9` or the decimal point.
///
/// Construction is validated so the engine never sees anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digit(char);

impl Digit {
    pub const DECIMAL_POINT: Self = Self('.');

    pub fn new(c: char) -> Result<Self> {
        if c.is_ascii_digit() || c == '.' {
            Ok(Self(c))
        } else {
            Err(CalcError::InvalidKey(c.to_string()))
        }
    }

    pub fn as_char(&self) -> char {
        self.0
    }

    pub fn is_decimal_point(&self) -> bool {
        *self == Self::DECIMAL_POINT
    }
}

impl TryFrom<char> for Digit {
    type Error = CalcError;

    fn try_from(value: char) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Digit> for char {
    fn from(digit: Digit) -> Self {
        digit.0
    }
}

/// One keypad button press.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(try_from = "String")]
pub enum Key {
    Digit(Digit),
    Operator(Operation),
    Equals,
    Clear,
}

impl FromStr for Key {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self> {
        let token = s.trim();
        let mut chars = token.chars();
        if let (Some(c), None) = (chars.next(), chars.next())
            && let Ok(digit) = Digit::new(c)
        {
            return Ok(Key::Digit(digit));
        }

        match token {
            "=" => Ok(Key::Equals),
            "C" | "c" | "AC" | "clear" | "Clear" => Ok(Key::Clear),
            _ => token
                .parse::<Operation>()
                .map(Key::Operator)
                .map_err(|_| CalcError::InvalidKey(token.to_string())),
        }
    }
}

impl TryFrom<String> for Key {
    type Error = CalcError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Digit(d) => write!(f, "{}", d.as_char()),
            Key::Operator(op) => write!(f, "{op}"),
            Key::Equals => f.write_str("="),
            Key::Clear => f.write_str("C"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_rejects_non_digits() {
        assert!(Digit::new('7').is_ok());
        assert!(Digit::new('.').is_ok());
        assert!(matches!(Digit::new('a'), Err(CalcError::InvalidKey(_))));
        assert!(Digit::new('-').is_err());
    }

    #[test]
    fn test_decimal_point_detection() {
        assert!(Digit::new('.').unwrap().is_decimal_point());
        assert!(!Digit::new('0').unwrap().is_decimal_point());
    }

    #[test]
    fn test_key_parsing() {
        assert_eq!("7".parse::<Key>().unwrap(), Key::Digit(Digit('7')));
        assert_eq!(".".parse::<Key>().unwrap(), Key::Digit(Digit::DECIMAL_POINT));
        assert_eq!(" = ".parse::<Key>().unwrap(), Key::Equals);
        assert_eq!("clear".parse::<Key>().unwrap(), Key::Clear);
        assert_eq!("÷".parse::<Key>().unwrap(), Key::Operator(Operation::Divide));
        assert_eq!("-".parse::<Key>().unwrap(), Key::Operator(Operation::Subtract));
    }

    #[test]
    fn test_key_parsing_rejects_multi_character_numbers() {
        let err = "12".parse::<Key>().unwrap_err();
        assert!(matches!(err, CalcError::InvalidKey(token) if token == "12"));
        assert!("".parse::<Key>().is_err());
        assert!("sqrt".parse::<Key>().is_err());
    }

    #[test]
    fn test_key_display_matches_parse() {
        for token in ["0", "9", ".", "+", "-", "×", "÷", "=", "C"] {
            let key: Key = token.parse().unwrap();
            assert_eq!(key.to_string(), token);
        }
    }
}
