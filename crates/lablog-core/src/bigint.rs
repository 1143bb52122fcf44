//! Arbitrary-precision integers.
//!
//! The renderer never does arithmetic on these; it only needs a lossless
//! decimal form, so a sign plus a validated digit string is enough.

use std::fmt;
use std::str::FromStr;

/// An integer of any magnitude, kept as normalized decimal digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BigInt {
    negative: bool,
    /// No leading zeros; `"0"` for zero.
    digits: String,
}

impl BigInt {
    /// The value zero.
    #[must_use]
    pub fn zero() -> Self {
        Self {
            negative: false,
            digits: "0".to_string(),
        }
    }

    /// Returns true for values below zero.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Magnitude as decimal digits, without sign.
    #[must_use]
    pub fn digits(&self) -> &str {
        &self.digits
    }

    fn from_parts(negative: bool, digits: &str) -> Self {
        let trimmed = digits.trim_start_matches('0');
        if trimmed.is_empty() {
            return Self::zero();
        }
        Self {
            negative,
            digits: trimmed.to_string(),
        }
    }
}

impl Default for BigInt {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            f.write_str("-")?;
        }
        f.write_str(&self.digits)
    }
}

/// Error returned when text is not a valid integer literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseBigIntError {
    /// No digits were present.
    Empty,
    /// A character other than a decimal digit was found.
    InvalidDigit(char),
}

impl fmt::Display for ParseBigIntError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseBigIntError::Empty => write!(f, "cannot parse integer from empty string"),
            ParseBigIntError::InvalidDigit(c) => write!(f, "invalid digit {c:?} in integer"),
        }
    }
}

impl std::error::Error for ParseBigIntError {}

impl FromStr for BigInt {
    type Err = ParseBigIntError;

    /// Parses `[+-]digits`, with an optional trailing `n` literal suffix.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_suffix('n').unwrap_or(s);
        let (negative, digits) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s),
        };
        if digits.is_empty() {
            return Err(ParseBigIntError::Empty);
        }
        if let Some(bad) = digits.chars().find(|c| !c.is_ascii_digit()) {
            return Err(ParseBigIntError::InvalidDigit(bad));
        }
        Ok(Self::from_parts(negative, digits))
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for BigInt {
                fn from(value: $t) -> Self {
                    let text = value.to_string();
                    match text.strip_prefix('-') {
                        Some(digits) => Self::from_parts(true, digits),
                        None => Self::from_parts(false, &text),
                    }
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
