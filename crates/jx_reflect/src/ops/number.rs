use alloc::string::String;
use core::fmt;
use core::str::FromStr;

use thiserror::Error;

/// A JSON number kept as its literal text.
///
/// Decoding into a [`Dynamic`](crate::ops::Dynamic) in arbitrary-precision
/// mode produces numbers of this type, so integers beyond 2^53 and long
/// decimals survive a round trip unchanged.
///
/// # Examples
///
/// ```
/// use jx_reflect::ops::Number;
///
/// let n: Number = "18446744073709551615".parse().unwrap();
/// assert_eq!(n.as_u64(), Ok(u64::MAX));
/// assert!(n.as_i64().is_err());
/// assert!("1.".parse::<Number>().is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Number(String);

/// Error returned when text is not a valid number, or when a [`Number`]
/// does not fit the requested type.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct NumberError(&'static str);

impl Number {
    /// Wraps `literal` without validating it.
    ///
    /// Use [`str::parse`] to validate.
    #[inline]
    pub const fn new(literal: String) -> Self {
        Self(literal)
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn into_string(self) -> String {
        self.0
    }

    pub fn as_f64(&self) -> Result<f64, NumberError> {
        match self.0.parse::<f64>() {
            Ok(v) if v.is_finite() => Ok(v),
            Ok(_) => Err(NumberError("number out of range for f64")),
            Err(_) => Err(NumberError("invalid number")),
        }
    }

    pub fn as_i64(&self) -> Result<i64, NumberError> {
        self.0
            .parse::<i64>()
            .map_err(|_| NumberError("number is not an i64"))
    }

    pub fn as_u64(&self) -> Result<u64, NumberError> {
        self.0
            .parse::<u64>()
            .map_err(|_| NumberError("number is not a u64"))
    }
}

impl FromStr for Number {
    type Err = NumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if is_number_literal(s) {
            Ok(Self(s.into()))
        } else {
            Err(NumberError("invalid number literal"))
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<u64> for Number {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Self(value.to_string())
    }
}

/// Checks the JSON number grammar:
/// `-? (0 | [1-9][0-9]*) (. [0-9]+)? ([eE] [+-]? [0-9]+)?`.
pub(crate) fn is_number_literal(s: &str) -> bool {
    let bytes = s.as_bytes();
    let mut i = 0;

    let digits = |i: &mut usize| {
        let start = *i;
        while *i < bytes.len() && bytes[*i].is_ascii_digit() {
            *i += 1;
        }
        *i - start
    };

    if bytes.first() == Some(&b'-') {
        i += 1;
    }
    match bytes.get(i) {
        Some(b'0') => i += 1,
        Some(b'1'..=b'9') => {
            digits(&mut i);
        }
        _ => return false,
    }
    if bytes.get(i) == Some(&b'.') {
        i += 1;
        if digits(&mut i) == 0 {
            return false;
        }
    }
    if matches!(bytes.get(i), Some(b'e' | b'E')) {
        i += 1;
        if matches!(bytes.get(i), Some(b'+' | b'-')) {
            i += 1;
        }
        if digits(&mut i) == 0 {
            return false;
        }
    }
    i == bytes.len()
}

#[cfg(test)]
mod tests {
    use super::{Number, is_number_literal};

    #[test]
    fn literal_grammar() {
        for ok in ["0", "-0", "12", "1.5", "-0.25e10", "3E+2", "1e-7"] {
            assert!(is_number_literal(ok), "{ok}");
        }
        for bad in ["", "-", "01", "1.", ".5", "1e", "+1", "0x10", "1 ", "NaN"] {
            assert!(!is_number_literal(bad), "{bad}");
        }
    }

    #[test]
    fn conversions() {
        let n: Number = "-42".parse().unwrap();
        assert_eq!(n.as_i64(), Ok(-42));
        assert!(n.as_u64().is_err());
        assert_eq!(n.as_f64(), Ok(-42.0));
        assert!("1e400".parse::<Number>().unwrap().as_f64().is_err());
        assert_eq!(Number::from(7_u64).to_string(), "7");
    }
}
