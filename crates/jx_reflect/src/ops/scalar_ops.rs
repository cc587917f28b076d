use alloc::string::String;

use thiserror::Error;

use crate::Reflect;

// -----------------------------------------------------------------------------
// ScalarRef

/// A borrowed view of a scalar value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScalarRef<'a> {
    Bool(bool),
    Int(i128),
    Uint(u128),
    F32(f32),
    F64(f64),
    Char(char),
    Str(&'a str),
    /// A number literal kept as text, see [`Number`](crate::ops::Number).
    Number(&'a str),
}

impl ScalarRef<'_> {
    /// Returns `true` for the zero value of the scalar's kind:
    /// `false`, `0`, `'\0'` or the empty string.
    ///
    /// A number literal only counts as zero when its text is empty, so
    /// `Number("0")` is kept by omit-empty.
    pub fn is_zero(&self) -> bool {
        match *self {
            ScalarRef::Bool(v) => !v,
            ScalarRef::Int(v) => v == 0,
            ScalarRef::Uint(v) => v == 0,
            ScalarRef::F32(v) => v == 0.0,
            ScalarRef::F64(v) => v == 0.0,
            ScalarRef::Char(v) => v == '\0',
            ScalarRef::Str(v) => v.is_empty(),
            ScalarRef::Number(v) => v.is_empty(),
        }
    }

    /// Returns a human readable name of the JSON kind this scalar maps to.
    pub const fn kind_name(&self) -> &'static str {
        match self {
            ScalarRef::Bool(_) => "a boolean",
            ScalarRef::Int(_)
            | ScalarRef::Uint(_)
            | ScalarRef::F32(_)
            | ScalarRef::F64(_)
            | ScalarRef::Number(_) => "a number",
            ScalarRef::Char(_) | ScalarRef::Str(_) => "a string",
        }
    }
}

// -----------------------------------------------------------------------------
// ScalarError

/// Error returned when assigning to a [`Scalar`] fails.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ScalarError {
    /// The scalar cannot hold a value of this kind.
    #[error("invalid type: expected {expected}")]
    InvalidType { expected: &'static str },
    /// The number does not fit the target type.
    #[error("number {literal} out of range for {target}")]
    OutOfRange {
        literal: String,
        target: &'static str,
    },
    /// The literal is not a number the target type accepts.
    #[error("invalid number {literal} for {target}")]
    InvalidNumber {
        literal: String,
        target: &'static str,
    },
    /// A `char` needs a string of exactly one character.
    #[error("expected a single character, found {len} characters")]
    NotAChar { len: usize },
}

// -----------------------------------------------------------------------------
// Scalar

/// A [`Reflect`] subtrait for booleans, numbers, characters and strings.
///
/// Setters default to [`ScalarError::InvalidType`]; each implementation
/// overrides the ones its JSON kind accepts.
///
/// # Examples
///
/// ```
/// use jx_reflect::ops::{Scalar, ScalarError, ScalarRef};
///
/// let mut value = 0_u8;
/// value.set_number("200").unwrap();
/// assert_eq!(value.scalar_ref(), ScalarRef::Uint(200));
///
/// assert!(matches!(value.set_number("300"), Err(ScalarError::OutOfRange { .. })));
/// assert!(matches!(value.set_str("7"), Err(ScalarError::InvalidType { .. })));
/// ```
pub trait Scalar: Reflect {
    /// Returns a view of the current value.
    fn scalar_ref(&self) -> ScalarRef<'_>;

    /// Assigns from a JSON boolean.
    fn set_bool(&mut self, value: bool) -> Result<(), ScalarError> {
        let _ = value;
        Err(self.invalid_type())
    }

    /// Assigns from the exact text of a JSON number literal.
    fn set_number(&mut self, literal: &str) -> Result<(), ScalarError> {
        let _ = literal;
        Err(self.invalid_type())
    }

    /// Assigns from a JSON string.
    fn set_str(&mut self, value: &str) -> Result<(), ScalarError> {
        let _ = value;
        Err(self.invalid_type())
    }

    #[doc(hidden)]
    #[inline]
    fn invalid_type(&self) -> ScalarError {
        ScalarError::InvalidType {
            expected: self.scalar_ref().kind_name(),
        }
    }
}
