//! Error types returned by the codec.

use core::fmt;
use std::io;

use jx_reflect::ops::BoxError;
use thiserror::Error;

// -----------------------------------------------------------------------------
// Error

/// Any failure of an encode or decode call.
///
/// Every variant is terminal: the same input under the same configuration
/// always fails the same way.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Resolution(#[from] ResolutionError),
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    #[error(transparent)]
    TypeMismatch(#[from] TypeMismatchError),
    #[error(transparent)]
    UnknownField(#[from] UnknownFieldError),
    #[error(transparent)]
    Marshal(#[from] MarshalError),
    #[error(transparent)]
    Unmarshal(#[from] UnmarshalError),
    /// A value with no JSON representation, such as a NaN float.
    #[error("unsupported value: {0}")]
    UnsupportedValue(String),
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl Error {
    /// Returns `true` if a stream decoder ran out of input between values.
    pub fn is_eof(&self) -> bool {
        matches!(self, Error::Io(err) if err.kind() == io::ErrorKind::UnexpectedEof)
    }

    pub(crate) fn eof() -> Self {
        Error::Io(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "end of input",
        ))
    }
}

// -----------------------------------------------------------------------------
// ResolutionError

/// The value's reflected shape disagrees with its type descriptor.
#[derive(Debug, Error)]
#[error("cannot resolve fields of `{type_path}`: {reason}")]
pub struct ResolutionError {
    pub type_path: &'static str,
    pub reason: String,
}

impl ResolutionError {
    pub(crate) fn new(type_path: &'static str, reason: impl Into<String>) -> Self {
        Self {
            type_path,
            reason: reason.into(),
        }
    }
}

// -----------------------------------------------------------------------------
// SyntaxError

/// Malformed JSON input.
///
/// `line` and `column` are 1-based. `offset` is the number of input bytes
/// read when the error was detected.
#[derive(Debug, Error)]
#[error("{message} at line {line} column {column}")]
pub struct SyntaxError {
    pub message: String,
    pub line: usize,
    pub column: usize,
    pub offset: usize,
}

impl SyntaxError {
    /// Builds the error for a complete in-memory document, deriving the
    /// offset from the reported position.
    pub(crate) fn from_slice(err: &serde_json::Error, input: &[u8]) -> Self {
        let (line, column) = (err.line(), err.column());
        let line_start: usize = input
            .split_inclusive(|&b| b == b'\n')
            .take(line.saturating_sub(1))
            .map(<[u8]>::len)
            .sum();
        Self {
            message: message_of(err),
            line,
            column,
            offset: (line_start + column).min(input.len()),
        }
    }

    /// Builds the error for a stream that has consumed `offset` bytes.
    pub(crate) fn from_stream(err: &serde_json::Error, offset: usize) -> Self {
        Self {
            message: message_of(err),
            line: err.line(),
            column: err.column(),
            offset,
        }
    }
}

// serde_json appends the position to its own message.
fn message_of(err: &serde_json::Error) -> String {
    let text = err.to_string();
    let suffix = format!(" at line {} column {}", err.line(), err.column());
    match text.strip_suffix(&suffix) {
        Some(message) => message.to_owned(),
        None => text,
    }
}

// -----------------------------------------------------------------------------
// TypeMismatchError

/// A JSON value whose shape cannot populate the destination.
#[derive(Debug)]
pub struct TypeMismatchError {
    /// The JSON kind found in the input: `null`, `bool`, `number`,
    /// `string`, `array` or `object`.
    pub found: &'static str,
    /// The destination's type path.
    pub type_path: &'static str,
    /// Dotted and indexed member path from the root, such as
    /// `inner.items[2]`. Empty at the root.
    pub path: String,
    /// Further detail from the scalar conversion, if any.
    pub detail: Option<String>,
}

impl fmt::Display for TypeMismatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cannot unmarshal {} into `{}`", self.found, self.type_path)?;
        if !self.path.is_empty() {
            write!(f, " at `{}`", self.path)?;
        }
        if let Some(detail) = &self.detail {
            write!(f, ": {detail}")?;
        }
        Ok(())
    }
}

impl core::error::Error for TypeMismatchError {}

// -----------------------------------------------------------------------------
// UnknownFieldError

/// An object key that matches no member while unknown fields are
/// disallowed.
#[derive(Debug, Error)]
#[error("unknown field \"{key}\"")]
pub struct UnknownFieldError {
    pub key: String,
}

// -----------------------------------------------------------------------------
// Hook errors

/// A [`Marshaler`](jx_reflect::ops::Marshaler) hook or serde bridge failed,
/// or a hook produced invalid JSON.
#[derive(Debug, Error)]
#[error("error calling marshal hook for `{type_path}`: {source}")]
pub struct MarshalError {
    pub type_path: &'static str,
    #[source]
    pub source: BoxError,
}

impl MarshalError {
    pub(crate) fn new(type_path: &'static str, source: impl Into<BoxError>) -> Self {
        Self {
            type_path,
            source: source.into(),
        }
    }
}

/// An [`Unmarshaler`](jx_reflect::ops::Unmarshaler) hook failed.
#[derive(Debug, Error)]
#[error("error calling unmarshal hook for `{type_path}`: {source}")]
pub struct UnmarshalError {
    pub type_path: &'static str,
    #[source]
    pub source: BoxError,
}

impl UnmarshalError {
    pub(crate) fn new(type_path: &'static str, source: impl Into<BoxError>) -> Self {
        Self {
            type_path,
            source: source.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_field_text() {
        let err = Error::from(UnknownFieldError { key: "x".into() });
        assert_eq!(err.to_string(), r#"unknown field "x""#);
    }

    #[test]
    fn syntax_offset_from_position() {
        let input = b"{\n  \"a\": x}";
        let err = serde_json::from_slice::<serde_json::Value>(input).unwrap_err();
        let syntax = SyntaxError::from_slice(&err, input);
        assert_eq!(syntax.line, 2);
        assert_eq!(syntax.column, 8);
        assert_eq!(syntax.offset, 10);
        assert_eq!(syntax.message, "expected value");
        assert_eq!(syntax.to_string(), "expected value at line 2 column 8");
    }

    #[test]
    fn mismatch_text() {
        let err = TypeMismatchError {
            found: "string",
            type_path: "i32",
            path: "inner.items[2]".into(),
            detail: None,
        };
        assert_eq!(
            err.to_string(),
            "cannot unmarshal string into `i32` at `inner.items[2]`"
        );
    }

    #[test]
    fn eof() {
        assert!(Error::eof().is_eof());
        assert!(!Error::UnsupportedValue("NaN".into()).is_eof());
    }
}
