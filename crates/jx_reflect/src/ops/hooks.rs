use alloc::boxed::Box;
use alloc::vec::Vec;

/// The error type returned by codec hooks.
pub type BoxError = Box<dyn core::error::Error + Send + Sync>;

/// A type that encodes itself to JSON.
///
/// When a value exposes this capability through
/// [`Reflect::as_marshaler`](crate::Reflect::as_marshaler), encoders use the
/// returned bytes for the whole subtree. The bytes must be one valid JSON
/// value.
///
/// Enable it with `#[reflect(marshal)]` on a derived type.
///
/// # Examples
///
/// ```
/// use jx_reflect::{Reflect, ops::{BoxError, Marshaler}};
///
/// #[derive(Reflect, Default)]
/// #[reflect(marshal)]
/// struct Celsius { degrees: f64 }
///
/// impl Marshaler for Celsius {
///     fn marshal_json(&self) -> Result<Vec<u8>, BoxError> {
///         Ok(format!("\"{}C\"", self.degrees).into_bytes())
///     }
/// }
///
/// let value = Celsius { degrees: 21.5 };
/// let bytes = value.as_marshaler().unwrap().marshal_json().unwrap();
/// assert_eq!(bytes, b"\"21.5C\"");
/// ```
pub trait Marshaler {
    fn marshal_json(&self) -> Result<Vec<u8>, BoxError>;
}

/// A type that decodes itself from JSON.
///
/// When a value exposes this capability through
/// [`Reflect::as_unmarshaler`](crate::Reflect::as_unmarshaler), decoders hand
/// it the compact JSON text of the corresponding input, `null` included.
///
/// Enable it with `#[reflect(unmarshal)]` on a derived type.
pub trait Unmarshaler {
    fn unmarshal_json(&mut self, data: &[u8]) -> Result<(), BoxError>;
}
