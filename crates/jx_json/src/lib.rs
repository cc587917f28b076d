#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod access;
mod cache;
mod config;
mod de;
mod format;
mod plan;
mod ser;
mod stream;

pub mod error;

#[cfg(test)]
mod tests;

// -----------------------------------------------------------------------------
// Top-level exports

pub use config::{Json, JsonBuilder, KeyEncodeFn};
pub use error::Error;
pub use plan::{FieldPlan, PlannedField};
pub use stream::{Decoder, Encoder};

pub use jx_reflect as reflect;

// -----------------------------------------------------------------------------
// Default instance

use std::io;
use std::sync::LazyLock;

use jx_reflect::Reflect;

static DEFAULT: LazyLock<Json> = LazyLock::new(Json::new);

/// The process-wide default configuration, created on first use.
///
/// The free functions of this crate use it. It carries default flags and no
/// key transform; configurations derived from it share its caches.
#[inline]
pub fn default_json() -> &'static Json {
    &DEFAULT
}

/// Encodes `value` with the default configuration.
///
/// ```
/// let out = jx_json::marshal(&vec![1u8, 2]).unwrap();
/// assert_eq!(out, b"[1,2]");
/// ```
#[inline]
pub fn marshal(value: &dyn Reflect) -> Result<Vec<u8>, Error> {
    DEFAULT.marshal(value)
}

/// Decodes `data` into `target` with the default configuration.
#[inline]
pub fn unmarshal(data: &[u8], target: &mut dyn Reflect) -> Result<(), Error> {
    DEFAULT.unmarshal(data, target)
}

/// Decodes `data` into a fresh `T` with the default configuration.
#[inline]
pub fn from_slice<T: Reflect + Default>(data: &[u8]) -> Result<T, Error> {
    DEFAULT.from_slice(data)
}

/// Creates a stream encoder with the default configuration.
#[inline]
pub fn new_encoder<W: io::Write>(writer: W) -> Encoder<W> {
    DEFAULT.new_encoder(writer)
}

/// Creates a stream decoder with the default configuration.
#[inline]
pub fn new_decoder<R: io::Read>(reader: R) -> Decoder<R> {
    DEFAULT.new_decoder(reader)
}

/// See [`Json::omit_empty`].
#[inline]
pub fn omit_empty() -> Json {
    DEFAULT.omit_empty()
}

/// See [`Json::use_number`].
#[inline]
pub fn use_number() -> Json {
    DEFAULT.use_number()
}

/// See [`Json::disallow_unknown_fields`].
#[inline]
pub fn disallow_unknown_fields() -> Json {
    DEFAULT.disallow_unknown_fields()
}

/// See [`Json::escape_markup`].
#[inline]
pub fn escape_markup(escape: bool) -> Json {
    DEFAULT.escape_markup(escape)
}
