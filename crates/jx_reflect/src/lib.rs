#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

// -----------------------------------------------------------------------------
// Extern Self

// Derived code refers to `::jx_reflect`, which has to resolve inside this
// crate's own tests as well.
extern crate self as jx_reflect;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod reflection;

pub mod impls;
pub mod info;
pub mod ops;

#[cfg(test)]
mod tests;

// -----------------------------------------------------------------------------
// Top-Level exports

#[doc(hidden)]
pub mod __macro_exports;

pub use reflection::Reflect;

/// Derive the reflection traits for a record type.
///
/// Generates `TypePath`, `Typed`, `Reflect` and, for structs with named
/// fields, `Struct`.
///
/// Type-level attributes:
///
/// - `#[reflect(opaque)]`: do not look inside the type; it is only reachable
///   through hooks or serde.
/// - `#[reflect(marshal)]` / `#[reflect(unmarshal)]`: the type implements
///   [`ops::Marshaler`] / [`ops::Unmarshaler`] and codecs must defer to it.
/// - `#[reflect(serialize)]`, `#[reflect(deserialize)]`, `#[reflect(serde)]`:
///   an opaque type is encoded through its serde implementations.
///
/// Field-level attributes:
///
/// - `#[reflect(rename = "wire")]`: explicit wire name.
/// - `#[reflect(omit_empty)]`, `#[reflect(omit_empty = false)]`: explicit
///   omit-empty override.
/// - `#[reflect(embed)]`: flatten the member's own fields into the parent.
/// - `#[reflect(skip)]`: the member is invisible to reflection.
pub use jx_reflect_derive::Reflect;

/// The most commonly used items.
pub mod prelude {
    pub use crate::Reflect;
    pub use crate::info::{DynamicTypePath, DynamicTyped, TypeInfo, TypePath, Typed};
    pub use crate::ops::{Dynamic, Number};
    pub use crate::ops::{List, Map, Optional, Scalar, Struct};
    pub use crate::ops::{Marshaler, Unmarshaler};
}
