//! Provide kind-specific access traits and the dynamically-typed value.
//!
//! ## Menu
//!
//! ### Interface
//!
//! The following are subtraits of [`Reflect`], each providing data access
//! for one [kind](crate::info::ReflectKind).
//!
//! - [`Struct`]: for records with named members (e.g. `A { .. }`).
//! - [`List`]: for sequences (e.g. `Vec<i32>`).
//! - [`Map`]: for string-keyed maps (e.g. `BTreeMap<String, f32>`).
//! - [`Optional`]: for nullable values (e.g. `Option<u8>`).
//! - [`Scalar`]: for booleans, numbers, characters and strings.
//!
//! ### Dynamic type
//!
//! [`Dynamic`] is a self-describing value that can hold any JSON-like tree.
//! Its numbers are either `f64` or a lossless [`Number`] literal.
//!
//! ### Codec hooks
//!
//! [`Marshaler`] and [`Unmarshaler`] let a type replace the generic encoding.
//!
//! [`Reflect`]: crate::Reflect

// -----------------------------------------------------------------------------
// Modules

mod dynamic;
mod hooks;
mod kind;
mod list_ops;
mod map_ops;
mod number;
mod optional_ops;
mod scalar_ops;
mod struct_ops;

// -----------------------------------------------------------------------------
// Exports

pub use kind::{ReflectMut, ReflectRef};

pub use dynamic::Dynamic;
pub use hooks::{BoxError, Marshaler, Unmarshaler};
pub use list_ops::{List, ListItemIter};
pub use map_ops::Map;
pub use number::{Number, NumberError};
pub use optional_ops::Optional;
pub use scalar_ops::{Scalar, ScalarError, ScalarRef};
pub use struct_ops::{Struct, StructFieldIter};

pub(crate) use number::is_number_literal;
