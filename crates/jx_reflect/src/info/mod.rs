//! Static descriptions of reflected types.
//!
//! Every reflected type exposes a `&'static` [`TypeInfo`] through [`Typed`].
//! For records this is a [`StructInfo`], the list of members a codec plans
//! its fields from.

// -----------------------------------------------------------------------------
// Modules

mod field_info;
mod list_info;
mod map_info;
mod opaque_info;
mod optional_info;
mod struct_info;
mod type_info;
mod type_path;
mod typed;

// -----------------------------------------------------------------------------
// Exports

pub use field_info::NamedField;
pub use list_info::ListInfo;
pub use map_info::MapInfo;
pub use opaque_info::OpaqueInfo;
pub use optional_info::OptionalInfo;
pub use struct_info::StructInfo;
pub use type_info::{ReflectKind, ReflectKindError, TypeInfo};
pub use type_path::{DynamicTypePath, Type, TypePath};
pub use typed::{DynamicTyped, Typed};

pub(crate) use type_path::impl_type_fn;
