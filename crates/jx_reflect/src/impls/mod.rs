//! Provide utilities for implementing reflection traits, and the
//! implementations for standard types.
//!
//! - [`concat`]: An efficient string concatenation function.
//! - [`NonGenericTypeInfoCell`]: Used to implement [`Typed`] for non-generic types.
//! - [`GenericTypePathCell`]: Used to implement [`TypePath`] for generic types.
//! - [`GenericTypeInfoCell`]: Used to implement [`Typed`] for generic types.
//! - `xxx_debug`: Used to implement [`Reflect::reflect_debug`] (e.g. [`struct_debug`]).
//!
//! ## Implemented Menu
//!
//! - scalar: `bool`, `char`, `i8`-`i128`, `u8`-`u128`, `isize`, `usize`, `f32`, `f64`, `String`
//! - `Option<T>`
//! - `Vec<T>`, `VecDeque<T>`
//! - `BTreeMap<String, V>`, `HashMap<String, V, S>`
//! - `Box<T>`, transparent
//! - [`Dynamic`] and [`Number`]
//!
//! [`TypePath`]: crate::info::TypePath
//! [`Typed`]: crate::info::Typed
//! [`Reflect::reflect_debug`]: crate::Reflect::reflect_debug
//! [`Dynamic`]: crate::ops::Dynamic
//! [`Number`]: crate::ops::Number

// -----------------------------------------------------------------------------
// Modules

mod cell;
pub(crate) mod utils;

mod boxed;
mod dynamic;
mod list;
mod map;
mod option;
mod scalar;

// -----------------------------------------------------------------------------
// Exports

pub use cell::{GenericTypeInfoCell, GenericTypePathCell, NonGenericTypeInfoCell};

pub use utils::{list_debug, map_debug, optional_debug, struct_debug};

/// An efficient string concatenation function.
///
/// This is usually used for the implementation of `TypePath`.
///
/// # Example
///
/// ```
/// use jx_reflect::impls;
///
/// let s = impls::concat(&["module", "::", "name", "<", "T" , ">"]);
///
/// assert_eq!(s.capacity(), 15);
/// ```
#[inline(never)]
pub fn concat(arr: &[&str]) -> ::alloc::string::String {
    let mut len = 0usize;
    for &item in arr {
        len += item.len();
    }
    let mut res = ::alloc::string::String::with_capacity(len);
    for &item in arr {
        res.push_str(item);
    }
    res
}
