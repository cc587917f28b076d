use core::fmt;

use crate::ops::{List, Map, Optional, Struct};

/// A function used for implementing [`Reflect::reflect_debug`] for records.
///
/// Prints the described members in declaration order, like `#[derive(Debug)]`.
///
/// [`Reflect::reflect_debug`]: crate::Reflect::reflect_debug
#[inline(never)]
pub fn struct_debug(x: &dyn Struct, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut debug = f.debug_struct(x.reflect_type_name());
    for (index, value) in x.iter_fields().enumerate() {
        let name = x.name_at(index).unwrap_or("?");
        debug.field(name, &value);
    }
    debug.finish()
}

/// A function used for implementing [`Reflect::reflect_debug`] for lists.
///
/// [`Reflect::reflect_debug`]: crate::Reflect::reflect_debug
#[inline(never)]
pub fn list_debug(x: &dyn List, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_list().entries(x.iter()).finish()
}

/// A function used for implementing [`Reflect::reflect_debug`] for maps.
///
/// [`Reflect::reflect_debug`]: crate::Reflect::reflect_debug
#[inline(never)]
pub fn map_debug(x: &dyn Map, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_map().entries(x.iter()).finish()
}

/// A function used for implementing [`Reflect::reflect_debug`] for options.
///
/// [`Reflect::reflect_debug`]: crate::Reflect::reflect_debug
#[inline(never)]
pub fn optional_debug(x: &dyn Optional, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match x.get() {
        Some(value) => f.debug_tuple("Some").field(&value).finish(),
        None => f.write_str("None"),
    }
}
