//! Containers for static storage of type information.
//!
//! ## NonGenericTypeInfoCell
//!
//! For non-generic types, a [`NonGenericTypeInfoCell`] stores the [`TypeInfo`]
//! in a [`OnceLock`].
//!
//! There is no `NonGenericTypePathCell`, a string literal does the job.
//!
//! ## GenericTypeCell
//!
//! A `static CELL` inside a generic function is shared by every
//! instantiation, so generic types key their values by `TypeId`:
//!
//! - [`GenericTypeInfoCell`]: stores [`TypeInfo`]
//! - [`GenericTypePathCell`]: stores [`String`]

use alloc::{boxed::Box, string::String};
use core::any::{Any, TypeId};
use std::sync::{OnceLock, PoisonError, RwLock};

use jx_utils::TypeIdMap;

use crate::info::TypeInfo;

mod sealed {
    use super::TypeInfo;
    use alloc::string::String;
    pub trait TypedProperty: 'static {}

    impl TypedProperty for String {}
    impl TypedProperty for TypeInfo {}
}

use sealed::TypedProperty;

// -----------------------------------------------------------------------------
// NonGenericTypeCell

/// A container for static storage of a non-generic type's property.
///
/// # Examples
///
/// ```
/// use jx_reflect::impls::NonGenericTypeInfoCell;
/// use jx_reflect::info::{OpaqueInfo, TypeInfo, TypePath, Typed};
///
/// struct Foo;
///
/// impl TypePath for Foo {
///     fn type_path() -> &'static str { "demo::Foo" }
///     fn type_name() -> &'static str { "Foo" }
///     fn type_ident() -> &'static str { "Foo" }
/// }
///
/// impl Typed for Foo {
///     fn type_info() -> &'static TypeInfo {
///         static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
///         CELL.get_or_init(|| TypeInfo::Opaque(OpaqueInfo::new::<Self>()))
///     }
/// }
///
/// assert!(core::ptr::eq(Foo::type_info(), Foo::type_info()));
/// ```
pub struct NonGenericTypeCell<T: TypedProperty>(OnceLock<T>);

/// See [`NonGenericTypeCell`].
pub type NonGenericTypeInfoCell = NonGenericTypeCell<TypeInfo>;

impl<T: TypedProperty> NonGenericTypeCell<T> {
    #[inline]
    pub const fn new() -> Self {
        Self(OnceLock::new())
    }

    /// Returns the stored value, initializing it with `f` on first access.
    #[inline]
    pub fn get_or_init<F>(&self, f: F) -> &T
    where
        F: FnOnce() -> T,
    {
        self.0.get_or_init(f)
    }
}

// -----------------------------------------------------------------------------
// GenericTypeCell

/// A container for static storage of generic types' properties.
///
/// # Examples
///
/// ```
/// use jx_reflect::impls::{GenericTypeInfoCell, GenericTypePathCell, concat};
/// use jx_reflect::info::{ListInfo, TypeInfo, TypePath, Typed};
///
/// struct Stack<T>(Vec<T>);
///
/// impl<T: TypePath> TypePath for Stack<T> {
///     fn type_path() -> &'static str {
///         static CELL: GenericTypePathCell = GenericTypePathCell::new();
///         CELL.get_or_insert::<Self>(|| concat(&["demo::Stack<", T::type_path(), ">"]))
///     }
///     fn type_name() -> &'static str {
///         static CELL: GenericTypePathCell = GenericTypePathCell::new();
///         CELL.get_or_insert::<Self>(|| concat(&["Stack<", T::type_name(), ">"]))
///     }
///     fn type_ident() -> &'static str { "Stack" }
/// }
///
/// impl<T: Typed> Typed for Stack<T> {
///     fn type_info() -> &'static TypeInfo {
///         static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
///         CELL.get_or_insert::<Self>(|| TypeInfo::List(ListInfo::new::<Self, T>()))
///     }
/// }
///
/// assert_eq!(Stack::<u8>::type_path(), "demo::Stack<u8>");
/// assert_eq!(Stack::<bool>::type_info().type_name(), "Stack<bool>");
/// ```
pub struct GenericTypeCell<T: TypedProperty>(RwLock<TypeIdMap<&'static T>>);

/// See [`GenericTypeCell`].
pub type GenericTypeInfoCell = GenericTypeCell<TypeInfo>;

/// See [`GenericTypeCell`].
pub type GenericTypePathCell = GenericTypeCell<String>;

impl<T: TypedProperty> GenericTypeCell<T> {
    #[inline]
    pub const fn new() -> Self {
        Self(RwLock::new(TypeIdMap::new()))
    }

    /// Returns the value stored for `G`, inserting the one produced by `f`
    /// first if absent.
    #[inline(always)]
    pub fn get_or_insert<G: Any + ?Sized>(&self, f: impl FnOnce() -> T) -> &T {
        // Separate to reduce code compilation times
        self.get_or_insert_by_type_id(TypeId::of::<G>(), f)
    }

    // Separate to reduce code compilation times
    #[inline(never)]
    fn get_or_insert_by_type_id(&self, type_id: TypeId, f: impl FnOnce() -> T) -> &T {
        match self.get_by_type_id(type_id) {
            Some(info) => info,
            None => self.insert_by_type_id(type_id, f()),
        }
    }

    // Separate to reduce code compilation times
    #[inline(never)]
    fn get_by_type_id(&self, type_id: TypeId) -> Option<&T> {
        self.0
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&type_id)
            .copied()
    }

    // Separate to reduce code compilation times
    #[inline(never)]
    fn insert_by_type_id(&self, type_id: TypeId, value: T) -> &T {
        *self
            .0
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .get_or_insert(type_id, || Box::leak(Box::new(value)))
    }
}
