use core::any::{Any, TypeId};
use core::fmt;

use crate::impls::utils;
use crate::info::{DynamicTypePath, DynamicTyped, ReflectKind};
use crate::ops::{Marshaler, ReflectMut, ReflectRef, Unmarshaler};

/// The core trait of reflection: a value whose shape can be inspected and
/// modified at runtime.
///
/// Implemented by `#[derive(Reflect)]` for records and opaque types, and by
/// this crate for primitives, strings, `Option`, `Vec`, `VecDeque`,
/// string-keyed maps, `Box<T>` and [`Dynamic`](crate::ops::Dynamic).
///
/// # Kinds
///
/// [`reflect_kind`](Reflect::reflect_kind), [`reflect_ref`](Reflect::reflect_ref)
/// and [`reflect_mut`](Reflect::reflect_mut) must agree with each other and with
/// the [`TypeInfo`](crate::info::TypeInfo) returned by
/// [`DynamicTyped::reflect_type_info`]. Manual implementations can use the
/// internal `impl_reflect_cast_fn!` pattern:
///
/// ```ignore
/// fn reflect_kind(&self) -> ReflectKind {
///     ReflectKind::Kind  // e.g., ReflectKind::Struct
/// }
///
/// fn reflect_ref(&self) -> ReflectRef<'_> {
///     ReflectRef::Kind(self)
/// }
///
/// fn reflect_mut(&mut self) -> ReflectMut<'_> {
///     ReflectMut::Kind(self)
/// }
/// ```
///
/// # Codec capabilities
///
/// A type can take over its own encoding and decoding. Codecs ask for these
/// capabilities before looking at the kind:
///
/// - [`as_marshaler`](Reflect::as_marshaler) / [`as_unmarshaler`](Reflect::as_unmarshaler)
///   expose hand-written hooks, see [`Marshaler`] and [`Unmarshaler`].
/// - [`as_serialize`](Reflect::as_serialize) /
///   [`deserialize_in_place`](Reflect::deserialize_in_place) bridge a type to
///   its *serde* implementation. `#[reflect(opaque, serde)]` generates both.
pub trait Reflect: DynamicTypePath + DynamicTyped + Send + Sync + Any {
    /// Returns the kind of this value.
    ///
    /// # Examples
    ///
    /// ```
    /// use jx_reflect::{Reflect, info::ReflectKind};
    ///
    /// assert_eq!(1_u8.reflect_kind(), ReflectKind::Scalar);
    /// assert_eq!(vec![1_u8].reflect_kind(), ReflectKind::List);
    /// ```
    fn reflect_kind(&self) -> ReflectKind;

    /// Returns an immutable view of the value by kind.
    fn reflect_ref(&self) -> ReflectRef<'_>;

    /// Returns a mutable view of the value by kind.
    ///
    /// # Examples
    ///
    /// ```
    /// use jx_reflect::{Reflect, ops::ReflectMut};
    ///
    /// let mut value = Some(3_i32);
    /// if let ReflectMut::Optional(opt) = value.reflect_mut() {
    ///     opt.set_none();
    /// }
    /// assert_eq!(value, None);
    /// ```
    fn reflect_mut(&mut self) -> ReflectMut<'_>;

    /// Returns the custom encoding hook of this value, if the type has one.
    #[inline]
    fn as_marshaler(&self) -> Option<&dyn Marshaler> {
        None
    }

    /// Returns the custom decoding hook of this value, if the type has one.
    #[inline]
    fn as_unmarshaler(&mut self) -> Option<&mut dyn Unmarshaler> {
        None
    }

    /// Returns the *serde* view of this value, if the type bridges to it.
    #[inline]
    fn as_serialize(&self) -> Option<&dyn erased_serde::Serialize> {
        None
    }

    /// Replaces this value with one read from `deserializer`, if the type
    /// bridges to *serde*.
    ///
    /// Returns `None` when the type has no such bridge.
    #[inline]
    fn deserialize_in_place(
        &mut self,
        deserializer: &mut dyn erased_serde::Deserializer<'_>,
    ) -> Option<Result<(), erased_serde::Error>> {
        let _ = deserializer;
        None
    }

    /// Debug formatting through reflection.
    ///
    /// The default implementation formats by kind.
    fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.reflect_ref() {
            ReflectRef::Struct(info) => utils::struct_debug(info, f),
            ReflectRef::List(info) => utils::list_debug(info, f),
            ReflectRef::Map(info) => utils::map_debug(info, f),
            ReflectRef::Optional(info) => utils::optional_debug(info, f),
            ReflectRef::Scalar(info) => fmt::Debug::fmt(&info.scalar_ref(), f),
            ReflectRef::Dynamic(info) => fmt::Debug::fmt(info, f),
            ReflectRef::Opaque(_) => write!(f, "Reflect({})", self.reflect_type_path()),
        }
    }
}

impl dyn Reflect {
    /// Returns the `TypeId` described by the value's type info.
    ///
    /// This sees through transparent wrappers such as `Box<T>`.
    #[inline]
    pub fn ty_id(&self) -> TypeId {
        self.reflect_type_info().ty_id()
    }

    /// Returns `true` if the underlying value is of type `T`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use jx_reflect::Reflect;
    /// let value: &dyn Reflect = &1_u32;
    /// assert!(value.is::<u32>());
    /// assert!(!value.is::<i32>());
    /// ```
    #[inline]
    pub fn is<T: Any>(&self) -> bool {
        <dyn Any>::is::<T>(self)
    }

    /// Downcasts the value to type `T` by reference.
    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        <dyn Any>::downcast_ref(self)
    }

    /// Downcasts the value to type `T` by mutable reference.
    ///
    /// # Examples
    ///
    /// ```
    /// # use jx_reflect::Reflect;
    /// let mut text = String::from("a");
    /// let value: &mut dyn Reflect = &mut text;
    /// value.downcast_mut::<String>().unwrap().push('b');
    /// assert_eq!(text, "ab");
    /// ```
    #[inline]
    pub fn downcast_mut<T: Any>(&mut self) -> Option<&mut T> {
        <dyn Any>::downcast_mut(self)
    }
}

impl fmt::Debug for dyn Reflect {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.reflect_debug(f)
    }
}

// -----------------------------------------------------------------------------
// Auxiliary macro

macro_rules! impl_reflect_cast_fn {
    ($kind:ident) => {
        #[inline]
        fn reflect_kind(&self) -> $crate::info::ReflectKind {
            $crate::info::ReflectKind::$kind
        }

        #[inline]
        fn reflect_ref(&self) -> $crate::ops::ReflectRef<'_> {
            $crate::ops::ReflectRef::$kind(self)
        }

        #[inline]
        fn reflect_mut(&mut self) -> $crate::ops::ReflectMut<'_> {
            $crate::ops::ReflectMut::$kind(self)
        }
    };
}

pub(crate) use impl_reflect_cast_fn;
