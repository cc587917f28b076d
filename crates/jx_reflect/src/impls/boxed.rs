use alloc::boxed::Box;
use core::fmt;

use crate::Reflect;
use crate::impls::{GenericTypePathCell, concat};
use crate::info::{ReflectKind, TypeInfo, TypePath, Typed};
use crate::ops::{Marshaler, ReflectMut, ReflectRef, Unmarshaler};

// `Box<T>` is transparent: it reports the type info and the kind of `T`,
// so a boxed member behaves exactly like an inline one.

impl<T: TypePath> TypePath for Box<T> {
    fn type_path() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| concat(&["alloc::boxed::Box<", T::type_path(), ">"]))
    }

    fn type_name() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| concat(&["Box<", T::type_name(), ">"]))
    }

    #[inline]
    fn type_ident() -> &'static str {
        "Box"
    }

    #[inline]
    fn module_path() -> Option<&'static str> {
        Some("alloc::boxed")
    }
}

impl<T: Reflect + Typed> Typed for Box<T> {
    #[inline]
    fn type_info() -> &'static TypeInfo {
        T::type_info()
    }
}

impl<T: Reflect + Typed> Reflect for Box<T> {
    #[inline]
    fn reflect_kind(&self) -> ReflectKind {
        (**self).reflect_kind()
    }

    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        (**self).reflect_ref()
    }

    #[inline]
    fn reflect_mut(&mut self) -> ReflectMut<'_> {
        (**self).reflect_mut()
    }

    #[inline]
    fn as_marshaler(&self) -> Option<&dyn Marshaler> {
        (**self).as_marshaler()
    }

    #[inline]
    fn as_unmarshaler(&mut self) -> Option<&mut dyn Unmarshaler> {
        (**self).as_unmarshaler()
    }

    #[inline]
    fn as_serialize(&self) -> Option<&dyn erased_serde::Serialize> {
        (**self).as_serialize()
    }

    #[inline]
    fn deserialize_in_place(
        &mut self,
        deserializer: &mut dyn erased_serde::Deserializer<'_>,
    ) -> Option<Result<(), erased_serde::Error>> {
        (**self).deserialize_in_place(deserializer)
    }

    #[inline]
    fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (**self).reflect_debug(f)
    }
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;

    use crate::Reflect;
    use crate::info::{ReflectKind, TypePath, Typed};

    #[test]
    fn boxed_is_transparent() {
        let value: Box<Vec<u8>> = Box::new(vec![3]);
        assert_eq!(value.reflect_kind(), ReflectKind::List);
        assert!(<Box<Vec<u8>> as Typed>::type_info().ty().is::<Vec<u8>>());
        assert_eq!(Box::<u8>::type_path(), "alloc::boxed::Box<u8>");
        assert_eq!(format!("{:?}", &value as &dyn Reflect), "[3]");
    }
}
