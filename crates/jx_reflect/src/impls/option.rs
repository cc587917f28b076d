use crate::Reflect;
use crate::impls::{GenericTypeInfoCell, GenericTypePathCell, concat};
use crate::info::{OptionalInfo, TypeInfo, TypePath, Typed};
use crate::ops::Optional;
use crate::reflection::impl_reflect_cast_fn;

impl<T: TypePath> TypePath for Option<T> {
    fn type_path() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| concat(&["core::option::Option<", T::type_path(), ">"]))
    }

    fn type_name() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| concat(&["Option<", T::type_name(), ">"]))
    }

    #[inline]
    fn type_ident() -> &'static str {
        "Option"
    }

    #[inline]
    fn module_path() -> Option<&'static str> {
        Some("core::option")
    }
}

impl<T: Reflect + Typed + Default> Typed for Option<T> {
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| TypeInfo::Optional(OptionalInfo::new::<Self, T>()))
    }
}

impl<T: Reflect + Typed + Default> Reflect for Option<T> {
    impl_reflect_cast_fn!(Optional);
}

impl<T: Reflect + Typed + Default> Optional for Option<T> {
    #[inline]
    fn get(&self) -> Option<&dyn Reflect> {
        self.as_ref().map(|value| value as &dyn Reflect)
    }

    #[inline]
    fn get_mut(&mut self) -> Option<&mut dyn Reflect> {
        self.as_mut().map(|value| value as &mut dyn Reflect)
    }

    #[inline]
    fn set_none(&mut self) {
        *self = None;
    }

    #[inline]
    fn get_or_insert_default(&mut self) -> &mut dyn Reflect {
        self.get_or_insert_with(T::default)
    }
}

#[cfg(test)]
mod tests {
    use crate::Reflect;
    use crate::info::Typed;
    use crate::ops::Optional;

    #[test]
    fn fill_and_clear() {
        let mut value: Option<String> = None;
        assert!(Optional::is_none(&value));
        Optional::get_or_insert_default(&mut value)
            .downcast_mut::<String>()
            .unwrap()
            .push('z');
        assert_eq!(value.as_deref(), Some("z"));
        assert_eq!(format!("{:?}", &value as &dyn Reflect), "Some(\"z\")");

        value.set_none();
        assert_eq!(value, None);
        assert_eq!(format!("{:?}", &value as &dyn Reflect), "None");
    }

    #[test]
    fn optional_info() {
        let info = <Option<i8> as Typed>::type_info().as_optional().unwrap();
        assert!(info.inner_ty().is::<i8>());
        assert_eq!(info.type_name(), "Option<i8>");
    }
}
