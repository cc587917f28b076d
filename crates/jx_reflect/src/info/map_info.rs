use crate::info::{Type, TypeInfo, TypePath, Typed, impl_type_fn};

/// Compile-time information of a string-keyed map type.
#[derive(Clone, Debug)]
pub struct MapInfo {
    ty: Type,
    value_ty: Type,
    value_info: fn() -> &'static TypeInfo,
}

impl MapInfo {
    impl_type_fn!(ty);

    pub const fn new<TMap: TypePath, TValue: Typed>() -> Self {
        Self {
            ty: Type::of::<TMap>(),
            value_ty: Type::of::<TValue>(),
            value_info: TValue::type_info,
        }
    }

    #[inline]
    pub const fn value_ty(&self) -> &Type {
        &self.value_ty
    }

    #[inline]
    pub fn value_info(&self) -> &'static TypeInfo {
        (self.value_info)()
    }
}
