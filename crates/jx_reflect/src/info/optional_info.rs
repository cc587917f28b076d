use crate::info::{Type, TypeInfo, TypePath, Typed, impl_type_fn};

/// Compile-time information of a nullable type.
#[derive(Clone, Debug)]
pub struct OptionalInfo {
    ty: Type,
    inner_ty: Type,
    inner_info: fn() -> &'static TypeInfo,
}

impl OptionalInfo {
    impl_type_fn!(ty);

    pub const fn new<TOption: TypePath, TInner: Typed>() -> Self {
        Self {
            ty: Type::of::<TOption>(),
            inner_ty: Type::of::<TInner>(),
            inner_info: TInner::type_info,
        }
    }

    #[inline]
    pub const fn inner_ty(&self) -> &Type {
        &self.inner_ty
    }

    #[inline]
    pub fn inner_info(&self) -> &'static TypeInfo {
        (self.inner_info)()
    }
}
