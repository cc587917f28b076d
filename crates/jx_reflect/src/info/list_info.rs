use crate::info::{Type, TypeInfo, TypePath, Typed, impl_type_fn};

/// Compile-time information of a sequence type.
#[derive(Clone, Debug)]
pub struct ListInfo {
    ty: Type,
    item_ty: Type,
    item_info: fn() -> &'static TypeInfo,
}

impl ListInfo {
    impl_type_fn!(ty);

    pub const fn new<TList: TypePath, TItem: Typed>() -> Self {
        Self {
            ty: Type::of::<TList>(),
            item_ty: Type::of::<TItem>(),
            item_info: TItem::type_info,
        }
    }

    #[inline]
    pub const fn item_ty(&self) -> &Type {
        &self.item_ty
    }

    #[inline]
    pub fn item_info(&self) -> &'static TypeInfo {
        (self.item_info)()
    }
}
