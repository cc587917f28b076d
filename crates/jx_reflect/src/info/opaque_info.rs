use crate::info::{Type, TypePath, impl_type_fn};

/// Compile-time information of a type without visible structure.
///
/// Used for scalars, the dynamic value and opaque types.
#[derive(Clone, Debug)]
pub struct OpaqueInfo {
    ty: Type,
}

impl OpaqueInfo {
    impl_type_fn!(ty);

    pub const fn new<T: TypePath + ?Sized>() -> Self {
        Self { ty: Type::of::<T>() }
    }
}
