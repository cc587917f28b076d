use crate::Reflect;
use crate::info::{ReflectKind, ReflectKindError};
use crate::ops::{Dynamic, List, Map, Optional, Scalar, Struct};

macro_rules! impl_as_fn {
    ($ref_ty:ident, $name:ident : $kind:ident => $target:ty) => {
        #[doc = concat!("Returns the inner value if this is a `", stringify!($kind), "`.")]
        pub fn $name(self) -> Result<$target, ReflectKindError> {
            match self {
                $ref_ty::$kind(value) => Ok(value),
                _ => Err(ReflectKindError {
                    expected: ReflectKind::$kind,
                    received: self.kind(),
                }),
            }
        }
    };
}

// -----------------------------------------------------------------------------
// ReflectRef

/// An immutable view of a reflected value by kind.
#[derive(Clone, Copy)]
pub enum ReflectRef<'a> {
    Struct(&'a dyn Struct),
    List(&'a dyn List),
    Map(&'a dyn Map),
    Optional(&'a dyn Optional),
    Scalar(&'a dyn Scalar),
    Dynamic(&'a Dynamic),
    Opaque(&'a dyn Reflect),
}

impl<'a> ReflectRef<'a> {
    /// Returns the kind of this view.
    pub const fn kind(&self) -> ReflectKind {
        match self {
            Self::Struct(_) => ReflectKind::Struct,
            Self::List(_) => ReflectKind::List,
            Self::Map(_) => ReflectKind::Map,
            Self::Optional(_) => ReflectKind::Optional,
            Self::Scalar(_) => ReflectKind::Scalar,
            Self::Dynamic(_) => ReflectKind::Dynamic,
            Self::Opaque(_) => ReflectKind::Opaque,
        }
    }

    impl_as_fn!(ReflectRef, as_struct: Struct => &'a dyn Struct);
    impl_as_fn!(ReflectRef, as_list: List => &'a dyn List);
    impl_as_fn!(ReflectRef, as_map: Map => &'a dyn Map);
    impl_as_fn!(ReflectRef, as_optional: Optional => &'a dyn Optional);
    impl_as_fn!(ReflectRef, as_scalar: Scalar => &'a dyn Scalar);
}

// -----------------------------------------------------------------------------
// ReflectMut

/// A mutable view of a reflected value by kind.
pub enum ReflectMut<'a> {
    Struct(&'a mut dyn Struct),
    List(&'a mut dyn List),
    Map(&'a mut dyn Map),
    Optional(&'a mut dyn Optional),
    Scalar(&'a mut dyn Scalar),
    Dynamic(&'a mut Dynamic),
    Opaque(&'a mut dyn Reflect),
}

impl<'a> ReflectMut<'a> {
    /// Returns the kind of this view.
    pub const fn kind(&self) -> ReflectKind {
        match self {
            Self::Struct(_) => ReflectKind::Struct,
            Self::List(_) => ReflectKind::List,
            Self::Map(_) => ReflectKind::Map,
            Self::Optional(_) => ReflectKind::Optional,
            Self::Scalar(_) => ReflectKind::Scalar,
            Self::Dynamic(_) => ReflectKind::Dynamic,
            Self::Opaque(_) => ReflectKind::Opaque,
        }
    }

    impl_as_fn!(ReflectMut, as_struct: Struct => &'a mut dyn Struct);
    impl_as_fn!(ReflectMut, as_list: List => &'a mut dyn List);
    impl_as_fn!(ReflectMut, as_map: Map => &'a mut dyn Map);
    impl_as_fn!(ReflectMut, as_optional: Optional => &'a mut dyn Optional);
    impl_as_fn!(ReflectMut, as_scalar: Scalar => &'a mut dyn Scalar);
}
