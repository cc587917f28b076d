use core::fmt;

use thiserror::Error;

use crate::info::{ListInfo, MapInfo, OpaqueInfo, OptionalInfo, StructInfo, Type};

// -----------------------------------------------------------------------------
// ReflectKind

/// The shape of a reflected value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReflectKind {
    /// A record with named members, see [`Struct`](crate::ops::Struct).
    Struct,
    /// A sequence, see [`List`](crate::ops::List).
    List,
    /// A string-keyed map, see [`Map`](crate::ops::Map).
    Map,
    /// A nullable value, see [`Optional`](crate::ops::Optional).
    Optional,
    /// A boolean, number, character or string, see [`Scalar`](crate::ops::Scalar).
    Scalar,
    /// A dynamically-typed slot, see [`Dynamic`](crate::ops::Dynamic).
    Dynamic,
    /// A type whose content is not visible to reflection.
    Opaque,
}

impl ReflectKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            ReflectKind::Struct => "Struct",
            ReflectKind::List => "List",
            ReflectKind::Map => "Map",
            ReflectKind::Optional => "Optional",
            ReflectKind::Scalar => "Scalar",
            ReflectKind::Dynamic => "Dynamic",
            ReflectKind::Opaque => "Opaque",
        }
    }
}

impl fmt::Display for ReflectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Error returned when a kind-specific cast is applied to the wrong kind.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("kind mismatch: expected {expected}, received {received}")]
pub struct ReflectKindError {
    pub expected: ReflectKind,
    pub received: ReflectKind,
}

// -----------------------------------------------------------------------------
// TypeInfo

/// Compile-time type information for a reflected type.
#[derive(Debug, Clone)]
pub enum TypeInfo {
    Struct(StructInfo),
    List(ListInfo),
    Map(MapInfo),
    Optional(OptionalInfo),
    Scalar(OpaqueInfo),
    Dynamic(OpaqueInfo),
    Opaque(OpaqueInfo),
}

macro_rules! impl_cast_method {
    ($name:ident : $kind:ident => $info:ident) => {
        #[doc = concat!("Returns the [`", stringify!($info), "`] if this is a `", stringify!($kind), "`.")]
        pub fn $name(&self) -> Result<&$info, ReflectKindError> {
            match self {
                Self::$kind(info) => Ok(info),
                _ => Err(ReflectKindError {
                    expected: ReflectKind::$kind,
                    received: self.kind(),
                }),
            }
        }
    };
}

impl TypeInfo {
    /// Returns the underlying [`Type`].
    pub const fn ty(&self) -> &Type {
        match self {
            Self::Struct(info) => info.ty(),
            Self::List(info) => info.ty(),
            Self::Map(info) => info.ty(),
            Self::Optional(info) => info.ty(),
            Self::Scalar(info) | Self::Dynamic(info) | Self::Opaque(info) => info.ty(),
        }
    }

    #[inline]
    pub const fn ty_id(&self) -> core::any::TypeId {
        self.ty().id()
    }

    #[inline]
    pub fn type_path(&self) -> &'static str {
        self.ty().path()
    }

    #[inline]
    pub fn type_name(&self) -> &'static str {
        self.ty().name()
    }

    /// Returns the kind of the described type.
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

    impl_cast_method!(as_struct: Struct => StructInfo);
    impl_cast_method!(as_list: List => ListInfo);
    impl_cast_method!(as_map: Map => MapInfo);
    impl_cast_method!(as_optional: Optional => OptionalInfo);
}

#[cfg(test)]
mod tests {
    use super::ReflectKind;
    use crate::info::Typed;

    #[test]
    fn kind_display_pads() {
        assert_eq!(format!("{:>8}", ReflectKind::Map), "     Map");
    }

    #[test]
    fn cast_error() {
        let err = <Vec<u8> as Typed>::type_info().as_struct().unwrap_err();
        assert_eq!(err.expected, ReflectKind::Struct);
        assert_eq!(err.received, ReflectKind::List);
        assert_eq!(err.to_string(), "kind mismatch: expected Struct, received List");
    }
}
