use alloc::string::String;
use core::num::IntErrorKind;

use crate::impls::NonGenericTypeInfoCell;
use crate::info::{OpaqueInfo, TypeInfo, TypePath, Typed};
use crate::ops::{Scalar, ScalarError, ScalarRef};
use crate::reflection::impl_reflect_cast_fn;

macro_rules! impl_scalar_base {
    ($ty:ty, $path:expr, $name:expr, $module:expr) => {
        impl TypePath for $ty {
            #[inline]
            fn type_path() -> &'static str {
                $path
            }

            #[inline]
            fn type_name() -> &'static str {
                $name
            }

            #[inline]
            fn type_ident() -> &'static str {
                $name
            }

            #[inline]
            fn module_path() -> Option<&'static str> {
                $module
            }
        }

        impl Typed for $ty {
            fn type_info() -> &'static TypeInfo {
                static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
                CELL.get_or_init(|| TypeInfo::Scalar(OpaqueInfo::new::<Self>()))
            }
        }

        impl crate::Reflect for $ty {
            impl_reflect_cast_fn!(Scalar);

            fn reflect_debug(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::core::fmt::Debug::fmt(self, f)
            }
        }
    };
}

macro_rules! impl_scalar_int {
    ($variant:ident: $($ty:ident),*) => {$(
        impl_scalar_base!($ty, stringify!($ty), stringify!($ty), None);

        impl Scalar for $ty {
            #[inline]
            fn scalar_ref(&self) -> ScalarRef<'_> {
                ScalarRef::$variant((*self).into())
            }

            fn set_number(&mut self, literal: &str) -> Result<(), ScalarError> {
                *self = literal.parse::<$ty>().map_err(|err| match err.kind() {
                    IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                        ScalarError::OutOfRange {
                            literal: literal.into(),
                            target: stringify!($ty),
                        }
                    }
                    _ => ScalarError::InvalidNumber {
                        literal: literal.into(),
                        target: stringify!($ty),
                    },
                })?;
                Ok(())
            }
        }
    )*};
}

impl_scalar_int!(Int: i8, i16, i32, i64, i128);
impl_scalar_int!(Uint: u8, u16, u32, u64, u128);

// `isize`/`usize` have no lossless `From` into 128-bit integers.
macro_rules! impl_scalar_size {
    ($variant:ident: $ty:ident as $wide:ident) => {
        impl_scalar_base!($ty, stringify!($ty), stringify!($ty), None);

        impl Scalar for $ty {
            #[inline]
            fn scalar_ref(&self) -> ScalarRef<'_> {
                ScalarRef::$variant(*self as $wide)
            }

            fn set_number(&mut self, literal: &str) -> Result<(), ScalarError> {
                *self = literal.parse::<$ty>().map_err(|err| match err.kind() {
                    IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                        ScalarError::OutOfRange {
                            literal: literal.into(),
                            target: stringify!($ty),
                        }
                    }
                    _ => ScalarError::InvalidNumber {
                        literal: literal.into(),
                        target: stringify!($ty),
                    },
                })?;
                Ok(())
            }
        }
    };
}

impl_scalar_size!(Int: isize as i128);
impl_scalar_size!(Uint: usize as u128);

macro_rules! impl_scalar_float {
    ($variant:ident: $ty:ident) => {
        impl_scalar_base!($ty, stringify!($ty), stringify!($ty), None);

        impl Scalar for $ty {
            #[inline]
            fn scalar_ref(&self) -> ScalarRef<'_> {
                ScalarRef::$variant(*self)
            }

            fn set_number(&mut self, literal: &str) -> Result<(), ScalarError> {
                match literal.parse::<$ty>() {
                    Ok(value) if value.is_finite() => {
                        *self = value;
                        Ok(())
                    }
                    Ok(_) => Err(ScalarError::OutOfRange {
                        literal: literal.into(),
                        target: stringify!($ty),
                    }),
                    Err(_) => Err(ScalarError::InvalidNumber {
                        literal: literal.into(),
                        target: stringify!($ty),
                    }),
                }
            }
        }
    };
}

impl_scalar_float!(F32: f32);
impl_scalar_float!(F64: f64);

impl_scalar_base!(bool, "bool", "bool", None);

impl Scalar for bool {
    #[inline]
    fn scalar_ref(&self) -> ScalarRef<'_> {
        ScalarRef::Bool(*self)
    }

    #[inline]
    fn set_bool(&mut self, value: bool) -> Result<(), ScalarError> {
        *self = value;
        Ok(())
    }
}

impl_scalar_base!(char, "char", "char", None);

impl Scalar for char {
    #[inline]
    fn scalar_ref(&self) -> ScalarRef<'_> {
        ScalarRef::Char(*self)
    }

    fn set_str(&mut self, value: &str) -> Result<(), ScalarError> {
        let mut chars = value.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => {
                *self = c;
                Ok(())
            }
            _ => Err(ScalarError::NotAChar {
                len: value.chars().count(),
            }),
        }
    }
}

impl_scalar_base!(String, "alloc::string::String", "String", Some("alloc::string"));

impl Scalar for String {
    #[inline]
    fn scalar_ref(&self) -> ScalarRef<'_> {
        ScalarRef::Str(self)
    }

    fn set_str(&mut self, value: &str) -> Result<(), ScalarError> {
        self.clear();
        self.push_str(value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::Reflect;
    use crate::info::{ReflectKind, TypePath, Typed};
    use crate::ops::{Scalar, ScalarError, ScalarRef};

    #[test]
    fn integer_assignment() {
        let mut value = 0_i16;
        value.set_number("-1200").unwrap();
        assert_eq!(value, -1200);

        assert!(matches!(
            value.set_number("40000"),
            Err(ScalarError::OutOfRange { target: "i16", .. })
        ));
        assert!(matches!(
            value.set_number("1.5"),
            Err(ScalarError::InvalidNumber { .. })
        ));
        assert_eq!(value, -1200);

        let mut big = 0_u128;
        big.set_number("340282366920938463463374607431768211455").unwrap();
        assert_eq!(big, u128::MAX);
    }

    #[test]
    fn float_assignment() {
        let mut value = 0_f32;
        value.set_number("2.5e3").unwrap();
        assert_eq!(value, 2500.0);
        assert!(matches!(
            value.set_number("1e39"),
            Err(ScalarError::OutOfRange { .. })
        ));
    }

    #[test]
    fn wrong_kind() {
        let mut flag = false;
        assert_eq!(
            flag.set_number("1"),
            Err(ScalarError::InvalidType { expected: "a boolean" })
        );
        let mut text = String::new();
        assert_eq!(
            text.set_bool(true),
            Err(ScalarError::InvalidType { expected: "a string" })
        );
    }

    #[test]
    fn char_assignment() {
        let mut c = 'a';
        c.set_str("\u{e9}").unwrap();
        assert_eq!(c, '\u{e9}');
        assert_eq!(c.set_str("ab"), Err(ScalarError::NotAChar { len: 2 }));
        assert_eq!(c.set_str(""), Err(ScalarError::NotAChar { len: 0 }));
    }

    #[test]
    fn zero_values() {
        assert!(0_u8.scalar_ref().is_zero());
        assert!(!(-3_i64).scalar_ref().is_zero());
        assert!(String::new().scalar_ref().is_zero());
        assert!(false.scalar_ref().is_zero());
        assert!(0.0_f64.scalar_ref().is_zero());
        assert_eq!(7_usize.scalar_ref(), ScalarRef::Uint(7));
    }

    #[test]
    fn type_paths() {
        assert_eq!(String::type_path(), "alloc::string::String");
        assert_eq!(String::module_path(), Some("alloc::string"));
        assert_eq!(<f32 as Typed>::type_info().kind(), ReflectKind::Scalar);
        assert_eq!(format!("{:?}", &1.5_f64 as &dyn Reflect), "1.5");
    }
}
