use core::fmt;

use crate::impls::NonGenericTypeInfoCell;
use crate::info::{OpaqueInfo, TypeInfo, TypePath, Typed};
use crate::ops::{Dynamic, Number, Scalar, ScalarError, ScalarRef, is_number_literal};
use crate::reflection::impl_reflect_cast_fn;

// -----------------------------------------------------------------------------
// Dynamic

impl TypePath for Dynamic {
    #[inline]
    fn type_path() -> &'static str {
        "jx_reflect::ops::Dynamic"
    }

    #[inline]
    fn type_name() -> &'static str {
        "Dynamic"
    }

    #[inline]
    fn type_ident() -> &'static str {
        "Dynamic"
    }

    #[inline]
    fn module_path() -> Option<&'static str> {
        Some("jx_reflect::ops")
    }
}

impl Typed for Dynamic {
    fn type_info() -> &'static TypeInfo {
        static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
        CELL.get_or_init(|| TypeInfo::Dynamic(OpaqueInfo::new::<Self>()))
    }
}

impl crate::Reflect for Dynamic {
    impl_reflect_cast_fn!(Dynamic);

    fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

// -----------------------------------------------------------------------------
// Number

impl TypePath for Number {
    #[inline]
    fn type_path() -> &'static str {
        "jx_reflect::ops::Number"
    }

    #[inline]
    fn type_name() -> &'static str {
        "Number"
    }

    #[inline]
    fn type_ident() -> &'static str {
        "Number"
    }

    #[inline]
    fn module_path() -> Option<&'static str> {
        Some("jx_reflect::ops")
    }
}

impl Typed for Number {
    fn type_info() -> &'static TypeInfo {
        static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
        CELL.get_or_init(|| TypeInfo::Scalar(OpaqueInfo::new::<Self>()))
    }
}

impl crate::Reflect for Number {
    impl_reflect_cast_fn!(Scalar);

    fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl Scalar for Number {
    #[inline]
    fn scalar_ref(&self) -> ScalarRef<'_> {
        ScalarRef::Number(self.as_str())
    }

    fn set_number(&mut self, literal: &str) -> Result<(), ScalarError> {
        *self = Number::new(literal.into());
        Ok(())
    }

    /// A quoted literal is accepted as long as it is a valid number.
    fn set_str(&mut self, value: &str) -> Result<(), ScalarError> {
        if !is_number_literal(value) {
            return Err(ScalarError::InvalidNumber {
                literal: value.into(),
                target: "Number",
            });
        }
        *self = Number::new(value.into());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::Reflect;
    use crate::info::ReflectKind;
    use crate::ops::{Dynamic, Number, ReflectRef, Scalar};

    #[test]
    fn dynamic_kind() {
        let value = Dynamic::from("text");
        assert_eq!(value.reflect_kind(), ReflectKind::Dynamic);
        assert!(matches!(value.reflect_ref(), ReflectRef::Dynamic(Dynamic::String(s)) if s.as_str() == "text"));
    }

    #[test]
    fn number_from_string() {
        let mut n = Number::default();
        assert!(n.scalar_ref().is_zero());
        n.set_str("12.50").unwrap();
        assert_eq!(n.as_str(), "12.50");
        assert!(n.set_str("twelve").is_err());
        assert_eq!(n.as_str(), "12.50");
    }

    #[test]
    fn only_empty_number_text_is_zero() {
        assert!(!Number::new("0".into()).scalar_ref().is_zero());
        assert!(!Number::new("0.0".into()).scalar_ref().is_zero());
        assert!(Number::new("".into()).scalar_ref().is_zero());
    }
}
