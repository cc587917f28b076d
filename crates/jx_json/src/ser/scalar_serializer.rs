use serde_core::{Serialize, Serializer};

use jx_reflect::ops::ScalarRef;

use super::context::EncodeContext;

use crate::error::Error;

/// Serializes a scalar value.
pub(super) struct ScalarSerializer<'a> {
    pub scalar: ScalarRef<'a>,
    pub ctx: &'a EncodeContext<'a>,
}

impl Serialize for ScalarSerializer<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.scalar {
            ScalarRef::Bool(v) => serializer.serialize_bool(v),
            ScalarRef::Int(v) => serializer.serialize_i128(v),
            ScalarRef::Uint(v) => serializer.serialize_u128(v),
            ScalarRef::F32(v) if v.is_finite() => serializer.serialize_f32(v),
            ScalarRef::F64(v) if v.is_finite() => serializer.serialize_f64(v),
            ScalarRef::F32(v) => Err(self.ctx.fail(non_finite(f64::from(v)))),
            ScalarRef::F64(v) => Err(self.ctx.fail(non_finite(v))),
            ScalarRef::Char(v) => serializer.serialize_char(v),
            ScalarRef::Str(v) => serializer.serialize_str(v),
            ScalarRef::Number(v) => serialize_number(v, self.ctx, serializer),
        }
    }
}

pub(super) fn non_finite(value: f64) -> Error {
    Error::UnsupportedValue(format!("{value}"))
}

/// Writes a number literal verbatim after checking it. An empty literal is
/// written as `0`.
pub(super) fn serialize_number<S: Serializer>(
    literal: &str,
    ctx: &EncodeContext<'_>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let literal = if literal.is_empty() { "0" } else { literal };
    let number: serde_json::Number = literal.parse().map_err(|_| {
        ctx.fail(Error::UnsupportedValue(format!(
            "invalid number literal {literal:?}"
        )))
    })?;
    number.serialize(serializer)
}
