use alloc::collections::BTreeMap;

use serde_json::Value;

use jx_reflect::ops::{Dynamic, Number, Scalar, ScalarError};

use super::context::DecodeContext;

use crate::error::Error;

/// Assigns a JSON bool, number or string to a scalar.
///
/// Numbers are handed over as their exact literal text, so range and
/// precision checks belong to the target type.
pub(super) fn visit_scalar(
    ctx: &mut DecodeContext<'_, '_>,
    input: &Value,
    scalar: &mut dyn Scalar,
) -> Result<(), Error> {
    let type_path = scalar.reflect_type_path();
    let result = match input {
        Value::Bool(v) => scalar.set_bool(*v),
        Value::Number(v) => scalar.set_number(v.as_str()),
        Value::String(v) => scalar.set_str(v),
        _ => return Err(ctx.mismatch(input, type_path, None)),
    };

    result.map_err(|err| match err {
        ScalarError::InvalidType { .. } => ctx.mismatch(input, type_path, None),
        err => ctx.mismatch(input, type_path, Some(err.to_string())),
    })
}

/// Converts a JSON value into a [`Dynamic`] tree.
///
/// Numbers become [`Dynamic::Float`], or exact [`Dynamic::Number`] text when
/// the configuration uses numbers.
pub(super) fn to_dynamic<'v>(
    ctx: &mut DecodeContext<'_, 'v>,
    input: &'v Value,
) -> Result<Dynamic, Error> {
    Ok(match input {
        Value::Null => Dynamic::Null,
        Value::Bool(v) => Dynamic::Bool(*v),
        Value::Number(v) if ctx.json.uses_number() => {
            Dynamic::Number(Number::new(v.as_str().to_owned()))
        }
        Value::Number(v) => match v.as_str().parse::<f64>() {
            Ok(float) if float.is_finite() => Dynamic::Float(float),
            _ => {
                return Err(ctx.mismatch(
                    input,
                    "f64",
                    Some(format!("number {v} out of range for f64")),
                ));
            }
        },
        Value::String(v) => Dynamic::String(v.clone()),
        Value::Array(items) => {
            let mut list = Vec::with_capacity(items.len());
            for (index, item) in items.iter().enumerate() {
                list.push(ctx.with_index(index, |ctx| to_dynamic(ctx, item))?);
            }
            Dynamic::List(list)
        }
        Value::Object(entries) => {
            let mut map = BTreeMap::new();
            for (key, value) in entries {
                map.insert(key.clone(), ctx.with_key(key, |ctx| to_dynamic(ctx, value))?);
            }
            Dynamic::Map(map)
        }
    })
}
