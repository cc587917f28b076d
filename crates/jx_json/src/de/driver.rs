use serde_json::Value;

use jx_reflect::Reflect;
use jx_reflect::ops::{Dynamic, ReflectMut};

use super::collection_visitor::{visit_list, visit_map};
use super::context::DecodeContext;
use super::scalar_visitor::{to_dynamic, visit_scalar};
use super::struct_visitor::visit_struct;

use crate::error::{Error, UnmarshalError};

/// Decodes `input` into `target`.
///
/// The first applicable rule wins:
///
/// 1. An [`Unmarshaler`] hook, which receives the compact JSON text of the
///    subtree, `null` included.
/// 2. A serde bridge ([`Reflect::deserialize_in_place`]).
/// 3. `null` clears lists and maps, resets options and dynamic slots, and
///    leaves everything else untouched.
/// 4. Decoding by the target's kind.
///
/// [`Unmarshaler`]: jx_reflect::ops::Unmarshaler
pub(super) fn decode_value<'v>(
    ctx: &mut DecodeContext<'_, 'v>,
    input: &'v Value,
    target: &mut dyn Reflect,
) -> Result<(), Error> {
    let type_path = target.reflect_type_path();

    if let Some(hook) = target.as_unmarshaler() {
        let bytes = serde_json::to_vec(input).map_err(|err| UnmarshalError::new(type_path, err))?;
        return hook
            .unmarshal_json(&bytes)
            .map_err(|err| UnmarshalError::new(type_path, err).into());
    }

    let mut bridge = <dyn erased_serde::Deserializer>::erase(input);
    if let Some(result) = target.deserialize_in_place(&mut bridge) {
        return result.map_err(|err| ctx.mismatch(input, type_path, Some(err.to_string())));
    }

    if input.is_null() {
        match target.reflect_mut() {
            ReflectMut::List(list) => list.clear(),
            ReflectMut::Map(map) => map.clear(),
            ReflectMut::Optional(optional) => optional.set_none(),
            ReflectMut::Dynamic(dynamic) => *dynamic = Dynamic::Null,
            ReflectMut::Struct(_) | ReflectMut::Scalar(_) | ReflectMut::Opaque(_) => {}
        }
        return Ok(());
    }

    match target.reflect_mut() {
        ReflectMut::Struct(record) => visit_struct(ctx, input, record),
        ReflectMut::List(list) => visit_list(ctx, input, list),
        ReflectMut::Map(map) => visit_map(ctx, input, map),
        ReflectMut::Optional(optional) => decode_value(ctx, input, optional.get_or_insert_default()),
        ReflectMut::Scalar(scalar) => visit_scalar(ctx, input, scalar),
        ReflectMut::Dynamic(dynamic) => {
            *dynamic = to_dynamic(ctx, input)?;
            Ok(())
        }
        ReflectMut::Opaque(_) => Err(ctx.mismatch(
            input,
            type_path,
            Some("the type has no JSON representation".to_owned()),
        )),
    }
}
