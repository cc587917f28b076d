use serde_core::{Serialize, Serializer};

use jx_reflect::Reflect;
use jx_reflect::ops::ReflectRef;

use super::context::EncodeContext;
use super::dynamic_serializer::DynamicSerializer;
use super::encoder::TypeEncoder;
use super::list_serializer::ListSerializer;
use super::map_serializer::MapSerializer;
use super::scalar_serializer::ScalarSerializer;
use super::struct_serializer::StructSerializer;

use crate::error::{Error, MarshalError, ResolutionError};

// -----------------------------------------------------------------------------
// SerializeDriver

/// Serializes any reflected value.
///
/// The first applicable rule wins:
///
/// 1. A [`Marshaler`] hook. Its output is checked to be valid JSON and
///    written through the same formatter, so escaping still applies.
/// 2. A serde bridge ([`Reflect::as_serialize`]).
/// 3. The cached [`TypeEncoder`] of the value's type.
///
/// [`Marshaler`]: jx_reflect::ops::Marshaler
pub(super) struct SerializeDriver<'a> {
    value: &'a dyn Reflect,
    ctx: &'a EncodeContext<'a>,
}

impl<'a> SerializeDriver<'a> {
    #[inline]
    pub const fn new(value: &'a dyn Reflect, ctx: &'a EncodeContext<'a>) -> Self {
        Self { value, ctx }
    }
}

impl Serialize for SerializeDriver<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let ctx = self.ctx;
        let value = self.value;
        let type_path = value.reflect_type_path();

        if let Some(hook) = value.as_marshaler() {
            let bytes = hook
                .marshal_json()
                .map_err(|err| ctx.fail(MarshalError::new(type_path, err)))?;
            let raw: serde_json::Value = serde_json::from_slice(&bytes)
                .map_err(|err| ctx.fail(MarshalError::new(type_path, err)))?;
            return raw.serialize(serializer);
        }

        if let Some(bridge) = value.as_serialize() {
            return erased_serde::serialize(bridge, serializer)
                .map_err(|err| ctx.fail(MarshalError::new(type_path, err.to_string())));
        }

        let encoder = ctx
            .json
            .encoder_of(value.reflect_type_info())
            .map_err(|err| ctx.fail(err))?;

        match (&*encoder, value.reflect_ref()) {
            (TypeEncoder::Struct(plan), ReflectRef::Struct(record)) => {
                StructSerializer { plan, record, ctx }.serialize(serializer)
            }
            (TypeEncoder::List, ReflectRef::List(list)) => {
                ListSerializer { list, ctx }.serialize(serializer)
            }
            (TypeEncoder::Map, ReflectRef::Map(map)) => {
                MapSerializer { map, ctx }.serialize(serializer)
            }
            (TypeEncoder::Optional, ReflectRef::Optional(optional)) => match optional.get() {
                Some(inner) => serializer.serialize_some(&SerializeDriver::new(inner, ctx)),
                None => serializer.serialize_none(),
            },
            (TypeEncoder::Scalar, ReflectRef::Scalar(scalar)) => ScalarSerializer {
                scalar: scalar.scalar_ref(),
                ctx,
            }
            .serialize(serializer),
            (TypeEncoder::Dynamic, ReflectRef::Dynamic(dynamic)) => {
                DynamicSerializer { dynamic, ctx }.serialize(serializer)
            }
            (TypeEncoder::Opaque, ReflectRef::Opaque(_)) => Err(ctx.fail(Error::UnsupportedValue(
                format!("`{type_path}` has no JSON representation"),
            ))),
            (encoder, view) => Err(ctx.fail(ResolutionError::new(
                type_path,
                format!(
                    "described as {} but reflected as {}",
                    encoder.kind(),
                    view.kind()
                ),
            ))),
        }
    }
}
