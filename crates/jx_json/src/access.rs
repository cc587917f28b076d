//! Reading and writing record members along a planned path.

use jx_reflect::Reflect;
use jx_reflect::ops::{ReflectMut, ReflectRef, Struct};

use crate::error::ResolutionError;

/// Follows `path` from `record` to a member.
///
/// Returns `Ok(None)` when an embedded `Option` hop on the way is `None`.
pub(crate) fn member_at<'a>(
    mut record: &'a dyn Struct,
    path: &[usize],
) -> Result<Option<&'a dyn Reflect>, ResolutionError> {
    let Some((&last, hops)) = path.split_last() else {
        return Err(ResolutionError::new(record.reflect_type_path(), "empty member path"));
    };

    for &index in hops {
        let type_path = record.reflect_type_path();
        let member = record
            .field_at(index)
            .ok_or_else(|| missing(type_path, index))?;

        record = match member.reflect_ref() {
            ReflectRef::Struct(inner) => inner,
            ReflectRef::Optional(optional) => match optional.get() {
                None => return Ok(None),
                Some(inner) => match inner.reflect_ref() {
                    ReflectRef::Struct(inner) => inner,
                    _ => return Err(not_a_record(type_path, index)),
                },
            },
            _ => return Err(not_a_record(type_path, index)),
        };
    }

    let type_path = record.reflect_type_path();
    record
        .field_at(last)
        .map(Some)
        .ok_or_else(|| missing(type_path, last))
}

/// Follows `path` from `record` to a member, filling `None` embedded hops
/// with their default value.
pub(crate) fn member_at_mut<'a>(
    mut record: &'a mut dyn Struct,
    path: &[usize],
) -> Result<&'a mut dyn Reflect, ResolutionError> {
    let Some((&last, hops)) = path.split_last() else {
        return Err(ResolutionError::new(record.reflect_type_path(), "empty member path"));
    };

    for &index in hops {
        let type_path = record.reflect_type_path();
        let member = record
            .field_at_mut(index)
            .ok_or_else(|| missing(type_path, index))?;

        record = match member.reflect_mut() {
            ReflectMut::Struct(inner) => inner,
            ReflectMut::Optional(optional) => match optional.get_or_insert_default().reflect_mut() {
                ReflectMut::Struct(inner) => inner,
                _ => return Err(not_a_record(type_path, index)),
            },
            _ => return Err(not_a_record(type_path, index)),
        };
    }

    let type_path = record.reflect_type_path();
    record
        .field_at_mut(last)
        .ok_or_else(|| missing(type_path, last))
}

fn missing(type_path: &'static str, index: usize) -> ResolutionError {
    ResolutionError::new(type_path, format!("no member at index {index}"))
}

fn not_a_record(type_path: &'static str, index: usize) -> ResolutionError {
    ResolutionError::new(type_path, format!("embedded member {index} is not a record"))
}

/// Returns `true` for the empty value of the value's kind.
///
/// Records and opaque values are never empty.
pub(crate) fn is_empty_value(value: &dyn Reflect) -> bool {
    match value.reflect_ref() {
        ReflectRef::Scalar(scalar) => scalar.scalar_ref().is_zero(),
        ReflectRef::List(list) => list.is_empty(),
        ReflectRef::Map(map) => map.is_empty(),
        ReflectRef::Optional(optional) => optional.is_none(),
        ReflectRef::Dynamic(dynamic) => dynamic.is_empty(),
        ReflectRef::Struct(_) | ReflectRef::Opaque(_) => false,
    }
}
