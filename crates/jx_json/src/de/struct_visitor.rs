use serde_json::Value;

use jx_reflect::ops::Struct;

use super::context::DecodeContext;
use super::driver::decode_value;

use crate::access::member_at_mut;
use crate::error::{Error, UnknownFieldError};

/// Decodes an object into a record, matching keys against its field plan.
///
/// Keys are handled in input order. Members whose key is absent keep their
/// current value.
pub(super) fn visit_struct<'v>(
    ctx: &mut DecodeContext<'_, 'v>,
    input: &'v Value,
    record: &mut dyn Struct,
) -> Result<(), Error> {
    let type_path = record.reflect_type_path();
    let Value::Object(object) = input else {
        return Err(ctx.mismatch(input, type_path, None));
    };

    let plan = ctx.json.plan_of_info(record.reflect_type_info())?;

    for (key, value) in object {
        let Some(field) = plan.find(key) else {
            if ctx.json.disallows_unknown_fields() {
                return Err(UnknownFieldError { key: key.clone() }.into());
            }
            log::debug!("ignoring unknown field {key:?} of `{type_path}`");
            continue;
        };

        let member = member_at_mut(record, field.path())?;
        ctx.with_key(key, |ctx| decode_value(ctx, value, member))?;
    }

    Ok(())
}
