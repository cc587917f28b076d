use serde_json::Value;

use jx_reflect::ops::{List, Map};

use super::context::DecodeContext;
use super::driver::decode_value;

use crate::error::Error;

/// Decodes an array into a list, replacing its contents.
pub(super) fn visit_list<'v>(
    ctx: &mut DecodeContext<'_, 'v>,
    input: &'v Value,
    list: &mut dyn List,
) -> Result<(), Error> {
    let Value::Array(items) = input else {
        return Err(ctx.mismatch(input, list.reflect_type_path(), None));
    };

    list.clear();
    for (index, item) in items.iter().enumerate() {
        let slot = list.push_default();
        ctx.with_index(index, |ctx| decode_value(ctx, item, slot))?;
    }
    Ok(())
}

/// Decodes an object into a map. Each key gets a freshly decoded value;
/// keys absent from the input are kept.
pub(super) fn visit_map<'v>(
    ctx: &mut DecodeContext<'_, 'v>,
    input: &'v Value,
    map: &mut dyn Map,
) -> Result<(), Error> {
    let Value::Object(entries) = input else {
        return Err(ctx.mismatch(input, map.reflect_type_path(), None));
    };

    for (key, value) in entries {
        let slot = map.insert_default(key);
        ctx.with_key(key, |ctx| decode_value(ctx, value, slot))?;
    }
    Ok(())
}
