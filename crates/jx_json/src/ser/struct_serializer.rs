use serde_core::ser::SerializeMap;
use serde_core::{Serialize, Serializer};

use jx_reflect::ops::Struct;

use super::context::EncodeContext;
use super::driver::SerializeDriver;

use crate::access::{is_empty_value, member_at};
use crate::plan::FieldPlan;

/// Serializes a record as an object following its [`FieldPlan`].
pub(super) struct StructSerializer<'a> {
    pub plan: &'a FieldPlan,
    pub record: &'a dyn Struct,
    pub ctx: &'a EncodeContext<'a>,
}

impl Serialize for StructSerializer<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let omit_empty = self.ctx.json.omits_empty();
        let mut state = serializer.serialize_map(None)?;

        for field in self.plan.fields() {
            let member = match member_at(self.record, field.path()) {
                Ok(Some(member)) => member,
                // Hidden behind an embedded `None`.
                Ok(None) => continue,
                Err(err) => return Err(self.ctx.fail(err)),
            };

            if field.omit_empty().unwrap_or(omit_empty) && is_empty_value(member) {
                continue;
            }

            state.serialize_entry(field.name(), &SerializeDriver::new(member, self.ctx))?;
        }

        state.end()
    }
}
