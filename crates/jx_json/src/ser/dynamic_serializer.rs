use serde_core::ser::{SerializeMap, SerializeSeq};
use serde_core::{Serialize, Serializer};

use jx_reflect::ops::Dynamic;

use super::context::EncodeContext;
use super::scalar_serializer::{non_finite, serialize_number};

/// Serializes a [`Dynamic`] tree.
pub(super) struct DynamicSerializer<'a> {
    pub dynamic: &'a Dynamic,
    pub ctx: &'a EncodeContext<'a>,
}

impl Serialize for DynamicSerializer<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.dynamic {
            Dynamic::Null => serializer.serialize_unit(),
            Dynamic::Bool(v) => serializer.serialize_bool(*v),
            Dynamic::Float(v) if v.is_finite() => serializer.serialize_f64(*v),
            Dynamic::Float(v) => Err(self.ctx.fail(non_finite(*v))),
            Dynamic::Number(v) => serialize_number(v.as_str(), self.ctx, serializer),
            Dynamic::String(v) => serializer.serialize_str(v),
            Dynamic::List(items) => {
                let mut state = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    state.serialize_element(&DynamicSerializer {
                        dynamic: item,
                        ctx: self.ctx,
                    })?;
                }
                state.end()
            }
            Dynamic::Map(entries) => {
                let mut state = serializer.serialize_map(Some(entries.len()))?;
                for (key, value) in entries {
                    state.serialize_entry(
                        key,
                        &DynamicSerializer {
                            dynamic: value,
                            ctx: self.ctx,
                        },
                    )?;
                }
                state.end()
            }
        }
    }
}
