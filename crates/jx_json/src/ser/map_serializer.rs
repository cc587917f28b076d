use serde_core::ser::SerializeMap;
use serde_core::{Serialize, Serializer};

use jx_reflect::ops::Map;

use super::context::EncodeContext;
use super::driver::SerializeDriver;

/// Serializes a [`Map`] as an object with keys in ascending order.
pub(super) struct MapSerializer<'a> {
    pub map: &'a dyn Map,
    pub ctx: &'a EncodeContext<'a>,
}

impl Serialize for MapSerializer<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut entries: Vec<_> = self.map.iter().collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));

        let mut state = serializer.serialize_map(Some(entries.len()))?;
        for (key, value) in entries {
            state.serialize_entry(key, &SerializeDriver::new(value, self.ctx))?;
        }
        state.end()
    }
}
