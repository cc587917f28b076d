use serde_core::ser::SerializeSeq;
use serde_core::{Serialize, Serializer};

use jx_reflect::ops::List;

use super::context::EncodeContext;
use super::driver::SerializeDriver;

/// Serializes a [`List`] as an array.
pub(super) struct ListSerializer<'a> {
    pub list: &'a dyn List,
    pub ctx: &'a EncodeContext<'a>,
}

impl Serialize for ListSerializer<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_seq(Some(self.list.len()))?;
        for item in self.list.iter() {
            state.serialize_element(&SerializeDriver::new(item, self.ctx))?;
        }
        state.end()
    }
}
