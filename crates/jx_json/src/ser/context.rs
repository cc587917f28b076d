use core::cell::RefCell;

use serde_core::ser;

use crate::Json;
use crate::error::Error;

/// Per-call encode state.
///
/// serde only carries string errors, so the first typed failure is parked
/// here and recovered once the serializer unwinds.
pub(super) struct EncodeContext<'a> {
    pub json: &'a Json,
    error: RefCell<Option<Error>>,
}

impl<'a> EncodeContext<'a> {
    pub fn new(json: &'a Json) -> Self {
        Self {
            json,
            error: RefCell::new(None),
        }
    }

    /// Records `err` unless an earlier failure is already recorded, and
    /// returns a serde error carrying its message.
    pub fn fail<E: ser::Error>(&self, err: impl Into<Error>) -> E {
        let err = err.into();
        let custom = E::custom(&err);
        let mut slot = self.error.borrow_mut();
        if slot.is_none() {
            *slot = Some(err);
        }
        custom
    }

    pub fn take_error(&self) -> Option<Error> {
        self.error.borrow_mut().take()
    }
}

pub(super) fn from_serde(err: serde_json::Error) -> Error {
    if err.is_io() {
        Error::Io(err.into())
    } else {
        Error::UnsupportedValue(err.to_string())
    }
}
