//! The decode path: input is parsed into a [`serde_json::Value`] tree which
//! is then walked against the reflected target.

// -----------------------------------------------------------------------------
// Modules

mod context;
mod driver;

mod collection_visitor;
mod scalar_visitor;
mod struct_visitor;

// -----------------------------------------------------------------------------
// Entry points

use jx_reflect::Reflect;
use serde_json::Value;

use crate::Json;
use crate::error::{Error, SyntaxError};

use context::DecodeContext;

/// Parses one complete document and decodes it into `target`.
pub(crate) fn decode_slice(json: &Json, data: &[u8], target: &mut dyn Reflect) -> Result<(), Error> {
    let input: Value =
        serde_json::from_slice(data).map_err(|err| SyntaxError::from_slice(&err, data))?;
    decode_root(json, &input, target)
}

/// Decodes an already parsed document into `target`.
pub(crate) fn decode_root(json: &Json, input: &Value, target: &mut dyn Reflect) -> Result<(), Error> {
    let mut ctx = DecodeContext::new(json);
    driver::decode_value(&mut ctx, input, target)
}
