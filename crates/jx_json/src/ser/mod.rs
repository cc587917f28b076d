//! The encode path: a [`Serialize`](serde_core::Serialize) view over
//! reflected values, written by *serde_json*.

// -----------------------------------------------------------------------------
// Modules

mod context;
mod driver;
mod encoder;

mod dynamic_serializer;
mod list_serializer;
mod map_serializer;
mod scalar_serializer;
mod struct_serializer;

// -----------------------------------------------------------------------------
// Exports

pub(crate) use encoder::TypeEncoder;

use std::io;

use jx_reflect::Reflect;
use serde_core::Serialize;
use serde_json::ser::{CompactFormatter, PrettyFormatter, Serializer};

use crate::Json;
use crate::error::Error;
use crate::format::MarkupFormatter;

use context::EncodeContext;
use driver::SerializeDriver;

/// Writes `value` to `writer`, compact or indented by `indent`.
pub(crate) fn write_value<W: io::Write>(
    json: &Json,
    writer: W,
    value: &dyn Reflect,
    indent: Option<&str>,
    escape_markup: bool,
) -> Result<(), Error> {
    let ctx = EncodeContext::new(json);
    let driver = SerializeDriver::new(value, &ctx);

    let result = match indent {
        None => {
            let formatter = MarkupFormatter::new(CompactFormatter, escape_markup);
            driver.serialize(&mut Serializer::with_formatter(writer, formatter))
        }
        Some(indent) => {
            let pretty = PrettyFormatter::with_indent(indent.as_bytes());
            let formatter = MarkupFormatter::new(pretty, escape_markup);
            driver.serialize(&mut Serializer::with_formatter(writer, formatter))
        }
    };

    result.map_err(|err| ctx.take_error().unwrap_or_else(|| context::from_serde(err)))
}
