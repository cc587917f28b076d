use serde_json::Value;

use crate::Json;
use crate::error::{Error, TypeMismatchError};

enum Segment<'v> {
    Key(&'v str),
    Index(usize),
}

/// Per-call decode state: the configuration and the member path from the
/// root, used in error reports.
pub(super) struct DecodeContext<'a, 'v> {
    pub json: &'a Json,
    path: Vec<Segment<'v>>,
}

impl<'a, 'v> DecodeContext<'a, 'v> {
    pub fn new(json: &'a Json) -> Self {
        Self {
            json,
            path: Vec::new(),
        }
    }

    /// Runs `f` one object member deeper.
    pub fn with_key<R>(&mut self, key: &'v str, f: impl FnOnce(&mut Self) -> R) -> R {
        self.path.push(Segment::Key(key));
        let result = f(self);
        self.path.pop();
        result
    }

    /// Runs `f` one array element deeper.
    pub fn with_index<R>(&mut self, index: usize, f: impl FnOnce(&mut Self) -> R) -> R {
        self.path.push(Segment::Index(index));
        let result = f(self);
        self.path.pop();
        result
    }

    pub fn mismatch(&self, found: &Value, type_path: &'static str, detail: Option<String>) -> Error {
        Error::TypeMismatch(TypeMismatchError {
            found: kind_of(found),
            type_path,
            path: self.path_string(),
            detail,
        })
    }

    fn path_string(&self) -> String {
        let mut out = String::new();
        for segment in &self.path {
            match segment {
                Segment::Key(key) => {
                    if !out.is_empty() {
                        out.push('.');
                    }
                    out.push_str(key);
                }
                Segment::Index(index) => out.push_str(&format!("[{index}]")),
            }
        }
        out
    }
}

pub(super) const fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use super::DecodeContext;
    use crate::Json;

    fn path_of(err: crate::Error) -> String {
        match err {
            crate::Error::TypeMismatch(err) => err.path,
            other => panic!("expected a type mismatch, got {other:?}"),
        }
    }

    #[test]
    fn member_paths() {
        let json = Json::new();
        let mut ctx = DecodeContext::new(&json);

        assert_eq!(path_of(ctx.mismatch(&Value::Null, "u8", None)), "");

        let err = ctx.with_index(1, |ctx| {
            ctx.with_key("items", |ctx| {
                ctx.with_index(0, |ctx| {
                    ctx.with_key("id", |ctx| ctx.mismatch(&Value::Bool(true), "u8", None))
                })
            })
        });
        assert_eq!(path_of(err), "[1].items[0].id");

        let err = ctx.with_key("a", |ctx| {
            ctx.with_key("b", |ctx| ctx.mismatch(&Value::Null, "u8", None))
        });
        assert_eq!(path_of(err), "a.b");
    }
}
