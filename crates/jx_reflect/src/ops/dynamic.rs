use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;

use crate::ops::Number;

/// A self-describing value slot that holds any JSON tree.
///
/// A field of this type accepts whatever the input contains. Numbers decode
/// to [`Dynamic::Float`], or to [`Dynamic::Number`] when the decoder runs in
/// arbitrary-precision mode. Objects decode to a [`BTreeMap`].
///
/// # Examples
///
/// ```
/// use jx_reflect::ops::Dynamic;
///
/// let value = Dynamic::from(vec![Dynamic::from(1.5), Dynamic::from("x")]);
/// assert_eq!(value.as_list().map(Vec::len), Some(2));
/// assert!(Dynamic::default().is_null());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Dynamic {
    #[default]
    Null,
    Bool(bool),
    Float(f64),
    Number(Number),
    String(String),
    List(Vec<Dynamic>),
    Map(BTreeMap<String, Dynamic>),
}

impl Dynamic {
    #[inline]
    pub const fn is_null(&self) -> bool {
        matches!(self, Dynamic::Null)
    }

    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Dynamic::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the value as `f64`, converting a [`Number`] if needed.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Dynamic::Float(v) => Some(*v),
            Dynamic::Number(n) => n.as_f64().ok(),
            _ => None,
        }
    }

    pub const fn as_number(&self) -> Option<&Number> {
        match self {
            Dynamic::Number(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Dynamic::String(v) => Some(v),
            _ => None,
        }
    }

    pub const fn as_list(&self) -> Option<&Vec<Dynamic>> {
        match self {
            Dynamic::List(v) => Some(v),
            _ => None,
        }
    }

    pub const fn as_map(&self) -> Option<&BTreeMap<String, Dynamic>> {
        match self {
            Dynamic::Map(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the member under `key` if this is a map.
    pub fn get(&self, key: &str) -> Option<&Dynamic> {
        self.as_map()?.get(key)
    }

    /// Returns `true` for the zero value of the stored kind.
    ///
    /// Only `Null` is empty; a stored `false` or `0` is still a value.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.is_null()
    }
}

macro_rules! impl_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {$(
        impl From<$ty> for Dynamic {
            #[inline]
            fn from(value: $ty) -> Self {
                Dynamic::$variant(value.into())
            }
        }
    )*};
}

impl_from! {
    bool => Bool,
    f64 => Float,
    Number => Number,
    String => String,
    &str => String,
    Vec<Dynamic> => List,
    BTreeMap<String, Dynamic> => Map,
}

impl<T: Into<Dynamic>> From<Option<T>> for Dynamic {
    fn from(value: Option<T>) -> Self {
        value.map_or(Dynamic::Null, Into::into)
    }
}
