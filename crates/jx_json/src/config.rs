//! The codec configuration.

use alloc::sync::Arc;
use core::fmt;
use std::io;

use jx_reflect::Reflect;
use jx_reflect::info::{TypeInfo, Typed};

use crate::cache::TypeCache;
use crate::error::{Error, ResolutionError};
use crate::plan::{self, FieldPlan};
use crate::ser::TypeEncoder;
use crate::stream::{Decoder, Encoder};
use crate::{de, ser};

/// A wire-name transform applied to members without an explicit rename.
pub type KeyEncodeFn = Arc<dyn Fn(&str) -> String + Send + Sync>;

// -----------------------------------------------------------------------------
// Shared

/// State owned by a root configuration and shared by everything derived
/// from it. The key transform lives here because cached plans depend on it.
struct Shared {
    key_encode_fn: Option<KeyEncodeFn>,
    plans: TypeCache<FieldPlan>,
    encoders: TypeCache<TypeEncoder>,
}

#[derive(Debug, Clone, Copy)]
struct Flags {
    omit_empty: bool,
    use_number: bool,
    disallow_unknown_fields: bool,
    escape_markup: bool,
}

impl Default for Flags {
    fn default() -> Self {
        Self {
            omit_empty: false,
            use_number: false,
            disallow_unknown_fields: false,
            escape_markup: true,
        }
    }
}

// -----------------------------------------------------------------------------
// Json

/// An immutable codec configuration.
///
/// Cloning is cheap. The builder methods ([`omit_empty`], [`use_number`],
/// [`disallow_unknown_fields`], [`escape_markup`]) return a new value with
/// one flag changed that shares the field-plan and encoder caches with
/// `self`. The key transform can only be chosen when building a root
/// configuration with [`Json::builder`].
///
/// A `Json` can be used from many threads at once; the only shared mutable
/// state is its caches.
///
/// # Examples
///
/// ```
/// use jx_json::Json;
/// use jx_reflect::Reflect;
///
/// #[derive(Reflect, Default)]
/// struct Item { id: u32, note: String }
///
/// let json = Json::new();
/// let lenient = json.marshal_to_string(&Item { id: 1, note: String::new() }).unwrap();
/// assert_eq!(lenient, r#"{"id":1,"note":""}"#);
///
/// let compact = json.omit_empty();
/// let bytes = compact.marshal(&Item { id: 1, note: String::new() }).unwrap();
/// assert_eq!(bytes, br#"{"id":1}"#);
/// ```
///
/// [`omit_empty`]: Json::omit_empty
/// [`use_number`]: Json::use_number
/// [`disallow_unknown_fields`]: Json::disallow_unknown_fields
/// [`escape_markup`]: Json::escape_markup
#[derive(Clone)]
pub struct Json {
    shared: Arc<Shared>,
    flags: Flags,
}

impl Json {
    /// Creates a root configuration with default flags and no key
    /// transform.
    pub fn new() -> Self {
        JsonBuilder::new().build()
    }

    /// Starts building a root configuration.
    #[inline]
    pub fn builder() -> JsonBuilder {
        JsonBuilder::new()
    }

    #[inline]
    fn derive(&self, flags: Flags) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
            flags,
        }
    }

    /// Returns a configuration that omits empty values of members without
    /// their own omit-empty override.
    pub fn omit_empty(&self) -> Self {
        self.derive(Flags {
            omit_empty: true,
            ..self.flags
        })
    }

    /// Returns a configuration that decodes numbers into dynamically typed
    /// slots as exact [`Number`](jx_reflect::ops::Number) text instead of
    /// `f64`.
    pub fn use_number(&self) -> Self {
        self.derive(Flags {
            use_number: true,
            ..self.flags
        })
    }

    /// Returns a configuration that fails on object keys matching no
    /// member.
    pub fn disallow_unknown_fields(&self) -> Self {
        self.derive(Flags {
            disallow_unknown_fields: true,
            ..self.flags
        })
    }

    /// Returns a configuration that escapes `<`, `>` and `&` in strings, or
    /// writes them raw.
    pub fn escape_markup(&self, escape: bool) -> Self {
        self.derive(Flags {
            escape_markup: escape,
            ..self.flags
        })
    }

    #[inline]
    pub fn omits_empty(&self) -> bool {
        self.flags.omit_empty
    }

    #[inline]
    pub fn uses_number(&self) -> bool {
        self.flags.use_number
    }

    #[inline]
    pub fn disallows_unknown_fields(&self) -> bool {
        self.flags.disallow_unknown_fields
    }

    #[inline]
    pub fn escapes_markup(&self) -> bool {
        self.flags.escape_markup
    }

    #[inline]
    pub fn has_key_encode_fn(&self) -> bool {
        self.shared.key_encode_fn.is_some()
    }

    /// Returns `true` if both configurations derive from the same root and
    /// therefore share their caches.
    #[inline]
    pub fn shares_caches_with(&self, other: &Json) -> bool {
        Arc::ptr_eq(&self.shared, &other.shared)
    }

    /// Returns the cached field plan of `T`, resolving it on first use.
    pub fn field_plan<T: Typed>(&self) -> Result<Arc<FieldPlan>, Error> {
        Ok(self.plan_of_info(T::type_info())?)
    }

    /// Returns the cached field plan of the value's type.
    pub fn field_plan_of(&self, value: &dyn Reflect) -> Result<Arc<FieldPlan>, Error> {
        Ok(self.plan_of_info(value.reflect_type_info())?)
    }

    pub(crate) fn plan_of_info(
        &self,
        info: &'static TypeInfo,
    ) -> Result<Arc<FieldPlan>, ResolutionError> {
        let record = info
            .as_struct()
            .map_err(|err| ResolutionError::new(info.type_path(), err.to_string()))?;

        self.shared.plans.try_get_or_compute(info.ty_id(), || {
            log::trace!("resolving field plan of `{}`", info.type_path());
            Ok(plan::resolve(record, self.shared.key_encode_fn.as_deref()))
        })
    }

    pub(crate) fn encoder_of(
        &self,
        info: &'static TypeInfo,
    ) -> Result<Arc<TypeEncoder>, ResolutionError> {
        self.shared.encoders.try_get_or_compute(info.ty_id(), || {
            log::trace!("compiling encoder of `{}`", info.type_path());
            TypeEncoder::compile(self, info)
        })
    }

    // -------------------------------------------------------------------------
    // One-shot

    /// Encodes `value` as compact JSON.
    pub fn marshal(&self, value: &dyn Reflect) -> Result<Vec<u8>, Error> {
        let mut out = Vec::with_capacity(128);
        ser::write_value(self, &mut out, value, None, self.flags.escape_markup)?;
        Ok(out)
    }

    /// Encodes `value` as a compact JSON string.
    pub fn marshal_to_string(&self, value: &dyn Reflect) -> Result<String, Error> {
        let bytes = self.marshal(value)?;
        // The serializer only writes UTF-8.
        String::from_utf8(bytes).map_err(|err| Error::UnsupportedValue(err.to_string()))
    }

    /// Encodes `value` as JSON with one member or element per line, nested
    /// by `indent`.
    ///
    /// ```
    /// use jx_json::Json;
    /// use std::collections::BTreeMap;
    ///
    /// let map = BTreeMap::from([("a".to_owned(), vec![1u8])]);
    /// let out = Json::new().marshal_indent(&map, "  ").unwrap();
    /// assert_eq!(out, b"{\n  \"a\": [\n    1\n  ]\n}");
    /// ```
    pub fn marshal_indent(&self, value: &dyn Reflect, indent: &str) -> Result<Vec<u8>, Error> {
        let mut out = Vec::with_capacity(128);
        ser::write_value(
            self,
            &mut out,
            value,
            Some(indent),
            self.flags.escape_markup,
        )?;
        Ok(out)
    }

    /// Decodes one JSON document into `target`.
    ///
    /// Records are merged: members absent from the input keep their values.
    pub fn unmarshal(&self, data: &[u8], target: &mut dyn Reflect) -> Result<(), Error> {
        de::decode_slice(self, data, target)
    }

    /// Decodes one JSON document into a fresh `T`.
    pub fn from_slice<T: Reflect + Default>(&self, data: &[u8]) -> Result<T, Error> {
        let mut value = T::default();
        self.unmarshal(data, &mut value)?;
        Ok(value)
    }

    // -------------------------------------------------------------------------
    // Streaming

    /// Creates a stream encoder writing to `writer`.
    pub fn new_encoder<W: io::Write>(&self, writer: W) -> Encoder<W> {
        Encoder::new(self.clone(), writer)
    }

    /// Creates a stream decoder reading from `reader`.
    pub fn new_decoder<R: io::Read>(&self, reader: R) -> Decoder<R> {
        Decoder::new(self.clone(), reader)
    }
}

impl Default for Json {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Json {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Json")
            .field("omit_empty", &self.flags.omit_empty)
            .field("use_number", &self.flags.use_number)
            .field("disallow_unknown_fields", &self.flags.disallow_unknown_fields)
            .field("escape_markup", &self.flags.escape_markup)
            .field("key_encode_fn", &self.has_key_encode_fn())
            .field("cached_plans", &self.shared.plans.len())
            .finish()
    }
}

// -----------------------------------------------------------------------------
// JsonBuilder

/// Builder of a root [`Json`] with fresh caches.
///
/// ```
/// use jx_json::Json;
/// use jx_reflect::Reflect;
///
/// #[derive(Reflect, Default)]
/// struct Pair { left: u8, right: u8 }
///
/// let json = Json::builder()
///     .key_encode_fn(|name: &str| name.to_uppercase())
///     .build();
/// let out = json.marshal_to_string(&Pair { left: 1, right: 2 }).unwrap();
/// assert_eq!(out, r#"{"LEFT":1,"RIGHT":2}"#);
/// ```
#[derive(Default)]
pub struct JsonBuilder {
    key_encode_fn: Option<KeyEncodeFn>,
    flags: Flags,
}

impl JsonBuilder {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the transform computing the wire name of every member without
    /// an explicit rename. Map keys are not affected.
    pub fn key_encode_fn(mut self, f: impl Fn(&str) -> String + Send + Sync + 'static) -> Self {
        self.key_encode_fn = Some(Arc::new(f));
        self
    }

    pub fn omit_empty(mut self, omit_empty: bool) -> Self {
        self.flags.omit_empty = omit_empty;
        self
    }

    pub fn use_number(mut self, use_number: bool) -> Self {
        self.flags.use_number = use_number;
        self
    }

    pub fn disallow_unknown_fields(mut self, disallow: bool) -> Self {
        self.flags.disallow_unknown_fields = disallow;
        self
    }

    pub fn escape_markup(mut self, escape: bool) -> Self {
        self.flags.escape_markup = escape;
        self
    }

    pub fn build(self) -> Json {
        Json {
            shared: Arc::new(Shared {
                key_encode_fn: self.key_encode_fn,
                plans: TypeCache::new(),
                encoders: TypeCache::new(),
            }),
            flags: self.flags,
        }
    }
}
