use crate::info::{Type, TypeInfo, Typed};

/// A named member of a record type.
///
/// Besides the static name and type, a field carries the codec options
/// declared on it: an explicit wire name, an explicit omit-empty choice,
/// and whether its members are promoted into the enclosing record.
#[derive(Clone, Debug)]
pub struct NamedField {
    name: &'static str,
    ty: Type,
    type_info: fn() -> &'static TypeInfo,
    rename: Option<&'static str>,
    omit_empty: Option<bool>,
    embedded: bool,
}

impl NamedField {
    /// Creates a plain field with the given name and type.
    #[inline]
    pub const fn new<T: Typed>(name: &'static str) -> Self {
        Self {
            name,
            ty: Type::of::<T>(),
            type_info: T::type_info,
            rename: None,
            omit_empty: None,
            embedded: false,
        }
    }

    /// Sets the explicit wire name.
    #[inline]
    pub const fn with_rename(mut self, rename: &'static str) -> Self {
        self.rename = Some(rename);
        self
    }

    /// Sets the explicit omit-empty choice of this field.
    ///
    /// Without it, the codec-wide default applies.
    #[inline]
    pub const fn with_omit_empty(mut self, omit_empty: bool) -> Self {
        self.omit_empty = Some(omit_empty);
        self
    }

    /// Marks this field as embedded.
    #[inline]
    pub const fn with_embedded(mut self) -> Self {
        self.embedded = true;
        self
    }

    /// The source name of the field.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub const fn ty(&self) -> &Type {
        &self.ty
    }

    /// The compile-time info of the field's type.
    #[inline]
    pub fn type_info(&self) -> &'static TypeInfo {
        (self.type_info)()
    }

    /// The explicit wire name, if any.
    #[inline]
    pub const fn rename(&self) -> Option<&'static str> {
        self.rename
    }

    /// The explicit omit-empty choice, if any.
    #[inline]
    pub const fn omit_empty(&self) -> Option<bool> {
        self.omit_empty
    }

    #[inline]
    pub const fn is_embedded(&self) -> bool {
        self.embedded
    }
}
