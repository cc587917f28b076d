use proc_macro2::Span;
use syn::{Attribute, meta::ParseNestedMeta};

use super::is_reflect_attr;

/// Type-level `#[reflect(...)]` attributes.
///
/// Each flag records the span it was declared at, so generated code points
/// back to the attribute on failure.
#[derive(Default, Debug)]
pub(crate) struct TypeAttributes {
    /// `opaque`: do not inspect the fields.
    pub opaque: Option<Span>,
    /// `marshal`: the type implements `Marshaler`.
    pub marshal: Option<Span>,
    /// `unmarshal`: the type implements `Unmarshaler`.
    pub unmarshal: Option<Span>,
    /// `serialize` or `serde`: the type implements `serde::Serialize`.
    pub serialize: Option<Span>,
    /// `deserialize` or `serde`: the type implements `serde::Deserialize`.
    pub deserialize: Option<Span>,
}

impl TypeAttributes {
    /// Parse all `#[reflect(...)]` attributes of a type.
    pub(crate) fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();

        for attr in attrs.iter().filter(|attr| is_reflect_attr(attr)) {
            attr.parse_nested_meta(|meta| this.parse_meta(meta))?;
        }

        if this.opaque.is_none()
            && let Some(span) = this.serialize.or(this.deserialize)
        {
            return Err(syn::Error::new(
                span,
                "`serialize`, `deserialize` and `serde` require `#[reflect(opaque)]`",
            ));
        }

        Ok(this)
    }

    fn parse_meta(&mut self, meta: ParseNestedMeta) -> syn::Result<()> {
        let span = meta.path.get_ident().map(syn::Ident::span);
        let Some(span) = span else {
            return Err(meta.error("unsupported reflect attribute"));
        };

        let set = |slot: &mut Option<Span>| -> syn::Result<()> {
            if slot.replace(span).is_some() {
                return Err(syn::Error::new(span, "duplicate reflect attribute"));
            }
            Ok(())
        };

        if meta.path.is_ident("opaque") {
            set(&mut self.opaque)
        } else if meta.path.is_ident("marshal") {
            set(&mut self.marshal)
        } else if meta.path.is_ident("unmarshal") {
            set(&mut self.unmarshal)
        } else if meta.path.is_ident("serialize") {
            set(&mut self.serialize)
        } else if meta.path.is_ident("deserialize") {
            set(&mut self.deserialize)
        } else if meta.path.is_ident("serde") {
            set(&mut self.serialize)?;
            set(&mut self.deserialize)
        } else if meta.path.is_ident("rename")
            || meta.path.is_ident("omit_empty")
            || meta.path.is_ident("embed")
            || meta.path.is_ident("skip")
        {
            Err(meta.error("this attribute can only be applied to fields"))
        } else {
            Err(meta.error(
                "unsupported reflect attribute, expected one of: \
                 opaque, marshal, unmarshal, serialize, deserialize, serde",
            ))
        }
    }
}
