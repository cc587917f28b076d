use syn::{Attribute, LitBool, LitStr, meta::ParseNestedMeta};

use super::is_reflect_attr;

/// Field-level `#[reflect(...)]` attributes.
#[derive(Default, Debug)]
pub(crate) struct FieldAttributes {
    /// `rename = "..."`
    pub rename: Option<LitStr>,
    /// `omit_empty` or `omit_empty = bool`
    pub omit_empty: Option<bool>,
    /// `embed`
    pub embed: bool,
    /// `skip`
    pub skip: bool,
}

impl FieldAttributes {
    /// Parse all `#[reflect(...)]` attributes of a field.
    pub(crate) fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();

        for attr in attrs.iter().filter(|attr| is_reflect_attr(attr)) {
            attr.parse_nested_meta(|meta| this.parse_meta(meta))?;
        }

        Ok(this)
    }

    fn parse_meta(&mut self, meta: ParseNestedMeta) -> syn::Result<()> {
        if meta.path.is_ident("rename") {
            let lit: LitStr = meta.value()?.parse()?;
            if lit.value().is_empty() {
                return Err(syn::Error::new(lit.span(), "`rename` cannot be empty"));
            }
            if self.rename.replace(lit).is_some() {
                return Err(meta.error("duplicate `rename` attribute"));
            }
            Ok(())
        } else if meta.path.is_ident("omit_empty") {
            let value = if meta.input.peek(syn::Token![=]) {
                let lit: LitBool = meta.value()?.parse()?;
                lit.value
            } else {
                true
            };
            if self.omit_empty.replace(value).is_some() {
                return Err(meta.error("duplicate `omit_empty` attribute"));
            }
            Ok(())
        } else if meta.path.is_ident("embed") {
            self.embed = true;
            Ok(())
        } else if meta.path.is_ident("skip") {
            self.skip = true;
            Ok(())
        } else {
            Err(meta.error(
                "unsupported reflect field attribute, expected one of: \
                 rename, omit_empty, embed, skip",
            ))
        }
    }
}
