//! Provide some tools for parsing `#[reflect(...)]` attributes.

// -----------------------------------------------------------------------------
// Modules

mod field_attributes;
mod type_attributes;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use field_attributes::FieldAttributes;
pub(crate) use type_attributes::TypeAttributes;

/// Returns `true` if the attribute is `#[reflect(...)]`.
#[inline]
fn is_reflect_attr(attr: &syn::Attribute) -> bool {
    attr.path().is_ident(crate::REFLECT_ATTRIBUTE_NAME)
}
