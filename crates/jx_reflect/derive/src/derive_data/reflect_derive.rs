use syn::{Data, DeriveInput, Fields, spanned::Spanned};

use super::{FieldAttributes, ReflectMeta, ReflectStruct, StructField, TypeAttributes};

/// The parsed input of `#[derive(Reflect)]`.
pub(crate) enum ReflectDerive<'a> {
    /// `struct T { ... }` or `struct T;`
    Struct(ReflectStruct<'a>),
    /// Any type marked `#[reflect(opaque)]`.
    Opaque(ReflectMeta<'a>),
}

impl<'a> ReflectDerive<'a> {
    pub fn from_input(input: &'a DeriveInput) -> syn::Result<Self> {
        let type_attributes = TypeAttributes::parse_attrs(&input.attrs)?;
        let meta = ReflectMeta::new(type_attributes, &input.ident, &input.generics);

        if meta.attrs().opaque.is_some() {
            return Ok(Self::Opaque(meta));
        }

        let data = match &input.data {
            Data::Struct(data) => data,
            Data::Enum(data) => {
                return Err(syn::Error::new(
                    data.enum_token.span(),
                    "enums are not supported, use `#[reflect(opaque)]` with serde or codec hooks",
                ));
            }
            Data::Union(data) => {
                return Err(syn::Error::new(
                    data.union_token.span(),
                    "unions are not supported",
                ));
            }
        };

        let fields = match &data.fields {
            Fields::Named(fields) => Self::collect_struct_fields(fields.named.iter())?,
            Fields::Unit => Vec::new(),
            Fields::Unnamed(fields) => {
                return Err(syn::Error::new(
                    fields.span(),
                    "tuple structs are not supported, use `#[reflect(opaque)]` with serde or codec hooks",
                ));
            }
        };

        Ok(Self::Struct(ReflectStruct::new(meta, fields)))
    }

    fn collect_struct_fields(
        fields: impl Iterator<Item = &'a syn::Field>,
    ) -> syn::Result<Vec<StructField<'a>>> {
        let mut active_index = 0usize;

        fields
            .enumerate()
            .map(|(declaration_index, field)| {
                let attrs = FieldAttributes::parse_attrs(&field.attrs)?;

                let reflection_index = if attrs.skip {
                    None
                } else {
                    active_index += 1;
                    Some(active_index - 1)
                };

                Ok(StructField {
                    data: field,
                    attrs,
                    declaration_index,
                    reflection_index,
                })
            })
            .collect()
    }
}
