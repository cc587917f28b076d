use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::ext::IdentExt;
use syn::{Field, Index, Member};

use super::{FieldAttributes, ReflectMeta};

/// A record type: its meta and its named fields in declaration order.
pub(crate) struct ReflectStruct<'a> {
    meta: ReflectMeta<'a>,
    fields: Vec<StructField<'a>>,
}

/// One declared field of a [`ReflectStruct`].
pub(crate) struct StructField<'a> {
    /// The raw field.
    pub data: &'a Field,
    /// The parsed `#[reflect(...)]` attributes.
    pub attrs: FieldAttributes,
    /// The position of the field in the declaration.
    pub declaration_index: usize,
    /// The position of the field among reflected fields.
    ///
    /// `None` for skipped fields.
    pub reflection_index: Option<usize>,
}

impl<'a> StructField<'a> {
    /// The member used to access this field, e.g. `self.name`.
    pub fn member(&self) -> Member {
        match &self.data.ident {
            Some(ident) => Member::Named(ident.clone()),
            None => Member::Unnamed(Index {
                index: self.declaration_index as u32,
                span: Span::call_site(),
            }),
        }
    }

    /// The declared name of this field.
    pub fn name(&self) -> String {
        self.data
            .ident
            .as_ref()
            .map(|ident| ident.unraw().to_string())
            .unwrap_or_else(|| self.declaration_index.to_string())
    }

    /// `NamedField` construction tokens for this field.
    pub fn to_info_tokens(&self, jx_reflect_path: &syn::Path) -> TokenStream {
        let named_field_ = crate::path::named_field_(jx_reflect_path);
        let ty = &self.data.ty;
        let name = self.name();

        let with_rename = self.attrs.rename.as_ref().map(|lit| {
            quote! { .with_rename(#lit) }
        });
        let with_omit_empty = self.attrs.omit_empty.map(|value| {
            quote! { .with_omit_empty(#value) }
        });
        let with_embedded = self.attrs.embed.then(|| quote! { .with_embedded() });

        quote! {
            #named_field_::new::<#ty>(#name)
                #with_rename
                #with_omit_empty
                #with_embedded
        }
    }
}

impl<'a> ReflectStruct<'a> {
    pub fn new(mut meta: ReflectMeta<'a>, fields: Vec<StructField<'a>>) -> Self {
        meta.set_active_types(
            fields
                .iter()
                .filter(|field| field.reflection_index.is_some())
                .map(|field| field.data.ty.clone()),
        );
        Self { meta, fields }
    }

    #[inline]
    pub fn meta(&self) -> &ReflectMeta<'a> {
        &self.meta
    }

    /// Fields that are visible to reflection, in declaration order.
    pub fn active_fields(&self) -> impl Iterator<Item = &StructField<'a>> {
        self.fields
            .iter()
            .filter(|field| field.reflection_index.is_some())
    }

    /// `TypeInfo` tokens for this record.
    pub fn to_info_tokens(&self) -> TokenStream {
        let jx_reflect_path = self.meta.jx_reflect_path();
        let type_info_ = crate::path::type_info_(jx_reflect_path);
        let struct_info_ = crate::path::struct_info_(jx_reflect_path);

        let fields = self
            .active_fields()
            .map(|field| field.to_info_tokens(jx_reflect_path));

        quote! {
            #type_info_::Struct(#struct_info_::new::<Self>(&[
                #(#fields),*
            ]))
        }
    }
}

/// Accessor tokens of the reflected fields, used by `Struct` implementations.
pub(crate) struct FieldAccessors {
    /// `&self.field`
    pub fields_ref: Vec<TokenStream>,
    /// `&mut self.field`
    pub fields_mut: Vec<TokenStream>,
    /// Reflection indices, matching the accessors.
    pub field_indices: Vec<usize>,
    /// Number of reflected fields.
    pub field_count: usize,
}

impl FieldAccessors {
    pub fn new(info: &ReflectStruct) -> Self {
        let mut this = Self {
            fields_ref: Vec::new(),
            fields_mut: Vec::new(),
            field_indices: Vec::new(),
            field_count: 0,
        };

        for field in info.active_fields() {
            let member = field.member();
            this.fields_ref.push(quote!(&self.#member));
            this.fields_mut.push(quote!(&mut self.#member));
            this.field_indices
                .push(field.reflection_index.unwrap_or_default());
            this.field_count += 1;
        }

        this
    }
}
