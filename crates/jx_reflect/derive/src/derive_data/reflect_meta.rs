use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use syn::{GenericParam, Generics, Ident, ImplGenerics, Path, Token, Type, TypeGenerics, TypeParam};
use syn::punctuated::Punctuated;

use super::TypeAttributes;
use crate::utils::StringExpr;

/// Data shared by every derived implementation of one type.
pub(crate) struct ReflectMeta<'a> {
    jx_reflect_path: Path,
    attrs: TypeAttributes,
    ident: &'a Ident,
    generics: &'a Generics,
    active_types: Vec<Type>,
}

impl core::fmt::Debug for ReflectMeta<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ReflectMeta")
            .field("jx_reflect_path", &self.jx_reflect_path.to_token_stream())
            .field("ident", &self.ident)
            .field("attrs", &self.attrs)
            .finish()
    }
}

impl<'a> ReflectMeta<'a> {
    #[inline]
    pub fn new(attrs: TypeAttributes, ident: &'a Ident, generics: &'a Generics) -> Self {
        Self {
            attrs,
            ident,
            generics,
            jx_reflect_path: crate::path::jx_reflect(),
            active_types: Vec::new(),
        }
    }

    /// Used by [`ReflectStruct`](crate::derive_data::ReflectStruct): set the
    /// types of the reflected fields during initialization.
    pub(super) fn set_active_types(&mut self, types: impl IntoIterator<Item = Type>) {
        for ty in types {
            if !self.active_types.contains(&ty) {
                self.active_types.push(ty);
            }
        }
    }

    #[inline]
    pub fn jx_reflect_path(&self) -> &Path {
        &self.jx_reflect_path
    }

    #[inline]
    pub fn attrs(&self) -> &TypeAttributes {
        &self.attrs
    }

    /// This name is used in `impl ... for #real_ident {...}`.
    #[inline]
    pub fn real_ident(&self) -> TokenStream {
        self.ident.to_token_stream()
    }

    /// Whether an implementation of `Typed` or `TypePath` should be generic.
    pub fn impl_with_generic(&self) -> bool {
        !self
            .generics
            .params
            .iter()
            .all(|param| matches!(param, GenericParam::Lifetime(_)))
    }

    #[inline]
    pub fn module_path(&self) -> StringExpr {
        StringExpr::Const(quote! {
            ::core::module_path!()
        })
    }

    #[inline]
    pub fn type_ident(&self) -> StringExpr {
        StringExpr::spanned(self.ident)
    }

    /// Combines type generics and const generics into one [`StringExpr`].
    ///
    /// The `ty_generic_fn` param maps [`TypeParam`]s to [`StringExpr`]s.
    fn reduce_generics(
        &self,
        mut ty_generic_fn: impl FnMut(&TypeParam) -> StringExpr,
    ) -> StringExpr {
        let macro_utils_ = crate::path::macro_utils_(&self.jx_reflect_path);

        let mut params = self.generics.params.iter().filter_map(|param| match param {
            GenericParam::Type(type_param) => Some(ty_generic_fn(type_param)),
            GenericParam::Const(const_param) => {
                let ident = &const_param.ident;
                let ty = &const_param.ty;

                Some(StringExpr::Owned(quote! {
                    <#ty as #macro_utils_::ToString>::to_string(&#ident)
                }))
            }
            GenericParam::Lifetime(_) => None,
        });

        let first = params.next().into_iter();

        StringExpr::concat(
            first.chain(params.flat_map(|x| [StringExpr::literal(", "), x])),
            &self.jx_reflect_path,
        )
    }

    /// Returns the "type name" of the type, e.g. `Page<u8>`.
    pub fn type_name(&self) -> StringExpr {
        let type_ident = self.type_ident();
        if !self.impl_with_generic() {
            return type_ident;
        }

        let type_path_ = crate::path::type_path_(&self.jx_reflect_path);
        let generics = self.reduce_generics(|TypeParam { ident, .. }| {
            StringExpr::Borrowed(quote! {
                <#ident as #type_path_>::type_name()
            })
        });

        StringExpr::concat(
            [
                type_ident,
                StringExpr::literal("<"),
                generics,
                StringExpr::literal(">"),
            ],
            &self.jx_reflect_path,
        )
    }

    /// Returns the "type path" of the type, e.g. `my_crate::api::Page<u8>`.
    pub fn type_path(&self) -> StringExpr {
        let prefix = [
            self.module_path(),
            StringExpr::literal("::"),
            self.type_ident(),
        ];
        if !self.impl_with_generic() {
            return StringExpr::concat(prefix, &self.jx_reflect_path);
        }

        let type_path_ = crate::path::type_path_(&self.jx_reflect_path);
        let generics = self.reduce_generics(|TypeParam { ident, .. }| {
            StringExpr::Borrowed(quote! {
                <#ident as #type_path_>::type_path()
            })
        });

        StringExpr::concat(
            prefix.into_iter().chain([
                StringExpr::literal("<"),
                generics,
                StringExpr::literal(">"),
            ]),
            &self.jx_reflect_path,
        )
    }

    /// Return the required generic parameters.
    ///
    /// The three parameters returned are `impl_generics`, `ty_generics`, `where_clause`.
    ///
    /// ## Type Itself
    ///
    /// With lifetime params the type must be `'static`. With type params it
    /// must be `Any + Send + Sync`.
    ///
    /// ## Type Params
    ///
    /// Every type param must implement `TypePath`.
    ///
    /// ## Field Types
    ///
    /// When `add_reflect_typed` is set, every reflected field type that
    /// mentions a type param must implement `Reflect + Typed`.
    pub fn split_generics(
        &self,
        add_reflect_typed: bool,
    ) -> (ImplGenerics<'_>, TypeGenerics<'_>, TokenStream) {
        use crate::path::fp::{AnyFP, SendFP, SyncFP};

        let generics = self.generics;

        let mut generic_where_clause = quote! { where };

        if generics.type_params().next().is_some() {
            generic_where_clause.extend(quote! { Self: #AnyFP + #SendFP + #SyncFP, });
        } else if generics.lifetimes().next().is_some() {
            generic_where_clause.extend(quote! { Self: 'static, });
        }

        let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

        // Maintain existing where clause bounds, if any.
        if let Some(where_clause) = where_clause {
            let predicates = where_clause.predicates.iter();
            generic_where_clause.extend(quote! { #(#predicates,)* });
        }

        let mut predicates: Punctuated<TokenStream, Token![,]> = Punctuated::new();

        predicates.extend(self.type_path_predicates());

        if add_reflect_typed {
            predicates.extend(self.field_type_predicates());
        }

        generic_where_clause.extend(quote! { #predicates });

        (impl_generics, ty_generics, generic_where_clause)
    }

    fn type_path_predicates(&self) -> impl Iterator<Item = TokenStream> + '_ {
        let type_path_ = crate::path::type_path_(&self.jx_reflect_path);
        self.generics.type_params().map(move |param| {
            let ident = &param.ident;
            quote!(#ident : #type_path_)
        })
    }

    fn field_type_predicates(&self) -> impl Iterator<Item = TokenStream> + '_ {
        let type_param_idents = self
            .generics
            .type_params()
            .map(|type_param| type_param.ident.clone())
            .collect::<Vec<Ident>>();

        let reflect_ = crate::path::reflect_(&self.jx_reflect_path);
        let typed_ = crate::path::typed_(&self.jx_reflect_path);

        // Do any of the identifiers in `idents` appear in `token_stream`?
        fn is_any_ident_in_token_stream(idents: &[Ident], token_stream: TokenStream) -> bool {
            for token_tree in token_stream {
                match token_tree {
                    proc_macro2::TokenTree::Ident(ident) => {
                        if idents.contains(&ident) {
                            return true;
                        }
                    }
                    proc_macro2::TokenTree::Group(group) => {
                        if is_any_ident_in_token_stream(idents, group.stream()) {
                            return true;
                        }
                    }
                    _ => {}
                }
            }
            false
        }

        self.active_types.iter().filter_map(move |ty| {
            if !type_param_idents.is_empty()
                && is_any_ident_in_token_stream(&type_param_idents, ty.to_token_stream())
            {
                Some(quote! {
                    #ty: #reflect_ + #typed_
                })
            } else {
                None
            }
        })
    }

    /// `TypeInfo` tokens for an opaque type.
    pub fn to_info_tokens(&self) -> TokenStream {
        let opaque_info_ = crate::path::opaque_info_(&self.jx_reflect_path);
        let type_info_ = crate::path::type_info_(&self.jx_reflect_path);

        quote! {
            #type_info_::Opaque(
                #opaque_info_::new::<Self>()
            )
        }
    }
}
