use proc_macro2::TokenStream;
use quote::{quote, quote_spanned};

use crate::derive_data::ReflectMeta;
use crate::path::fp::{OptionFP, ResultFP};

/// Generate implementation code for `Reflect` trait.
///
/// `extra_tokens` holds overridden provided methods, such as `reflect_debug`
/// and the codec capabilities from [`get_hook_impls`].
pub(crate) fn impl_trait_reflect(
    meta: &ReflectMeta,
    reflect_kind_token: TokenStream,
    extra_tokens: TokenStream,
) -> TokenStream {
    let jx_reflect_path = meta.jx_reflect_path();

    let reflect_ = crate::path::reflect_(jx_reflect_path);
    let reflect_kind_ = crate::path::reflect_kind_(jx_reflect_path);
    let reflect_ref_ = crate::path::reflect_ref_(jx_reflect_path);
    let reflect_mut_ = crate::path::reflect_mut_(jx_reflect_path);

    let real_ident = meta.real_ident();
    let (impl_generics, ty_generics, where_clause) = meta.split_generics(true);

    quote! {
        impl #impl_generics #reflect_ for #real_ident #ty_generics #where_clause {
            #[inline]
            fn reflect_kind(&self) -> #reflect_kind_ {
                #reflect_kind_::#reflect_kind_token
            }

            #[inline]
            fn reflect_ref(&self) -> #reflect_ref_<'_> {
                #reflect_ref_::#reflect_kind_token(self)
            }

            #[inline]
            fn reflect_mut(&mut self) -> #reflect_mut_<'_> {
                #reflect_mut_::#reflect_kind_token(self)
            }

            #extra_tokens
        }
    }
}

/// Generate the codec capability methods declared by type attributes.
///
/// Each method is spanned at its attribute, so a missing trait
/// implementation is reported there.
pub(crate) fn get_hook_impls(meta: &ReflectMeta) -> TokenStream {
    let jx_reflect_path = meta.jx_reflect_path();
    let attrs = meta.attrs();

    let mut tokens = crate::utils::empty();

    if let Some(span) = attrs.marshal {
        let marshaler_ = crate::path::marshaler_(jx_reflect_path);
        tokens.extend(quote_spanned! { span =>
            #[inline]
            fn as_marshaler(&self) -> #OptionFP<&dyn #marshaler_> {
                #OptionFP::Some(self)
            }
        });
    }

    if let Some(span) = attrs.unmarshal {
        let unmarshaler_ = crate::path::unmarshaler_(jx_reflect_path);
        tokens.extend(quote_spanned! { span =>
            #[inline]
            fn as_unmarshaler(&mut self) -> #OptionFP<&mut dyn #unmarshaler_> {
                #OptionFP::Some(self)
            }
        });
    }

    if let Some(span) = attrs.serialize {
        let erased_serde_ = crate::path::erased_serde_(jx_reflect_path);
        tokens.extend(quote_spanned! { span =>
            #[inline]
            fn as_serialize(&self) -> #OptionFP<&dyn #erased_serde_::Serialize> {
                #OptionFP::Some(self)
            }
        });
    }

    if let Some(span) = attrs.deserialize {
        let erased_serde_ = crate::path::erased_serde_(jx_reflect_path);
        tokens.extend(quote_spanned! { span =>
            fn deserialize_in_place(
                &mut self,
                deserializer: &mut dyn #erased_serde_::Deserializer<'_>,
            ) -> #OptionFP<#ResultFP<(), #erased_serde_::Error>> {
                #OptionFP::Some(
                    #erased_serde_::deserialize::<Self>(deserializer).map(|value| *self = value)
                )
            }
        });
    }

    tokens
}
