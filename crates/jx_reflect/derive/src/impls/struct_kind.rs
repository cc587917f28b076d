use proc_macro2::TokenStream;
use quote::{ToTokens, quote};

use super::{get_hook_impls, impl_trait_reflect, impl_trait_type_path, impl_trait_typed};

use crate::derive_data::{FieldAccessors, ReflectMeta, ReflectStruct};
use crate::path::fp::OptionFP;

/// Implement full reflect for struct type.
pub(crate) fn impl_struct(info: &ReflectStruct) -> TokenStream {
    let meta = info.meta();

    // trait: TypePath
    let type_path_trait_tokens = impl_trait_type_path(meta);

    // trait: Typed
    let typed_trait_tokens = impl_trait_typed(meta, info.to_info_tokens());

    // trait: Struct
    let struct_trait_tokens = impl_trait_struct(info);

    // trait: Reflect
    let reflect_trait_tokens = {
        let mut extra_tokens = get_struct_debug_impl(meta);
        extra_tokens.extend(get_hook_impls(meta));

        impl_trait_reflect(meta, quote!(Struct), extra_tokens)
    };

    quote! {
        #type_path_trait_tokens

        #typed_trait_tokens

        #struct_trait_tokens

        #reflect_trait_tokens
    }
}

/// Generate `Struct` trait implementation tokens.
fn impl_trait_struct(info: &ReflectStruct) -> TokenStream {
    let meta = info.meta();

    let jx_reflect_path = meta.jx_reflect_path();
    let struct_ = crate::path::struct_(jx_reflect_path);
    let reflect_ = crate::path::reflect_(jx_reflect_path);

    let FieldAccessors {
        fields_ref,
        fields_mut,
        field_indices,
        field_count,
    } = FieldAccessors::new(info);

    let real_ident = meta.real_ident();
    let (impl_generics, ty_generics, where_clause) = meta.split_generics(true);
    let option_ = OptionFP.to_token_stream();

    quote! {
        impl #impl_generics #struct_ for #real_ident #ty_generics #where_clause {
            fn field_at(&self, index: usize) -> #OptionFP<&dyn #reflect_> {
                match index {
                    #(#field_indices => #option_::Some(#fields_ref),)*
                    _ => #OptionFP::None,
                }
            }

            fn field_at_mut(&mut self, index: usize) -> #OptionFP<&mut dyn #reflect_> {
                match index {
                    #(#field_indices => #option_::Some(#fields_mut),)*
                    _ => #OptionFP::None,
                }
            }

            #[inline]
            fn field_len(&self) -> usize {
                #field_count
            }
        }
    }
}

/// Generate `Reflect::reflect_debug` implementation tokens.
fn get_struct_debug_impl(meta: &ReflectMeta) -> TokenStream {
    let struct_debug_ = crate::path::struct_debug_(meta.jx_reflect_path());
    quote! {
        #[inline]
        fn reflect_debug(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
            #struct_debug_(self, f)
        }
    }
}
