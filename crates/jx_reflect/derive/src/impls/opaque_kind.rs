use proc_macro2::TokenStream;
use quote::quote;

use super::{get_hook_impls, impl_trait_reflect, impl_trait_type_path, impl_trait_typed};

use crate::derive_data::ReflectMeta;

/// Implement full reflect for opaque type.
pub(crate) fn impl_opaque(meta: &ReflectMeta) -> TokenStream {
    // trait: TypePath
    let type_path_trait_tokens = impl_trait_type_path(meta);

    // trait: Typed
    let typed_trait_tokens = impl_trait_typed(meta, meta.to_info_tokens());

    // trait: Reflect
    let reflect_trait_tokens = impl_trait_reflect(meta, quote!(Opaque), get_hook_impls(meta));

    quote! {
        #type_path_trait_tokens

        #typed_trait_tokens

        #reflect_trait_tokens
    }
}
