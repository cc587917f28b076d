//! Fully qualified paths of standard items, usable directly in `quote!`.

use proc_macro2::TokenStream;
use quote::{ToTokens, quote};

macro_rules! define_fp {
    ($($name:ident => $($segment:ident)::+;)*) => {$(
        pub(crate) struct $name;

        impl ToTokens for $name {
            #[inline]
            fn to_tokens(&self, tokens: &mut TokenStream) {
                tokens.extend(quote!($(::$segment)+));
            }
        }
    )*};
}

define_fp! {
    OptionFP => core::option::Option;
    ResultFP => core::result::Result;
    AnyFP => core::any::Any;
    SendFP => core::marker::Send;
    SyncFP => core::marker::Sync;
}
