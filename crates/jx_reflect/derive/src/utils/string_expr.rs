use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use syn::LitStr;
use syn::spanned::Spanned;

/// Tokens that evaluate to a string, tagged by how they can be joined.
#[derive(Clone)]
pub(crate) enum StringExpr {
    /// A literal, or a macro call accepted by `concat!` such as `module_path!()`.
    Const(TokenStream),
    /// A `&'static str` only known once the program runs.
    Borrowed(TokenStream),
    /// A `String`.
    Owned(TokenStream),
}

impl StringExpr {
    /// A string literal.
    pub fn literal(text: &str) -> Self {
        Self::Const(text.to_token_stream())
    }

    /// The text of `item` as a literal carrying its span.
    pub fn spanned(item: &(impl ToString + Spanned)) -> Self {
        Self::Const(LitStr::new(&item.to_string(), item.span()).into_token_stream())
    }

    /// Tokens of type `&str`.
    pub fn into_borrowed(self) -> TokenStream {
        match self {
            Self::Const(tokens) | Self::Borrowed(tokens) => tokens,
            Self::Owned(owned) => quote!(::core::ops::Deref::deref(&#owned)),
        }
    }

    /// Tokens of type `String`.
    pub fn into_owned(self, jx_reflect_path: &syn::Path) -> TokenStream {
        if let Self::Owned(owned) = self {
            return owned;
        }
        let macro_utils_ = crate::path::macro_utils_(jx_reflect_path);
        let borrowed = self.into_borrowed();
        quote!(#macro_utils_::ToOwned::to_owned(#borrowed))
    }

    /// Joins `parts` in order.
    ///
    /// Compile-time parts are merged with `concat!`. Anything else is joined
    /// when the type path is first requested.
    pub fn concat(
        parts: impl IntoIterator<Item = StringExpr>,
        jx_reflect_path: &syn::Path,
    ) -> Self {
        let parts: Vec<StringExpr> = parts.into_iter().collect();
        let all_const = parts.iter().all(|part| matches!(part, Self::Const(_)));
        let pieces = parts.into_iter().map(Self::into_borrowed);

        if all_const {
            Self::Const(quote!(::core::concat!(#(#pieces),*)))
        } else {
            let macro_utils_ = crate::path::macro_utils_(jx_reflect_path);
            Self::Owned(quote!(#macro_utils_::__concat(&[#(#pieces),*])))
        }
    }
}
