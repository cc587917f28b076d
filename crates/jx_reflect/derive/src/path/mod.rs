//! This independent module is used to provide the required paths,
//! so as to minimize changes when the `jx_reflect` structure is modified.
//!
//! The only special item is the path of `jx_reflect` itself,
//! see [`jx_reflect`].

use proc_macro2::TokenStream;
use quote::quote;

pub(crate) mod fp;

// -----------------------------------------------------------------------------
// Crate Path

/// Get the correct access path to the `jx_reflect` crate.
///
/// 1. For crates that depend on `jx_reflect`, `::jx_reflect` is returned.
/// 2. For crates that depend on `jx_json`, `::jx_json::reflect` is returned.
/// 3. For crates that depend on `jx_core`, `::jx_core::reflect` is returned.
/// 4. Otherwise `::jx_reflect` is returned, which may be incorrect.
///
/// This reads the caller's `Cargo.toml`, so the path is computed once per
/// derive and passed around.
pub(crate) fn jx_reflect() -> syn::Path {
    jx_macro_utils::Manifest::shared(|manifest| manifest.get_crate_path("jx_reflect"))
}

// -----------------------------------------------------------------------------
// Items

macro_rules! define_paths {
    ($($name:ident => $($segment:ident)::+;)*) => {$(
        #[inline(always)]
        pub(crate) fn $name(jx_reflect_path: &syn::Path) -> TokenStream {
            quote! { #jx_reflect_path $(::$segment)+ }
        }
    )*};
}

define_paths! {
    reflect_ => Reflect;
    macro_utils_ => __macro_exports::macro_utils;
    erased_serde_ => __macro_exports::erased_serde;

    type_path_ => info::TypePath;
    typed_ => info::Typed;
    type_info_ => info::TypeInfo;
    struct_info_ => info::StructInfo;
    named_field_ => info::NamedField;
    opaque_info_ => info::OpaqueInfo;
    reflect_kind_ => info::ReflectKind;

    struct_ => ops::Struct;
    reflect_ref_ => ops::ReflectRef;
    reflect_mut_ => ops::ReflectMut;
    marshaler_ => ops::Marshaler;
    unmarshaler_ => ops::Unmarshaler;

    non_generic_type_info_cell_ => impls::NonGenericTypeInfoCell;
    generic_type_info_cell_ => impls::GenericTypeInfoCell;
    generic_type_path_cell_ => impls::GenericTypePathCell;
    struct_debug_ => impls::struct_debug;
}
