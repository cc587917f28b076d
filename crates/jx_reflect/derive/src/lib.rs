//! See [`Reflect`](derive_full_reflect).
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

static REFLECT_ATTRIBUTE_NAME: &str = "reflect";

// -----------------------------------------------------------------------------
// Modules

mod derive_data;
mod impls;
mod path;
mod utils;

// -----------------------------------------------------------------------------
// Macros

/// # Reflection Derivation
///
/// `#[derive(Reflect)]` implements the following traits:
///
/// - `TypePath`
/// - `Typed`
/// - `Reflect`
/// - `Struct` (for `struct T { ... }` and `struct T;`)
///
/// Tuple structs, enums and unions are rejected unless marked `opaque`.
///
/// ## Opaque Types
///
/// `#[reflect(opaque)]` stops the macro from looking at the fields. The type
/// is then reachable only through its codec hooks or its serde
/// implementations:
///
/// ```rust, ignore
/// #[derive(Reflect, Serialize, Deserialize, Default)]
/// #[reflect(opaque, serde)]
/// struct Color(u8, u8, u8);
/// ```
///
/// - `serialize`: the type implements `serde::Serialize`.
/// - `deserialize`: the type implements `serde::Deserialize`.
/// - `serde`: both of the above.
///
/// These flags are only accepted together with `opaque`.
///
/// ## Codec Hooks
///
/// `#[reflect(marshal)]` and `#[reflect(unmarshal)]` declare that the type
/// implements `Marshaler` / `Unmarshaler`. Codecs defer to them before
/// looking at the fields.
///
/// ```rust, ignore
/// #[derive(Reflect, Default)]
/// #[reflect(marshal, unmarshal)]
/// struct Stamp { secs: u64 }
///
/// impl Marshaler for Stamp { /* ... */ }
/// impl Unmarshaler for Stamp { /* ... */ }
/// ```
///
/// These attributes can only be applied at the type level.
///
/// ## Field Attributes
///
/// ```rust, ignore
/// #[derive(Reflect, Default)]
/// struct User {
///     #[reflect(rename = "id")]
///     user_id: u64,
///     #[reflect(omit_empty)]
///     nickname: String,
///     #[reflect(omit_empty = false)]
///     tags: Vec<String>,
///     #[reflect(embed)]
///     audit: Audit,
///     #[reflect(skip)]
///     cache: Option<u32>,
/// }
/// ```
///
/// - `rename = "..."`: explicit wire name. A renamed field always wins a
///   name conflict at its depth.
/// - `omit_empty`, `omit_empty = bool`: explicit omit-empty choice; without
///   it the codec configuration decides.
/// - `embed`: promote the members of a record (or `Option` of a record)
///   into the enclosing record.
/// - `skip`: the field is invisible to reflection. Its type needs no
///   reflection support.
#[proc_macro_derive(Reflect, attributes(reflect))]
pub fn derive_full_reflect(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    impls::match_reflect_impls(ast)
}
