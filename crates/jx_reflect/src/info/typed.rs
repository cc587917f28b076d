use crate::info::{TypeInfo, TypePath};

/// A static accessor to compile-time type information.
///
/// Automatically implemented by `#[derive(Reflect)]`. The returned value is
/// built on first access and lives for the rest of the program.
///
/// Manual implementations keep the value in a static cell:
///
/// ```
/// use jx_reflect::impls::NonGenericTypeInfoCell;
/// use jx_reflect::info::{OpaqueInfo, TypeInfo, TypePath, Typed};
///
/// struct Token;
///
/// impl TypePath for Token {
///     fn type_path() -> &'static str { "demo::Token" }
///     fn type_name() -> &'static str { "Token" }
///     fn type_ident() -> &'static str { "Token" }
/// }
///
/// impl Typed for Token {
///     fn type_info() -> &'static TypeInfo {
///         static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
///         CELL.get_or_init(|| TypeInfo::Opaque(OpaqueInfo::new::<Self>()))
///     }
/// }
///
/// assert_eq!(Token::type_info().type_path(), "demo::Token");
/// ```
pub trait Typed: TypePath {
    /// Returns the compile-time info for the underlying type.
    fn type_info() -> &'static TypeInfo;
}

/// Dynamic dispatch for [`Typed`].
///
/// Implemented for every `T: Typed`.
pub trait DynamicTyped {
    /// See [`Typed::type_info`].
    fn reflect_type_info(&self) -> &'static TypeInfo;
}

impl<T: Typed> DynamicTyped for T {
    #[inline]
    fn reflect_type_info(&self) -> &'static TypeInfo {
        T::type_info()
    }
}
