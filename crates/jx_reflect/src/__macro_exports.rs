//! Items referenced by derived code.

pub use erased_serde;

pub mod macro_utils {
    pub use ::alloc::borrow::ToOwned;
    pub use ::alloc::string::ToString;

    pub use crate::impls::concat as __concat;
}
