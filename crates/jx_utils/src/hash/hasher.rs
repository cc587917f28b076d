//! Provide `FixedHasher` and `NoOpHasher`.
//!
//! `FixedHasher` is based on the `foldhash` crate and yields stable
//! results through a fixed seed.
//!
//! `NoOpHasher` uses the written `u64` directly as the hash value, which is
//! what `TypeId` keys want: they are already uniformly distributed.

use core::hash::{BuildHasher, Hasher};

use foldhash::fast::{FixedState, FoldHasher};

// -----------------------------------------------------------------------------
// FixedHasher

const FIXED_HASH_STATE: FixedState = FixedState::with_seed(0x6A09E667F3BCC908);

/// The hasher produced by [`FixedHashState`].
pub type FixedHasher = FoldHasher<'static>;

/// A [`BuildHasher`] with a fixed seed.
#[derive(Copy, Clone, Default, Debug)]
pub struct FixedHashState;

impl BuildHasher for FixedHashState {
    type Hasher = FixedHasher;

    #[inline(always)]
    fn build_hasher(&self) -> Self::Hasher {
        FIXED_HASH_STATE.build_hasher()
    }
}

// -----------------------------------------------------------------------------
// NoOpHasher

/// A hasher that returns the last `u64` written to it.
#[derive(Copy, Clone, Default, Debug)]
pub struct NoOpHasher {
    hash: u64,
}

impl Hasher for NoOpHasher {
    #[inline]
    fn finish(&self) -> u64 {
        self.hash
    }

    fn write(&mut self, bytes: &[u8]) {
        // Only reached by keys that do not call `write_u64`.
        for byte in bytes.iter().rev() {
            self.hash = self.hash.rotate_left(8).wrapping_add(*byte as u64);
        }
    }

    #[inline]
    fn write_u64(&mut self, i: u64) {
        self.hash = i;
    }
}

/// A [`BuildHasher`] producing [`NoOpHasher`].
#[derive(Copy, Clone, Default, Debug)]
pub struct NoOpHashState;

impl BuildHasher for NoOpHashState {
    type Hasher = NoOpHasher;

    #[inline(always)]
    fn build_hasher(&self) -> Self::Hasher {
        NoOpHasher { hash: 0 }
    }
}

#[cfg(test)]
mod tests {
    use super::{FixedHashState, NoOpHashState};
    use core::hash::BuildHasher;

    #[test]
    fn fixed_state_is_stable() {
        let a = FixedHashState.hash_one("wire_name");
        let b = FixedHashState.hash_one("wire_name");
        assert_eq!(a, b);
        assert_ne!(a, FixedHashState.hash_one("wire_names"));
    }

    #[test]
    fn noop_state_passes_u64_through() {
        assert_eq!(NoOpHashState.hash_one(42_u64), 42);
    }
}
