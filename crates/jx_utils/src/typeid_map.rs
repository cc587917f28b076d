use core::any::TypeId;

use crate::hash::NoOpHashState;
use crate::hash::hashbrown::HashMap;
use crate::hash::hashbrown::hash_map::Entry;

// -----------------------------------------------------------------------------
// TypeIdMap

/// A map keyed by [`TypeId`].
///
/// `TypeId` is already a well distributed hash, so the map skips rehashing
/// through [`NoOpHashState`].
///
/// # Examples
///
/// ```
/// use core::any::TypeId;
/// use jx_utils::TypeIdMap;
///
/// let mut map = TypeIdMap::new();
/// assert_eq!(*map.get_or_insert(TypeId::of::<u8>(), || "u8"), "u8");
/// assert_eq!(*map.get_or_insert(TypeId::of::<u8>(), || "again"), "u8");
/// assert_eq!(map.get(&TypeId::of::<u8>()), Some(&"u8"));
/// ```
pub struct TypeIdMap<V>(HashMap<TypeId, V, NoOpHashState>);

impl<V> TypeIdMap<V> {
    /// Creates an empty map.
    #[inline]
    pub const fn new() -> Self {
        Self(HashMap::with_hasher(NoOpHashState))
    }

    /// Returns the stored value, inserting the one produced by `f` first
    /// if `type_id` is vacant.
    ///
    /// An existing value is never replaced.
    #[inline]
    pub fn get_or_insert(&mut self, type_id: TypeId, f: impl FnOnce() -> V) -> &mut V {
        match self.0.entry(type_id) {
            Entry::Vacant(entry) => entry.insert(f()),
            Entry::Occupied(entry) => entry.into_mut(),
        }
    }

    pub fn get(&self, type_id: &TypeId) -> Option<&V> {
        self.0.get(type_id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl<T> Default for TypeIdMap<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}
