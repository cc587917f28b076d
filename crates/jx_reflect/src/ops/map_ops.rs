use alloc::boxed::Box;

use crate::Reflect;

/// A [`Reflect`] subtrait for maps keyed by strings.
///
/// Iteration order is the map's own; codecs that need a stable order sort
/// the keys themselves.
pub trait Map: Reflect {
    /// Returns the value stored under `key`.
    fn get(&self, key: &str) -> Option<&dyn Reflect>;

    /// Returns the number of entries.
    fn len(&self) -> usize;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns an iterator over the entries.
    fn iter(&self) -> Box<dyn Iterator<Item = (&str, &dyn Reflect)> + '_>;

    /// Removes all entries.
    fn clear(&mut self);

    /// Stores a default value under `key` and returns it.
    ///
    /// An existing value under `key` is replaced.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::collections::BTreeMap;
    /// use jx_reflect::ops::Map;
    ///
    /// let mut map = BTreeMap::from([("a".to_string(), 5_i32)]);
    /// let slot = map.insert_default("a");
    /// assert_eq!(slot.downcast_ref::<i32>(), Some(&0));
    /// ```
    fn insert_default(&mut self, key: &str) -> &mut dyn Reflect;
}
