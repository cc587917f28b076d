use crate::Reflect;

/// A [`Reflect`] subtrait for growable sequences.
///
/// The decoder fills a list by clearing it and pushing default items,
/// then decoding into each new slot.
///
/// # Examples
///
/// ```
/// use jx_reflect::ops::List;
///
/// let mut list: Vec<u8> = vec![1, 2];
/// List::clear(&mut list);
/// let slot = list.push_default();
/// *slot.downcast_mut::<u8>().unwrap() = 7;
/// assert_eq!(list, [7]);
/// ```
pub trait List: Reflect {
    /// Returns the item at `index`.
    fn get(&self, index: usize) -> Option<&dyn Reflect>;

    /// Returns the item at `index` mutably.
    fn get_mut(&mut self, index: usize) -> Option<&mut dyn Reflect>;

    /// Returns the number of items.
    fn len(&self) -> usize;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes all items.
    fn clear(&mut self);

    /// Appends a default item and returns it.
    fn push_default(&mut self) -> &mut dyn Reflect;
}

impl dyn List {
    /// Returns an iterator over the items.
    #[inline]
    pub fn iter(&self) -> ListItemIter<'_> {
        ListItemIter::new(self)
    }
}

/// An iterator over the items of a [`List`].
pub struct ListItemIter<'a> {
    list: &'a dyn List,
    index: usize,
}

impl<'a> ListItemIter<'a> {
    #[inline(always)]
    pub const fn new(list: &'a dyn List) -> Self {
        Self { list, index: 0 }
    }
}

impl<'a> Iterator for ListItemIter<'a> {
    type Item = &'a dyn Reflect;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let value = self.list.get(self.index);
        self.index += value.is_some() as usize;
        value
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.list.len().saturating_sub(self.index);
        (size, Some(size))
    }
}

impl<'a> ExactSizeIterator for ListItemIter<'a> {}
