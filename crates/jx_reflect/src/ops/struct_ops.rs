use crate::Reflect;
use crate::info::StructInfo;

/// A [`Reflect`] subtrait for records with named members.
///
/// Members are addressed by their index in the type's [`StructInfo`];
/// skipped members have no index.
///
/// # Examples
///
/// ```
/// use jx_reflect::{Reflect, ops::Struct};
///
/// #[derive(Reflect, Default)]
/// struct Foo { a: i32, b: bool }
///
/// let mut foo = Foo { a: 1, b: true };
/// assert_eq!(foo.field_len(), 2);
/// assert!(foo.field("c").is_none());
///
/// if let Some(field) = foo.field_mut("a") {
///     *field.downcast_mut::<i32>().unwrap() = 42;
/// }
/// assert_eq!(foo.a, 42);
/// ```
pub trait Struct: Reflect {
    /// Returns the member at `index`, or `None` if out of bounds.
    fn field_at(&self, index: usize) -> Option<&dyn Reflect>;

    /// Returns the member at `index` mutably, or `None` if out of bounds.
    fn field_at_mut(&mut self, index: usize) -> Option<&mut dyn Reflect>;

    /// Returns the number of described members.
    fn field_len(&self) -> usize;

    /// Returns the [`StructInfo`] of this value, if its type info is a record.
    #[inline]
    fn struct_info(&self) -> Option<&'static StructInfo> {
        self.reflect_type_info().as_struct().ok()
    }

    /// Returns the member with the given source name.
    fn field(&self, name: &str) -> Option<&dyn Reflect> {
        let index = self.struct_info()?.index_of(name)?;
        self.field_at(index)
    }

    /// Returns the member with the given source name mutably.
    fn field_mut(&mut self, name: &str) -> Option<&mut dyn Reflect> {
        let index = self.struct_info()?.index_of(name)?;
        self.field_at_mut(index)
    }

    /// Returns the source name of the member at `index`.
    fn name_at(&self, index: usize) -> Option<&'static str> {
        self.struct_info()?.field_at(index).map(|field| field.name())
    }
}

impl dyn Struct {
    /// Returns an iterator over the members in declaration order.
    #[inline]
    pub fn iter_fields(&self) -> StructFieldIter<'_> {
        StructFieldIter::new(self)
    }
}

/// An iterator over the member values of a [`Struct`].
pub struct StructFieldIter<'a> {
    struct_val: &'a dyn Struct,
    index: usize,
}

impl<'a> StructFieldIter<'a> {
    /// Creates a new iterator for the given struct.
    #[inline(always)]
    pub const fn new(value: &'a dyn Struct) -> Self {
        StructFieldIter {
            struct_val: value,
            index: 0,
        }
    }
}

impl<'a> Iterator for StructFieldIter<'a> {
    type Item = &'a dyn Reflect;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let value = self.struct_val.field_at(self.index);
        self.index += value.is_some() as usize;
        value
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.struct_val.field_len().saturating_sub(self.index);
        (size, Some(size))
    }
}

impl<'a> ExactSizeIterator for StructFieldIter<'a> {}
