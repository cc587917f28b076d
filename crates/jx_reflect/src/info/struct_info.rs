use alloc::boxed::Box;

use jx_utils::hash::HashMap;

use crate::info::{NamedField, Type, TypePath, impl_type_fn};

/// Compile-time information of a record type.
///
/// Fields are kept in declaration order; skipped fields are not listed.
#[derive(Clone, Debug)]
pub struct StructInfo {
    ty: Type,
    fields: Box<[NamedField]>,
    field_names: Box<[&'static str]>,
    field_indices: HashMap<&'static str, usize>,
}

impl StructInfo {
    impl_type_fn!(ty);

    /// Creates a new [`StructInfo`] from its fields in declaration order.
    pub fn new<T: TypePath>(fields: &[NamedField]) -> Self {
        let field_indices = fields
            .iter()
            .enumerate()
            .map(|(index, field)| (field.name(), index))
            .collect();

        let field_names = fields.iter().map(NamedField::name).collect();

        Self {
            ty: Type::of::<T>(),
            fields: fields.into(),
            field_names,
            field_indices,
        }
    }

    /// Returns the field with the given source name.
    pub fn field(&self, name: &str) -> Option<&NamedField> {
        self.field_indices
            .get(name)
            .map(|&index| &self.fields[index])
    }

    /// Returns the field at the given index.
    #[inline]
    pub fn field_at(&self, index: usize) -> Option<&NamedField> {
        self.fields.get(index)
    }

    /// Returns the index of the field with the given source name.
    #[inline]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.field_indices.get(name).copied()
    }

    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, NamedField> {
        self.fields.iter()
    }

    #[inline]
    pub fn field_names(&self) -> &[&'static str] {
        &self.field_names
    }

    #[inline]
    pub fn field_len(&self) -> usize {
        self.fields.len()
    }
}
