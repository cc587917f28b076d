use crate::Reflect;

/// A [`Reflect`] subtrait for nullable values.
pub trait Optional: Reflect {
    /// Returns the inner value, if present.
    fn get(&self) -> Option<&dyn Reflect>;

    /// Returns the inner value mutably, if present.
    fn get_mut(&mut self) -> Option<&mut dyn Reflect>;

    /// Clears the value.
    fn set_none(&mut self);

    /// Returns the inner value, storing a default one first if absent.
    fn get_or_insert_default(&mut self) -> &mut dyn Reflect;

    #[inline]
    fn is_none(&self) -> bool {
        self.get().is_none()
    }
}
