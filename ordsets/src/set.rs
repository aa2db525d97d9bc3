/// Operations shared by every container in this crate.
///
/// The trait is object safe, so code that only needs to inspect or reset a container can take a
/// `&mut dyn Set`.
pub trait Set {
    /// Returns the number of elements.
    fn len(&self) -> usize;

    /// Returns `true` if there are no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes all elements. Calling this on an empty container does nothing.
    fn clear(&mut self);
}
