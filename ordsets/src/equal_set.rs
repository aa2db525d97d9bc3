//! [EqualSet] is a set for element types that can only be compared for equality.
use crate::{
    util::{impl_double_ended_iterator, impl_iterator},
    Set,
};

/// A set that only requires its elements to implement [`PartialEq`].
///
/// Elements are kept in a `Vec` in insertion order. Without hashing or ordering, every membership
/// test is a linear scan, so inserting `m` elements into a set of size `n` costs `O(n * m)`
/// comparisons. Prefer a hash based set whenever the element type allows it.
///
/// The set never checks whether `==` is an equivalence relation and trusts the element type's
/// implementation. For types like `f64`, a value that is not equal to itself (`NaN`) is inserted
/// again on every call.
#[derive(Clone)]
pub struct EqualSet<T> {
    elems: Vec<T>,
}

impl<T> Default for EqualSet<T> {
    fn default() -> Self {
        EqualSet { elems: Vec::new() }
    }
}

impl<T> EqualSet<T> {
    /// Returns an empty set.
    pub fn new() -> Self {
        Self::default()
    }
    /// Returns an empty set with the specified capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        EqualSet {
            elems: Vec::with_capacity(capacity),
        }
    }
    /// Returns the number of elements in the set.
    pub fn len(&self) -> usize {
        self.elems.len()
    }
    /// Returns `true` if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.elems.is_empty()
    }
    /// Removes all elements, but keeps the allocated memory.
    pub fn clear(&mut self) {
        self.elems.clear();
    }
    /// Returns a reference to a slice containing all elements in insertion order.
    pub fn as_slice(&self) -> &[T] {
        &self.elems
    }
    /// Converts the set into a `Vec` in insertion order.
    pub fn into_vec(self) -> Vec<T> {
        self.elems
    }
    /// Returns an iterator over the set.
    ///
    /// The iterator yields all elements in insertion order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.elems.iter(),
        }
    }
}

impl<T: PartialEq> EqualSet<T> {
    /// Returns `true` if the set contains an element equal to `elem`.
    pub fn contains(&self, elem: &T) -> bool {
        self.elems.iter().any(|existing| existing == elem)
    }
    /// Appends `elem` to the set, unless the set contains an equal element already.
    /// Returns `true` if the element was inserted.
    pub fn add(&mut self, elem: T) -> bool {
        if self.contains(&elem) {
            return false;
        }
        self.elems.push(elem);
        true
    }
    /// Adds every element of `elems` in order. Returns the number of elements inserted.
    ///
    /// Each element is compared against the current contents of the set, so repeated elements
    /// within `elems` are inserted only once.
    pub fn add_many(&mut self, elems: impl IntoIterator<Item = T>) -> usize {
        let mut count = 0;
        for elem in elems {
            if self.add(elem) {
                count += 1;
            }
        }
        log::trace!("added {count} elements, set size is now {}", self.len());
        count
    }
    /// Adds a copy of every element of `other` that is not in `self` yet.
    /// Returns the number of elements inserted.
    pub fn union(&mut self, other: &EqualSet<T>) -> usize
    where
        T: Clone,
    {
        let mut count = 0;
        for elem in other.iter() {
            if !self.contains(elem) {
                self.elems.push(elem.clone());
                count += 1;
            }
        }
        log::trace!(
            "union added {count} of {} elements, set size is now {}",
            other.len(),
            self.len()
        );
        count
    }
    /// Removes the element equal to `elem` and returns it, if it exists.
    ///
    /// The remaining elements keep their order.
    pub fn remove(&mut self, elem: &T) -> Option<T> {
        let index = self.elems.iter().position(|existing| existing == elem)?;
        Some(self.elems.remove(index))
    }
    /// Returns `true` if every element of `self` is contained in `other`.
    pub fn is_subset(&self, other: &EqualSet<T>) -> bool {
        self.len() <= other.len() && self.iter().all(|elem| other.contains(elem))
    }

    #[cfg(test)]
    pub(crate) fn check(&self) {
        for (i, a) in self.elems.iter().enumerate() {
            for b in &self.elems[i + 1..] {
                assert!(a != b);
            }
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for EqualSet<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self).finish()
    }
}

impl<T: PartialEq> PartialEq for EqualSet<T> {
    /// Two sets are equal if they contain the same elements, in any order.
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.is_subset(other)
    }
}

impl<T> Set for EqualSet<T> {
    fn len(&self) -> usize {
        EqualSet::len(self)
    }
    fn clear(&mut self) {
        EqualSet::clear(self)
    }
}

/// An iterator that returns references into an [`EqualSet`].
///
/// This struct is created by the [`iter`](EqualSet::iter) method on [`EqualSet`].
pub struct Iter<'a, T> {
    inner: std::slice::Iter<'a, T>,
}
impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Iter {
            inner: self.inner.clone(),
        }
    }
}
impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;
    impl_iterator!();
}
impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    impl_double_ended_iterator!();
}
impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> IntoIterator for &'a EqualSet<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator that moves out of an [`EqualSet`].
///
/// This struct is created by the `into_iter` method on [`EqualSet`].
pub struct IntoIter<T> {
    inner: std::vec::IntoIter<T>,
}
impl<T> Iterator for IntoIter<T> {
    type Item = T;
    impl_iterator!();
}
impl<T> DoubleEndedIterator for IntoIter<T> {
    impl_double_ended_iterator!();
}
impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> IntoIterator for EqualSet<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;
    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.elems.into_iter(),
        }
    }
}

impl<T: PartialEq> Extend<T> for EqualSet<T> {
    fn extend<IntoIter: IntoIterator<Item = T>>(&mut self, iter: IntoIter) {
        self.add_many(iter);
    }
}

impl<T: PartialEq> FromIterator<T> for EqualSet<T> {
    fn from_iter<IntoIter: IntoIterator<Item = T>>(iter: IntoIter) -> Self {
        let mut set = EqualSet::new();
        set.add_many(iter);
        set
    }
}
