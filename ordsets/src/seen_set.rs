//! [SeenSet] keeps track of which values have been observed.
use crate::{dedup, util::impl_iterator, DefaultBuildHasher, Set};
use core::hash::Hash;
use hashbrown::HashSet;
use std::{borrow::Borrow, hash::BuildHasher};

/// A record of observed values.
///
/// Values can be marked as seen but never individually unmarked, so membership only grows until
/// the set is [cleared](SeenSet::clear).
///
/// Besides single value queries, a [`SeenSet`] can classify a whole batch of values at once using
/// [`filter_seen`](SeenSet::filter_seen) and [`filter_not_seen`](SeenSet::filter_not_seen).
#[derive(Clone)]
pub struct SeenSet<T, S = DefaultBuildHasher> {
    table: HashSet<T, S>,
}

impl<T, S: Default> Default for SeenSet<T, S> {
    fn default() -> Self {
        SeenSet {
            table: HashSet::with_hasher(S::default()),
        }
    }
}

impl<T, S: Default> SeenSet<T, S> {
    /// Returns an empty set.
    pub fn new() -> Self {
        Self::default()
    }
    /// Returns an empty set with the specified capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        SeenSet {
            table: HashSet::with_capacity_and_hasher(capacity, S::default()),
        }
    }
}

impl<T, S> SeenSet<T, S> {
    /// Returns an empty set with the provided BuildHasher.
    pub fn with_hasher(build_hasher: S) -> Self {
        SeenSet {
            table: HashSet::with_hasher(build_hasher),
        }
    }
    /// Returns the number of values seen.
    pub fn len(&self) -> usize {
        self.table.len()
    }
    /// Returns `true` if no value was seen.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
    /// Forgets all seen values, but keeps the allocated memory.
    pub fn clear(&mut self) {
        self.table.clear();
    }
    /// Returns an iterator over all seen values, in unspecified order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.table.iter(),
        }
    }
}

impl<T: Hash + Eq, S: BuildHasher> SeenSet<T, S> {
    /// Marks `value` as seen.
    ///
    /// Returns `true` if `value` was not seen before.
    pub fn see(&mut self, value: T) -> bool {
        self.table.insert(value)
    }
    /// Marks `value` as seen, without reporting whether it was seen before.
    pub fn set_seen(&mut self, value: T) {
        self.table.insert(value);
    }
    /// Returns `true` if `value` was seen.
    pub fn has<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.table.contains(value)
    }
    /// Returns the values of `elems` that were seen, without duplicates.
    ///
    /// The retained values keep their relative order and the storage of `elems` is reused.
    pub fn filter_seen(&self, elems: Vec<T>) -> Vec<T> {
        self.filter(elems, true)
    }
    /// Returns the values of `elems` that were not seen, without duplicates.
    ///
    /// The retained values keep their relative order and the storage of `elems` is reused.
    pub fn filter_not_seen(&self, elems: Vec<T>) -> Vec<T> {
        self.filter(elems, false)
    }
    fn filter(&self, mut elems: Vec<T>, seen: bool) -> Vec<T> {
        let batch_len = elems.len();
        elems.retain(|elem| self.table.contains(elem) == seen);
        dedup::unique_with_hasher(&mut elems, self.table.hasher());
        log::trace!(
            "filtered {} of {batch_len} values (seen = {seen})",
            elems.len()
        );
        elems
    }
}

impl<T: std::fmt::Debug, S> std::fmt::Debug for SeenSet<T, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T: Hash + Eq, S: BuildHasher> PartialEq for SeenSet<T, S> {
    fn eq(&self, other: &Self) -> bool {
        self.table == other.table
    }
}

impl<T: Hash + Eq, S: BuildHasher> Eq for SeenSet<T, S> {}

impl<T, S> Set for SeenSet<T, S> {
    fn len(&self) -> usize {
        SeenSet::len(self)
    }
    fn clear(&mut self) {
        SeenSet::clear(self)
    }
}

/// An iterator over the values of a [`SeenSet`].
///
/// This struct is created by the [`iter`](SeenSet::iter) method on [`SeenSet`].
pub struct Iter<'a, T> {
    inner: hashbrown::hash_set::Iter<'a, T>,
}
impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;
    impl_iterator!();
}
impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T, S> IntoIterator for &'a SeenSet<T, S> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator that moves out of a [`SeenSet`].
///
/// This struct is created by the `into_iter` method on [`SeenSet`].
pub struct IntoIter<T> {
    inner: hashbrown::hash_set::IntoIter<T>,
}
impl<T> Iterator for IntoIter<T> {
    type Item = T;
    impl_iterator!();
}
impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T, S> IntoIterator for SeenSet<T, S> {
    type Item = T;
    type IntoIter = IntoIter<T>;
    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.table.into_iter(),
        }
    }
}

impl<T: Hash + Eq, S: BuildHasher> Extend<T> for SeenSet<T, S> {
    fn extend<IntoIter: IntoIterator<Item = T>>(&mut self, iter: IntoIter) {
        self.table.extend(iter)
    }
}

impl<T: Hash + Eq, S: BuildHasher + Default> FromIterator<T> for SeenSet<T, S> {
    fn from_iter<IntoIter: IntoIterator<Item = T>>(iter: IntoIter) -> Self {
        let mut set = SeenSet::new();
        set.extend(iter);
        set
    }
}
