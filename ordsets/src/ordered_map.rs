//! [OrderedMap] is a hash map that iterates over its entries in ascending key order.
use crate::{
    util::{impl_double_ended_iterator, impl_iterator},
    DefaultBuildHasher, Set,
};
use core::hash::Hash;
use hashbrown::HashMap;
use std::{borrow::Borrow, hash::BuildHasher};

/// A hash map that keeps a sorted index of its keys.
///
/// In `OrderedMap<K, V, S>`,
/// `K: Ord + Hash + Eq + Clone` is the key type,
/// `V` is the value type
/// and `S: BuildHasher` is used for hashing keys (it defaults to [`DefaultBuildHasher`]).
///
/// Values are stored in a hash table, which answers [`get`](OrderedMap::get) in expected constant
/// time. Every key is also stored in a `Vec` that is kept sorted, which answers
/// [`contains_key`](OrderedMap::contains_key) by binary search and provides iteration in key
/// order. Inserting or removing a key costs `O(n)` because the sorted index has to be shifted.
///
/// Keys are cloned once when inserted, as each of the two structures owns a copy.
#[derive(Clone)]
pub struct OrderedMap<K, V, S = DefaultBuildHasher> {
    values: HashMap<K, V, S>,
    keys: Vec<K>,
}

impl<K, V, S: Default> Default for OrderedMap<K, V, S> {
    fn default() -> Self {
        OrderedMap {
            values: HashMap::with_hasher(S::default()),
            keys: Vec::new(),
        }
    }
}

impl<K, V, S: Default> OrderedMap<K, V, S> {
    /// Returns an empty map.
    pub fn new() -> Self {
        Self::default()
    }
    /// Returns an empty map with the specified capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, S::default())
    }
}

impl<K, V, S> OrderedMap<K, V, S> {
    /// Returns an empty map with the provided BuildHasher.
    pub fn with_hasher(build_hasher: S) -> Self {
        OrderedMap {
            values: HashMap::with_hasher(build_hasher),
            keys: Vec::new(),
        }
    }
    /// Returns an empty map with the specified capacity and provided BuildHasher.
    pub fn with_capacity_and_hasher(capacity: usize, build_hasher: S) -> Self {
        OrderedMap {
            values: HashMap::with_capacity_and_hasher(capacity, build_hasher),
            keys: Vec::with_capacity(capacity),
        }
    }
    /// Returns the number of entries in the map.
    pub fn len(&self) -> usize {
        self.keys.len()
    }
    /// Returns `true` if the map is empty.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
    /// Removes all entries from the map, but keeps the allocated memory.
    pub fn clear(&mut self) {
        self.keys.clear();
        self.values.clear();
    }
    /// Returns all keys in ascending order.
    pub fn sorted_keys(&self) -> &[K] {
        &self.keys
    }
    /// Returns a copy of all keys in ascending order.
    pub fn keys_vec(&self) -> Vec<K>
    where
        K: Clone,
    {
        self.keys.clone()
    }
    /// Returns a reference to the map's BuildHasher.
    pub fn hasher(&self) -> &S {
        self.values.hasher()
    }
}

impl<K: Ord + Hash + Eq + Clone, V, S: BuildHasher> OrderedMap<K, V, S> {
    /// Inserts `value` at `key` unless `key` is already present.
    ///
    /// Returns `true` if the entry was inserted. An existing value is never replaced.
    pub fn add(&mut self, key: K, value: V) -> bool {
        match self.keys.binary_search(&key) {
            Ok(_) => false,
            Err(pos) => {
                self.keys.insert(pos, key.clone());
                self.values.insert(key, value);
                true
            }
        }
    }
    /// Inserts `value` at `key`, replacing and returning any previous value.
    ///
    /// The key is added to the sorted index only if it was not present before.
    pub fn force_add(&mut self, key: K, value: V) -> Option<V> {
        if let Err(pos) = self.keys.binary_search(&key) {
            self.keys.insert(pos, key.clone());
        }
        self.values.insert(key, value)
    }
}

impl<K: Ord + Hash + Eq, V, S: BuildHasher> OrderedMap<K, V, S> {
    /// Returns a reference to the value corresponding to the specified key, if it exists.
    ///
    /// This looks up the hash table only and never consults the sorted index.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        if self.keys.is_empty() {
            return None;
        }
        self.values.get(key)
    }
    /// Returns a mutable reference to the value corresponding to the specified key, if it exists.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.values.get_mut(key)
    }
    /// Returns references to the key and value of the entry with the specified key, if it exists.
    pub fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.values.get_key_value(key)
    }
    /// Returns `true` if the map contains an entry with the specified key.
    ///
    /// This performs a binary search on the sorted index and never consults the hash table.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.position(key).is_ok()
    }
    fn position<Q>(&self, key: &Q) -> Result<usize, usize>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.keys.binary_search_by(|probe| probe.borrow().cmp(key))
    }
    /// Removes the entry with the specified key and returns its value, if it exists.
    ///
    /// The remaining keys keep their order.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + Ord + ?Sized,
    {
        let pos = self.position(key).ok()?;
        self.keys.remove(pos);
        self.values.remove(key)
    }
    /// Returns the entry with the smallest key, if the map is not empty.
    pub fn first_key_value(&self) -> Option<(&K, &V)> {
        self.get_key_value(self.keys.first()?)
    }
    /// Returns the entry with the largest key, if the map is not empty.
    pub fn last_key_value(&self) -> Option<(&K, &V)> {
        self.get_key_value(self.keys.last()?)
    }
    /// Removes all entries for which `f` evaluates to `false`.
    ///
    /// `f` is called exactly once for each entry, in ascending key order, and may mutate the
    /// values.
    pub fn retain(&mut self, mut f: impl FnMut(&K, &mut V) -> bool) {
        let values = &mut self.values;
        self.keys.retain(|key| {
            let keep = f(key, values.get_mut(key).unwrap());
            if !keep {
                values.remove(key);
            }
            keep
        })
    }
    /// Returns a copy of all entries as a hash map.
    ///
    /// The returned map is independent of `self`.
    pub fn to_map(&self) -> HashMap<K, V, S>
    where
        K: Clone,
        V: Clone,
        S: Clone,
    {
        self.values.clone()
    }
    /// Converts the map into a hash map. The sorted index is dropped.
    pub fn into_map(self) -> HashMap<K, V, S> {
        self.values
    }

    #[cfg(test)]
    pub(crate) fn check(&self) {
        assert_eq!(self.keys.len(), self.values.len());
        assert!(self.keys.windows(2).all(|pair| pair[0] < pair[1]));
        for key in self.keys.iter() {
            assert!(self.values.contains_key(key));
        }
    }
}

impl<K, V, S> OrderedMap<K, V, S> {
    /// Returns an iterator over all key-value pairs in ascending key order.
    pub fn iter(&self) -> Iter<'_, K, V, S> {
        Iter {
            keys: self.keys.iter(),
            values: &self.values,
        }
    }
    /// Returns an iterator over all keys in ascending order.
    pub fn keys(&self) -> Keys<'_, K> {
        Keys {
            inner: self.keys.iter(),
        }
    }
    /// Returns an iterator over all values, in ascending order of their keys.
    pub fn values(&self) -> Values<'_, K, V, S> {
        Values { inner: self.iter() }
    }
}

impl<K: std::fmt::Debug + Hash + Eq, V: std::fmt::Debug, S: BuildHasher> std::fmt::Debug
    for OrderedMap<K, V, S>
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: Hash + Eq, V: PartialEq, S1: BuildHasher, S2: BuildHasher> PartialEq<OrderedMap<K, V, S2>>
    for OrderedMap<K, V, S1>
{
    fn eq(&self, other: &OrderedMap<K, V, S2>) -> bool {
        self.keys == other.keys
            && self
                .keys
                .iter()
                .all(|key| self.values.get(key) == other.values.get(key))
    }
}

impl<K: Hash + Eq, V: Eq, S: BuildHasher> Eq for OrderedMap<K, V, S> {}

impl<K, V, S> Set for OrderedMap<K, V, S> {
    fn len(&self) -> usize {
        OrderedMap::len(self)
    }
    fn clear(&mut self) {
        OrderedMap::clear(self)
    }
}

/// An iterator over the entries of an [`OrderedMap`] in ascending key order.
///
/// This struct is created by the [`iter`](`OrderedMap::iter`) method on [`OrderedMap`].
pub struct Iter<'a, K, V, S> {
    keys: std::slice::Iter<'a, K>,
    values: &'a HashMap<K, V, S>,
}

impl<'a, K, V, S> Clone for Iter<'a, K, V, S> {
    fn clone(&self) -> Self {
        Iter {
            keys: self.keys.clone(),
            values: self.values,
        }
    }
}

impl<'a, K: Hash + Eq, V, S: BuildHasher> Iterator for Iter<'a, K, V, S> {
    type Item = (&'a K, &'a V);
    fn next(&mut self) -> Option<Self::Item> {
        let key = self.keys.next()?;
        let values = self.values;
        Some((key, &values[key]))
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.keys.size_hint()
    }
    fn count(self) -> usize {
        self.keys.len()
    }
    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        let key = self.keys.nth(n)?;
        let values = self.values;
        Some((key, &values[key]))
    }
}

impl<'a, K: Hash + Eq, V, S: BuildHasher> DoubleEndedIterator for Iter<'a, K, V, S> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let key = self.keys.next_back()?;
        let values = self.values;
        Some((key, &values[key]))
    }
}

impl<'a, K: Hash + Eq, V, S: BuildHasher> ExactSizeIterator for Iter<'a, K, V, S> {}

impl<'a, K: Hash + Eq, V, S: BuildHasher> IntoIterator for &'a OrderedMap<K, V, S> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V, S>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator over the keys of an [`OrderedMap`] in ascending order.
///
/// This struct is created by the [`keys`](`OrderedMap::keys`) method on [`OrderedMap`].
pub struct Keys<'a, K> {
    inner: std::slice::Iter<'a, K>,
}
impl<'a, K> Iterator for Keys<'a, K> {
    type Item = &'a K;
    impl_iterator!();
}
impl<'a, K> DoubleEndedIterator for Keys<'a, K> {
    impl_double_ended_iterator!();
}
impl<'a, K> ExactSizeIterator for Keys<'a, K> {}

/// An iterator over the values of an [`OrderedMap`], in ascending order of their keys.
///
/// This struct is created by the [`values`](`OrderedMap::values`) method on [`OrderedMap`].
pub struct Values<'a, K, V, S> {
    inner: Iter<'a, K, V, S>,
}
impl<'a, K: Hash + Eq, V, S: BuildHasher> Iterator for Values<'a, K, V, S> {
    type Item = &'a V;
    impl_iterator!(|entry| entry.1);
}
impl<'a, K: Hash + Eq, V, S: BuildHasher> DoubleEndedIterator for Values<'a, K, V, S> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|entry| entry.1)
    }
}

/// An iterator that moves the entries out of an [`OrderedMap`] in ascending key order.
///
/// This struct is created by the `into_iter` method on [`OrderedMap`].
pub struct IntoIter<K, V, S> {
    keys: std::vec::IntoIter<K>,
    values: HashMap<K, V, S>,
}
impl<K: Hash + Eq, V, S: BuildHasher> Iterator for IntoIter<K, V, S> {
    type Item = (K, V);
    fn next(&mut self) -> Option<Self::Item> {
        let key = self.keys.next()?;
        self.values.remove_entry(&key)
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.keys.size_hint()
    }
}
impl<K: Hash + Eq, V, S: BuildHasher> ExactSizeIterator for IntoIter<K, V, S> {}

impl<K: Hash + Eq, V, S: BuildHasher> IntoIterator for OrderedMap<K, V, S> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V, S>;
    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            keys: self.keys.into_iter(),
            values: self.values,
        }
    }
}

impl<K: Ord + Hash + Eq + Clone, V, S: BuildHasher> Extend<(K, V)> for OrderedMap<K, V, S> {
    /// Inserts all pairs, replacing the values of keys that are already present.
    fn extend<IntoIter: IntoIterator<Item = (K, V)>>(&mut self, iter: IntoIter) {
        let iter = iter.into_iter();
        let (lower_bound, _) = iter.size_hint();
        self.keys.reserve(lower_bound);
        self.values.reserve(lower_bound);
        for (key, value) in iter {
            self.force_add(key, value);
        }
    }
}

impl<K: Ord + Hash + Eq + Clone, V, S: BuildHasher + Default> FromIterator<(K, V)>
    for OrderedMap<K, V, S>
{
    fn from_iter<IntoIter: IntoIterator<Item = (K, V)>>(iter: IntoIter) -> Self {
        let mut map = OrderedMap::new();
        map.extend(iter);
        map
    }
}
