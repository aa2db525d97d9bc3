//! Stable in-place removal of duplicates from a `Vec`.
//!
//! Every function in this module keeps the first occurrence of each distinct value, preserves the
//! relative order of those first occurrences and truncates the vector to the retained prefix. The
//! vector's allocation is reused. Elements are only moved, never cloned, so removed duplicates are
//! dropped when the vector is truncated.
//!
//! [`unique`] only needs [`PartialEq`] and performs `O(n²)` comparisons in the worst case.
//! [`unique_hashed`] and [`unique_with_hasher`] need [`Hash`] and [`Eq`] and run in expected
//! linear time. All variants produce identical results for types implementing both.
use crate::DefaultBuildHasher;
use core::hash::Hash;
use hashbrown::hash_table::HashTable;
use std::hash::BuildHasher;

/// Removes all but the first occurrence of every value, using only `==` comparisons.
///
/// For each retained element, the remaining tail is scanned once and every element not equal to
/// it is moved to the left.
///
/// ```
/// let mut items = vec![3, 1, 3, 2, 1, 1];
/// ordsets::dedup::unique(&mut items);
/// assert_eq!(items, [3, 1, 2]);
/// ```
pub fn unique<T: PartialEq>(items: &mut Vec<T>) {
    let mut anchor = 0;
    while anchor < items.len() {
        let mut top = anchor + 1;
        for index in anchor + 1..items.len() {
            if items[index] != items[anchor] {
                items.swap(top, index);
                top += 1;
            }
        }
        items.truncate(top);
        anchor += 1;
    }
}

/// Removes all but the first occurrence of every value, using the [`DefaultBuildHasher`].
///
/// ```
/// let mut items = vec!["b", "a", "b", "c", "a"];
/// ordsets::dedup::unique_hashed(&mut items);
/// assert_eq!(items, ["b", "a", "c"]);
/// ```
pub fn unique_hashed<T: Hash + Eq>(items: &mut Vec<T>) {
    unique_with_hasher(items, &DefaultBuildHasher::default())
}

/// Removes all but the first occurrence of every value, hashing with `build_hasher`.
///
/// The retained elements are compacted into a prefix of `items`. A table of indices into that
/// prefix is used to recognize values that were already retained.
pub fn unique_with_hasher<T: Hash + Eq, S: BuildHasher>(items: &mut Vec<T>, build_hasher: &S) {
    let mut retained: HashTable<usize> = HashTable::with_capacity(items.len());
    let mut top = 0;
    for index in 0..items.len() {
        let hash = build_hasher.hash_one(&items[index]);
        if retained
            .find(hash, |&kept| items[kept] == items[index])
            .is_some()
        {
            continue;
        }
        items.swap(top, index);
        retained.insert_unique(hash, top, |&kept| build_hasher.hash_one(&items[kept]));
        top += 1;
    }
    items.truncate(top);
}
