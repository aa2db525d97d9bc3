//! Small generic containers with order and membership guarantees.
//!
//! * [OrderedMap] is a hash map that additionally keeps a sorted index of its keys, so iteration
//!   always yields entries in ascending key order without re-sorting.
//! * [SeenSet] records which values have been observed and classifies batches of values against
//!   that record.
//! * [EqualSet] is a set for types that only provide [`PartialEq`], using linear scans.
//! * The [dedup] module removes duplicates from a `Vec` in place while keeping the first
//!   occurrence of every value.
//!
//! All containers implement the [Set] trait for the operations they have in common.
//!
//! None of the containers synchronize internally. Mutation requires `&mut self`, so sharing a
//! container between threads needs an external lock.

mod set;
mod util;

pub mod dedup;
pub mod equal_set;
pub mod ordered_map;
pub mod seen_set;

#[cfg(test)]
mod test_equal_set;
#[cfg(test)]
mod test_seen_set;

pub use equal_set::EqualSet;
pub use ordered_map::OrderedMap;
pub use seen_set::SeenSet;
pub use set::Set;

/// The [`BuildHasher`](std::hash::BuildHasher) used by the hash based containers unless another
/// one is specified.
pub type DefaultBuildHasher = std::hash::BuildHasherDefault<zwohash::ZwoHasher>;
