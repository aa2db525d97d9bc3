#![allow(missing_docs)]
use crate::{util::weighted_choose, SeenSet};
use indexmap::IndexSet;
use rand::prelude::*;
use std::{collections::HashSet, fmt::Debug, hash::Hash};

struct CheckedSeenSet<T> {
    dut: SeenSet<T>,
    ref_set: HashSet<T>,
}

impl<T: Hash + Eq + Clone + Debug> CheckedSeenSet<T> {
    fn new() -> Self {
        CheckedSeenSet {
            dut: SeenSet::new(),
            ref_set: HashSet::new(),
        }
    }
    fn see(&mut self, value: T) -> bool {
        let ref_result = self.ref_set.insert(value.clone());
        let dut_result = self.dut.see(value);
        assert_eq!(ref_result, dut_result);
        ref_result
    }
    fn set_seen(&mut self, value: T) {
        self.ref_set.insert(value.clone());
        self.dut.set_seen(value);
    }
    fn has(&self, value: &T) -> bool {
        let ref_result = self.ref_set.contains(value);
        let dut_result = self.dut.has(value);
        assert_eq!(ref_result, dut_result);
        ref_result
    }
    fn filter(&self, batch: Vec<T>) -> (Vec<T>, Vec<T>) {
        let ref_seen: Vec<T> = batch
            .iter()
            .filter(|elem| self.ref_set.contains(*elem))
            .cloned()
            .collect::<IndexSet<T>>()
            .into_iter()
            .collect();
        let ref_not_seen: Vec<T> = batch
            .iter()
            .filter(|elem| !self.ref_set.contains(*elem))
            .cloned()
            .collect::<IndexSet<T>>()
            .into_iter()
            .collect();
        let all: IndexSet<T> = batch.iter().cloned().collect();

        let dut_seen = self.dut.filter_seen(batch.clone());
        let dut_not_seen = self.dut.filter_not_seen(batch);
        assert_eq!(ref_seen, dut_seen);
        assert_eq!(ref_not_seen, dut_not_seen);

        // together the two filters cover every distinct input value exactly once
        assert_eq!(dut_seen.len() + dut_not_seen.len(), all.len());
        assert!(dut_seen.iter().chain(&dut_not_seen).all(|elem| all.contains(elem)));
        (dut_seen, dut_not_seen)
    }
    fn clear(&mut self) {
        self.ref_set.clear();
        self.dut.clear();
        assert!(self.dut.is_empty());
    }
    fn check(&self) {
        assert_eq!(self.ref_set.len(), self.dut.len());
        assert!(self.dut.iter().all(|elem| self.ref_set.contains(elem)));
    }
}

fn test_suite<T: Hash + Eq + Clone + Debug, R: Rng + SeedableRng>(
    mut rand_t: impl FnMut(&mut R) -> T,
) {
    let mut set: CheckedSeenSet<T> = CheckedSeenSet::new();
    let mut rng = R::seed_from_u64(25);
    let verbosity = 1;
    for _ in 0..5000 {
        weighted_choose! {&mut rng,
            See: 1.0 => {
                let item = rand_t(&mut rng);
                let result = set.see(item.clone());
                if verbosity > 0 {
                    println!("seeing {item:?} -> {result:?}");
                }
            },
            SeeTwice: 0.2 => {
                let item = rand_t(&mut rng);
                set.see(item.clone());
                assert!(!set.see(item.clone()));
                if verbosity > 0 {
                    println!("seeing {item:?} twice");
                }
            },
            SetSeen: 0.5 => {
                let item = rand_t(&mut rng);
                set.set_seen(item.clone());
                if verbosity > 0 {
                    println!("setting {item:?} as seen");
                }
            },
            Has: 0.5 => {
                let item = rand_t(&mut rng);
                let result = set.has(&item);
                if verbosity > 0 {
                    println!("has {item:?} -> {result:?}");
                }
            },
            Filter: 0.3 => {
                let len = rng.gen_range(0..40);
                let batch: Vec<T> = (0..len).map(|_| rand_t(&mut rng)).collect();
                let result = set.filter(batch);
                if verbosity > 0 {
                    println!("filtering -> {result:?}");
                }
            },
            Clear: 0.01 => {
                set.clear();
                if verbosity > 0 {
                    println!("clearing");
                }
            },
            Check: 0.15 => {
                set.check();
            }
        };
    }
    set.check();
}

#[test]
fn test_suite_small_u16() {
    test_suite::<u16, rand_pcg::Pcg64>(|rng| rng.gen_range(0..200));
}

#[test]
fn test_suite_string() {
    test_suite::<String, rand_pcg::Pcg64>(|rng| {
        let len = rng.gen_range(1..4);
        String::from_iter((0..len).map(|_| rng.gen_range('a'..'g')))
    });
}

#[test]
fn test_see_once_until_clear() {
    let mut set: SeenSet<u32> = SeenSet::new();
    for round in 0..3 {
        for value in 0..100 {
            assert!(set.see(value), "round {round}, value {value}");
        }
        for value in 0..100 {
            assert!(!set.see(value));
        }
        set.clear();
    }
}
