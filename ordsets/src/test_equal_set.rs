#![allow(missing_docs)]
use crate::{util::weighted_choose, EqualSet};
use rand::prelude::*;

/// Values that are equal when they agree modulo 37. There is deliberately no `Hash` or `Ord`.
#[derive(Clone, Copy, Debug)]
struct Residue(u32);

impl PartialEq for Residue {
    fn eq(&self, other: &Self) -> bool {
        self.0 % 37 == other.0 % 37
    }
}

struct CheckedEqualSet {
    dut: EqualSet<Residue>,
    ref_vec: Vec<u32>,
}

impl CheckedEqualSet {
    fn new() -> Self {
        CheckedEqualSet {
            dut: EqualSet::new(),
            ref_vec: Vec::new(),
        }
    }
    fn ref_add(ref_vec: &mut Vec<u32>, value: u32) -> bool {
        if ref_vec.iter().any(|existing| existing % 37 == value % 37) {
            false
        } else {
            ref_vec.push(value);
            true
        }
    }
    fn add(&mut self, value: u32) -> bool {
        let ref_result = Self::ref_add(&mut self.ref_vec, value);
        let dut_result = self.dut.add(Residue(value));
        assert_eq!(ref_result, dut_result);
        ref_result
    }
    fn add_many(&mut self, values: &[u32]) -> usize {
        let ref_result = values
            .iter()
            .filter(|&&value| Self::ref_add(&mut self.ref_vec, value))
            .count();
        let dut_result = self.dut.add_many(values.iter().map(|&value| Residue(value)));
        assert_eq!(ref_result, dut_result);
        ref_result
    }
    fn union(&mut self, values: &[u32]) -> usize {
        let other: EqualSet<Residue> = values.iter().map(|&value| Residue(value)).collect();
        other.check();
        let ref_result = other
            .iter()
            .filter(|other_value| Self::ref_add(&mut self.ref_vec, other_value.0))
            .count();
        let dut_result = self.dut.union(&other);
        assert_eq!(ref_result, dut_result);
        assert_eq!(self.dut.union(&other), 0);
        assert!(other.is_subset(&self.dut));
        ref_result
    }
    fn remove(&mut self, value: u32) -> Option<u32> {
        let ref_result = self
            .ref_vec
            .iter()
            .position(|existing| existing % 37 == value % 37)
            .map(|index| self.ref_vec.remove(index));
        let dut_result = self.dut.remove(&Residue(value)).map(|residue| residue.0);
        assert_eq!(ref_result, dut_result);
        ref_result
    }
    fn contains(&self, value: u32) -> bool {
        let ref_result = self.ref_vec.iter().any(|existing| existing % 37 == value % 37);
        let dut_result = self.dut.contains(&Residue(value));
        assert_eq!(ref_result, dut_result);
        ref_result
    }
    fn check(&self) {
        self.dut.check();
        assert!(self.dut.iter().map(|residue| residue.0).eq(self.ref_vec.iter().copied()));
    }
}

#[test]
fn test_suite() {
    let mut set = CheckedEqualSet::new();
    let mut rng = rand_pcg::Pcg64::seed_from_u64(7);
    let verbosity = 1;
    for _ in 0..3000 {
        weighted_choose! {&mut rng,
            Add: 1.0 => {
                let value = rng.gen_range(0..1000);
                let result = set.add(value);
                if verbosity > 0 {
                    println!("adding {value} -> {result}");
                }
            },
            AddMany: 0.3 => {
                let len = rng.gen_range(0..8);
                let values: Vec<u32> = (0..len).map(|_| rng.gen_range(0..1000)).collect();
                let result = set.add_many(&values);
                if verbosity > 0 {
                    println!("adding {values:?} -> {result}");
                }
            },
            Union: 0.2 => {
                let len = rng.gen_range(0..8);
                let values: Vec<u32> = (0..len).map(|_| rng.gen_range(0..1000)).collect();
                let result = set.union(&values);
                if verbosity > 0 {
                    println!("union with {values:?} -> {result}");
                }
            },
            Remove: 0.8 => {
                let value = rng.gen_range(0..1000);
                let result = set.remove(value);
                if verbosity > 0 {
                    println!("removing {value} -> {result:?}");
                }
            },
            Contains: 0.5 => {
                let value = rng.gen_range(0..1000);
                let result = set.contains(value);
                if verbosity > 0 {
                    println!("contains {value} -> {result}");
                }
            },
            Clear: 0.01 => {
                set.dut.clear();
                set.ref_vec.clear();
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
