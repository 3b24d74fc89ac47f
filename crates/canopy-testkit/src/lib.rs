//! Strategy and fixture helpers for canopy property tests.
//!
//! Keeping these in a microcrate avoids copy-paste across the tree crates'
//! test suites. Keys are drawn from a deliberately small range so generated
//! scripts revisit keys often, exercising the duplicate-insert and
//! missing-remove paths as well as the happy ones.

use std::collections::BTreeMap;

use proptest::prelude::*;

/// One scripted tree mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Insert(i64),
    Remove(i64),
}

const KEY_RANGE: std::ops::Range<i64> = 0..64;

/// Strategy over key vectors (possibly with repeats).
pub fn strategy_keys(max_len: usize) -> impl Strategy<Value = Vec<i64>> {
    proptest::collection::vec(KEY_RANGE, 0..=max_len)
}

/// Strategy over a single insert-or-remove operation.
pub fn strategy_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        KEY_RANGE.prop_map(Op::Insert),
        KEY_RANGE.prop_map(Op::Remove),
    ]
}

/// Strategy over operation scripts.
pub fn strategy_ops(max_len: usize) -> impl Strategy<Value = Vec<Op>> {
    proptest::collection::vec(strategy_op(), 0..=max_len)
}

/// A `BTreeMap`-backed oracle with the same contract as the AVL tree:
/// insert rejects a present key, remove fails on an absent one.
#[derive(Debug, Default, Clone)]
pub struct ReferenceModel {
    entries: BTreeMap<i64, i64>,
}

impl ReferenceModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether the insert was accepted.
    pub fn insert(&mut self, key: i64, value: i64) -> bool {
        if self.entries.contains_key(&key) {
            false
        } else {
            self.entries.insert(key, value);
            true
        }
    }

    /// Returns whether the key was present.
    pub fn remove(&mut self, key: &i64) -> bool {
        self.entries.remove(key).is_some()
    }

    pub fn get(&self, key: &i64) -> Option<&i64> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in key order.
    pub fn entries(&self) -> impl Iterator<Item = (&i64, &i64)> {
        self.entries.iter()
    }
}
