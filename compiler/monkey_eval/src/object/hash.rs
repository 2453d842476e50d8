//! Hash values.
//!
//! A key is stored twice: as a [`HashKey`] in the lookup index and as the
//! original [`Object`] in the entry, so inspection can print it back.
//! Entries keep insertion order; inserting an existing key replaces the
//! value in place.

use std::fmt;
use std::rc::Rc;

use rustc_hash::FxHashMap;

use super::Object;

/// Normalized key of a hashable value.
///
/// Equal content gives equal keys regardless of which `Object` instance
/// produced them. Keys of different types never compare equal.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum HashKey {
    Integer(i64),
    Boolean(bool),
    String(Rc<str>),
}

/// One stored entry: the key as written plus its value.
#[derive(Clone, Debug, PartialEq)]
pub struct HashPair {
    pub key: Object,
    pub value: Object,
}

/// An insertion-ordered map from hashable objects to values.
#[derive(Clone, Debug, Default)]
pub struct HashObject {
    entries: Vec<HashPair>,
    index: FxHashMap<HashKey, usize>,
}

impl HashObject {
    pub fn with_capacity(capacity: usize) -> Self {
        HashObject {
            entries: Vec::with_capacity(capacity),
            index: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Insert or replace the entry for `hash_key`.
    pub fn insert(&mut self, hash_key: HashKey, key: Object, value: Object) {
        if let Some(&slot) = self.index.get(&hash_key) {
            self.entries[slot] = HashPair { key, value };
        } else {
            self.index.insert(hash_key, self.entries.len());
            self.entries.push(HashPair { key, value });
        }
    }

    pub fn get(&self, hash_key: &HashKey) -> Option<&HashPair> {
        self.index.get(hash_key).map(|&slot| &self.entries[slot])
    }

    /// Entries in insertion order.
    pub fn pairs(&self) -> impl Iterator<Item = &HashPair> {
        self.entries.iter()
    }
}

impl PartialEq for HashObject {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl fmt::Display for HashObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, pair) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: {}", pair.key, pair.value)?;
        }
        f.write_str("}")
    }
}
