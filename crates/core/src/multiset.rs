//! Name-keyed multiset of item quantities.

use std::collections::BTreeMap;
use std::collections::btree_map;

use serde::{Deserialize, Deserializer, Serialize};

use crate::de::unique_keys;

/// Ordered mapping from item display name to a non-negative quantity.
///
/// Keys iterate in lexicographic order. Arithmetic never produces zero
/// entries; a zero read from a document is kept as written so documents
/// survive a load/dump cycle unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Multiset(BTreeMap<String, u64>);

impl<'de> Deserialize<'de> for Multiset {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        unique_keys(deserializer).map(Self)
    }
}

impl Multiset {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Add `quantity` units of `name`.
    pub fn add(&mut self, name: impl Into<String>, quantity: u64) {
        if quantity == 0 {
            return;
        }
        let held = self.0.entry(name.into()).or_insert(0);
        *held = held.saturating_add(quantity);
    }

    /// Set the quantity of `name` exactly, zero included.
    pub fn insert(&mut self, name: impl Into<String>, quantity: u64) {
        self.0.insert(name.into(), quantity);
    }

    /// Quantity held of `name` (0 when absent).
    pub fn get(&self, name: &str) -> u64 {
        self.0.get(name).copied().unwrap_or(0)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Sum of both multisets.
    pub fn union(&self, other: &Multiset) -> Multiset {
        let mut out = self.clone();
        out.union_in_place(other);
        out
    }

    pub fn union_in_place(&mut self, other: &Multiset) {
        for (name, quantity) in other.iter() {
            self.add(name, quantity);
        }
    }

    /// Per-name `max(0, self - other)`; names that end up at zero are absent.
    pub fn difference(&self, other: &Multiset) -> Multiset {
        self.0
            .iter()
            .filter_map(|(name, &quantity)| {
                let left = quantity.saturating_sub(other.get(name));
                (left > 0).then(|| (name.clone(), left))
            })
            .collect()
    }

    /// Sum of all quantities, saturating at `u64::MAX`.
    pub fn total(&self) -> u64 {
        self.0.values().fold(0, |acc, &quantity| acc.saturating_add(quantity))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.0.iter().map(|(name, &quantity)| (name.as_str(), quantity))
    }

    pub fn into_inner(self) -> BTreeMap<String, u64> {
        self.0
    }
}

impl From<BTreeMap<String, u64>> for Multiset {
    fn from(value: BTreeMap<String, u64>) -> Self {
        Self(value)
    }
}

impl FromIterator<(String, u64)> for Multiset {
    fn from_iter<I: IntoIterator<Item = (String, u64)>>(iter: I) -> Self {
        let mut out = Multiset::new();
        out.extend(iter);
        out
    }
}

impl<'a> FromIterator<(&'a str, u64)> for Multiset {
    fn from_iter<I: IntoIterator<Item = (&'a str, u64)>>(iter: I) -> Self {
        iter.into_iter()
            .map(|(name, quantity)| (name.to_string(), quantity))
            .collect()
    }
}

impl Extend<(String, u64)> for Multiset {
    fn extend<I: IntoIterator<Item = (String, u64)>>(&mut self, iter: I) {
        for (name, quantity) in iter {
            self.add(name, quantity);
        }
    }
}

impl IntoIterator for Multiset {
    type Item = (String, u64);
    type IntoIter = btree_map::IntoIter<String, u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
