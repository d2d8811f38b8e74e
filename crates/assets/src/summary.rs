//! Container label → contents snapshot.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use serde::{Deserialize, Deserializer, Serialize};

use hangar_core::{ItemId, Multiset, unique_keys};

use crate::registry::ItemRegistry;

/// Mapping from a container label (`"{name} ({type_name})"`) to its contents.
///
/// This is both the saved "current state" and the shape of a requirement
/// baseline. Labels and item names iterate in lexicographic order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Summary(BTreeMap<String, Multiset>);

/// Repeated labels are an error, not last-one-wins.
impl<'de> Deserialize<'de> for Summary {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        unique_keys(deserializer).map(Self)
    }
}

impl Summary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reduce the items of interest of `registry` to one entry per label.
    ///
    /// Two containers sharing a label are not merged: the one holding more
    /// units wins and the other is dropped. Equal totals go to the smaller
    /// item id so the result does not depend on arrival order.
    pub fn from_registry(registry: &ItemRegistry) -> Self {
        let mut chosen: BTreeMap<String, (ItemId, Multiset)> = BTreeMap::new();

        for item in registry.items_of_interest() {
            let counts = registry.item_counts(item.item_id());
            match chosen.entry(item.label()) {
                Entry::Vacant(slot) => {
                    slot.insert((item.item_id(), counts));
                }
                Entry::Occupied(mut slot) => {
                    let (held_id, held) = slot.get();
                    let wins = counts.total() > held.total()
                        || (counts.total() == held.total() && item.item_id() < *held_id);
                    let (kept, dropped) = if wins {
                        (item.item_id(), *held_id)
                    } else {
                        (*held_id, item.item_id())
                    };
                    tracing::debug!(label = %slot.key(), %kept, %dropped, "container label collision");
                    if wins {
                        slot.insert((item.item_id(), counts));
                    }
                }
            }
        }

        Self(
            chosen
                .into_iter()
                .map(|(label, (_, counts))| (label, counts))
                .collect(),
        )
    }

    pub fn insert(&mut self, label: impl Into<String>, contents: Multiset) -> Option<Multiset> {
        self.0.insert(label.into(), contents)
    }

    pub fn get(&self, label: &str) -> Option<&Multiset> {
        self.0.get(label)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.0.contains_key(label)
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Multiset)> {
        self.0.iter().map(|(label, contents)| (label.as_str(), contents))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Entries whose label contains `needle`.
    ///
    /// Used to copy one ship's current loadout into a baseline.
    pub fn filter(&self, needle: &str) -> Summary {
        Self(
            self.0
                .iter()
                .filter(|(label, _)| label.contains(needle))
                .map(|(label, contents)| (label.clone(), contents.clone()))
                .collect(),
        )
    }
}

impl FromIterator<(String, Multiset)> for Summary {
    fn from_iter<I: IntoIterator<Item = (String, Multiset)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Summary {
    type Item = (String, Multiset);
    type IntoIter = std::collections::btree_map::IntoIter<String, Multiset>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
