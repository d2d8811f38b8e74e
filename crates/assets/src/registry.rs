//! Indexed item collection and the location forest built over it.

use std::collections::HashMap;

use hangar_core::{AssetError, AssetResult, ItemId};

use crate::item::{Item, RawItem, collect_pages};

/// All items of one fetch, indexed by id and linked into a forest.
///
/// An item is a subordinate of the item its `location_id` names. Items whose
/// location is not a known item (a station, a solar system, a structure the
/// character cannot see) are roots.
#[derive(Debug, Clone, Default)]
pub struct ItemRegistry {
    items: Vec<Item>,
    index: HashMap<ItemId, usize>,
    parents: Vec<Option<usize>>,
    children: Vec<Vec<usize>>,
    roots: Vec<usize>,
}

impl ItemRegistry {
    /// Build the registry from records in any order.
    ///
    /// Every record is indexed before any is linked, so a child may arrive
    /// before its parent. Fails on a duplicate `item_id` and on items that
    /// are only reachable through a location cycle.
    pub fn build<I>(records: I) -> AssetResult<Self>
    where
        I: IntoIterator<Item = RawItem>,
    {
        let items: Vec<Item> = records.into_iter().map(Item::from).collect();

        // Pass 1: index.
        let mut index = HashMap::with_capacity(items.len());
        for (slot, item) in items.iter().enumerate() {
            if index.insert(item.item_id(), slot).is_some() {
                return Err(AssetError::DuplicateItem(item.item_id()));
            }
        }

        // Pass 2: link.
        let mut parents = vec![None; items.len()];
        let mut children = vec![Vec::new(); items.len()];
        let mut roots = Vec::new();
        for (slot, item) in items.iter().enumerate() {
            match index.get(&item.location_id().as_item_id()) {
                Some(&parent) => {
                    parents[slot] = Some(parent);
                    children[parent].push(slot);
                }
                None => roots.push(slot),
            }
        }

        let registry = Self {
            items,
            index,
            parents,
            children,
            roots,
        };
        registry.ensure_acyclic()?;

        tracing::debug!(
            items = registry.len(),
            roots = registry.roots.len(),
            "built asset registry"
        );

        Ok(registry)
    }

    /// Build from fetched pages, stopping after the first short page.
    pub fn from_pages<I>(pages: I) -> AssetResult<Self>
    where
        I: IntoIterator<Item = Vec<RawItem>>,
    {
        Self::build(collect_pages(pages))
    }

    /// Every item has at most one parent, so anything not reachable from a
    /// root hangs off a cycle.
    fn ensure_acyclic(&self) -> AssetResult<()> {
        let mut seen = vec![false; self.items.len()];
        let mut stack: Vec<usize> = self.roots.clone();
        while let Some(slot) = stack.pop() {
            if seen[slot] {
                continue;
            }
            seen[slot] = true;
            stack.extend(self.children[slot].iter().copied());
        }

        match seen.iter().position(|reached| !reached) {
            Some(slot) => Err(AssetError::CyclicGraph(self.items[slot].item_id())),
            None => Ok(()),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, item_id: ItemId) -> bool {
        self.index.contains_key(&item_id)
    }

    pub fn get(&self, item_id: ItemId) -> Option<&Item> {
        self.index.get(&item_id).map(|&slot| &self.items[slot])
    }

    pub fn get_mut(&mut self, item_id: ItemId) -> Option<&mut Item> {
        self.index.get(&item_id).map(|&slot| &mut self.items[slot])
    }

    /// All items in arrival order.
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    pub fn items_mut(&mut self) -> impl Iterator<Item = &mut Item> {
        self.items.iter_mut()
    }

    /// Items without a known parent, in arrival order.
    pub fn roots(&self) -> impl Iterator<Item = &Item> {
        self.roots.iter().map(|&slot| &self.items[slot])
    }

    pub fn root_count(&self) -> usize {
        self.roots.len()
    }

    pub fn is_root(&self, item_id: ItemId) -> bool {
        self.slot(item_id)
            .is_some_and(|slot| self.parents[slot].is_none())
    }

    /// Direct subordinates of `item_id`; empty for unknown ids.
    pub fn subordinates(&self, item_id: ItemId) -> impl Iterator<Item = &Item> {
        self.slot(item_id)
            .map(|slot| self.children[slot].as_slice())
            .unwrap_or_default()
            .iter()
            .map(|&child| &self.items[child])
    }

    pub fn parent(&self, item_id: ItemId) -> Option<&Item> {
        let slot = self.slot(item_id)?;
        self.parents[slot].map(|parent| &self.items[parent])
    }

    pub(crate) fn slot(&self, item_id: ItemId) -> Option<usize> {
        self.index.get(&item_id).copied()
    }

    pub(crate) fn item_at(&self, slot: usize) -> &Item {
        &self.items[slot]
    }

    pub(crate) fn children_at(&self, slot: usize) -> &[usize] {
        &self.children[slot]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::LocationType;
    use crate::item::fixtures::*;
    use proptest::prelude::*;

    fn ids<'a>(items: impl Iterator<Item = &'a Item>) -> Vec<i64> {
        items.map(|i| i.item_id().get()).collect()
    }

    #[test]
    fn links_children_arriving_before_parent() {
        let records = vec![
            inside(3, 34, 2, "Cargo", 100),
            inside(2, 500, 1, "HiSlot0", 1),
            hull(1, 32880),
        ];
        let registry = ItemRegistry::build(records).unwrap();

        assert_eq!(ids(registry.roots()), vec![1]);
        assert_eq!(ids(registry.subordinates(ItemId::new(1))), vec![2]);
        assert_eq!(ids(registry.subordinates(ItemId::new(2))), vec![3]);
        assert_eq!(
            registry.parent(ItemId::new(3)).map(|p| p.item_id()),
            Some(ItemId::new(2))
        );
        assert!(registry.is_root(ItemId::new(1)));
        assert!(!registry.is_root(ItemId::new(3)));
    }

    #[test]
    fn duplicate_item_id_aborts() {
        let err = ItemRegistry::build(vec![hull(1, 10), hull(1, 11)]).unwrap_err();
        assert_eq!(err, AssetError::DuplicateItem(ItemId::new(1)));
    }

    #[test]
    fn unknown_location_makes_a_root() {
        let orphan = raw(9, 34, 123_456, "Cargo", LocationType::Item);
        let registry = ItemRegistry::build(vec![orphan]).unwrap();
        assert_eq!(ids(registry.roots()), vec![9]);
    }

    #[test]
    fn location_cycle_is_rejected() {
        let records = vec![
            hull(1, 10),
            inside(2, 10, 3, "Cargo", 1),
            inside(3, 10, 2, "Cargo", 1),
        ];
        let err = ItemRegistry::build(records).unwrap_err();
        assert!(matches!(err, AssetError::CyclicGraph(id) if id == ItemId::new(2) || id == ItemId::new(3)));
    }

    #[test]
    fn self_located_item_is_rejected() {
        let err = ItemRegistry::build(vec![inside(5, 10, 5, "Cargo", 1)]).unwrap_err();
        assert_eq!(err, AssetError::CyclicGraph(ItemId::new(5)));
    }

    #[test]
    fn subordinates_of_unknown_id_is_empty() {
        let registry = ItemRegistry::build(vec![hull(1, 10)]).unwrap();
        assert_eq!(registry.subordinates(ItemId::new(99)).count(), 0);
    }

    /// Random forest: item `i` is either a root or sits in an earlier item.
    fn forest() -> impl Strategy<Value = Vec<RawItem>> {
        prop::collection::vec(prop::option::of(any::<prop::sample::Index>()), 1..60).prop_map(|parents| {
            parents
                .iter()
                .enumerate()
                .map(|(i, parent)| {
                    let id = i as i64 + 1;
                    match parent {
                        Some(ix) if i > 0 => inside(id, 34, ix.index(i) as i64 + 1, "Cargo", 1),
                        _ => hull(id, 10),
                    }
                })
                .collect()
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: every record is exactly one root or one subordinate,
        /// whatever the arrival order.
        #[test]
        fn every_record_is_placed_once(
            records in forest().prop_shuffle()
        ) {
            let n = records.len();
            let registry = ItemRegistry::build(records.clone()).unwrap();

            let subordinate_total: usize = registry
                .items()
                .map(|item| registry.subordinates(item.item_id()).count())
                .sum();
            prop_assert_eq!(subordinate_total, n - registry.root_count());

            let mut placed: Vec<i64> = ids(registry.roots());
            for item in registry.items() {
                placed.extend(ids(registry.subordinates(item.item_id())));
            }
            placed.sort_unstable();
            let mut expected: Vec<i64> = records.iter().map(|r| r.item_id.get()).collect();
            expected.sort_unstable();
            prop_assert_eq!(placed, expected);
        }
    }
}
