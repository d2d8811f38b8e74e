//! Root classification: which items are worth naming and summarizing.

use hangar_core::ItemId;

use crate::item::Item;
use crate::registry::ItemRegistry;

/// How a root item is classified. Both flags may hold at once.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    pub assembled_ship: bool,
    pub top_level_container: bool,
}

impl Classification {
    /// Items of interest get names resolved and appear in summaries.
    pub fn is_of_interest(self) -> bool {
        self.assembled_ship || self.top_level_container
    }
}

/// True iff any direct subordinate sits in a fitted slot.
pub fn is_assembled_ship<'a>(subordinates: impl IntoIterator<Item = &'a Item>) -> bool {
    subordinates.into_iter().any(Item::is_fitted)
}

/// True iff the item sits in a station hangar or a corporate hangar division.
pub fn is_top_level_container(item: &Item) -> bool {
    item.in_station_hangar() || item.in_corp_hangar()
}

impl ItemRegistry {
    /// Classify `item_id`. Non-roots and unknown ids are never of interest.
    pub fn classify(&self, item_id: ItemId) -> Classification {
        let Some(item) = self.get(item_id) else {
            return Classification::default();
        };
        if !self.is_root(item_id) {
            return Classification::default();
        }
        Classification {
            assembled_ship: is_assembled_ship(self.subordinates(item_id)),
            top_level_container: is_top_level_container(item),
        }
    }

    /// Roots that are assembled ships or top-level containers, in arrival order.
    pub fn items_of_interest(&self) -> impl Iterator<Item = &Item> {
        self.roots()
            .filter(|item| self.classify(item.item_id()).is_of_interest())
    }

    /// Roots that are assembled ships, in arrival order.
    pub fn assembled_ships(&self) -> impl Iterator<Item = &Item> {
        self.roots()
            .filter(|item| self.classify(item.item_id()).assembled_ship)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::LocationType;
    use crate::item::fixtures::*;

    #[test]
    fn hangar_root_without_fittings_is_container_not_ship() {
        let registry = ItemRegistry::build(vec![hull(1, 17366), inside(2, 34, 1, "Unlocked", 500)]).unwrap();
        let class = registry.classify(ItemId::new(1));
        assert!(class.top_level_container);
        assert!(!class.assembled_ship);
        assert!(class.is_of_interest());
    }

    #[test]
    fn root_with_high_slot_module_is_assembled_ship() {
        let registry = ItemRegistry::build(vec![hull(1, 32880), inside(2, 3651, 1, "HiSlot0", 1)]).unwrap();
        let class = registry.classify(ItemId::new(1));
        assert!(class.assembled_ship);
        assert_eq!(registry.assembled_ships().count(), 1);
    }

    #[test]
    fn grandchildren_do_not_make_a_ship() {
        let registry = ItemRegistry::build(vec![
            raw(1, 17366, 99, "AssetSafety", LocationType::SolarSystem),
            inside(2, 32880, 1, "Cargo", 1),
            inside(3, 3651, 2, "HiSlot0", 1),
        ])
        .unwrap();
        let class = registry.classify(ItemId::new(1));
        assert!(!class.assembled_ship);
        assert!(!class.top_level_container);
        assert_eq!(registry.items_of_interest().count(), 0);
    }

    #[test]
    fn hangar_flag_in_a_ship_is_not_a_station_hangar() {
        // Ship maintenance bays report items with location_type "item".
        let registry = ItemRegistry::build(vec![raw(1, 17366, 5_000, "Hangar", LocationType::Item)]).unwrap();
        assert!(!registry.classify(ItemId::new(1)).top_level_container);
    }

    #[test]
    fn corporate_division_is_top_level() {
        let registry = ItemRegistry::build(vec![raw(1, 17366, 5_000, "CorpSAG3", LocationType::Item)]).unwrap();
        assert!(registry.classify(ItemId::new(1)).top_level_container);
    }

    #[test]
    fn non_roots_are_never_of_interest() {
        let registry = ItemRegistry::build(vec![
            hull(1, 17366),
            inside(2, 32880, 1, "Unlocked", 1),
            inside(3, 3651, 2, "HiSlot0", 1),
        ])
        .unwrap();
        assert_eq!(registry.classify(ItemId::new(2)), Classification::default());
        let interesting: Vec<_> = registry.items_of_interest().map(|i| i.item_id()).collect();
        assert_eq!(interesting, vec![ItemId::new(1)]);
    }
}
