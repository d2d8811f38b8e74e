//! Recursive content counts.

use hangar_core::{ItemId, Multiset};

use crate::registry::ItemRegistry;

impl ItemRegistry {
    /// Type name → quantity over every subordinate of `item_id`, at any depth.
    ///
    /// Each subordinate counts once as itself; its own contents are added on
    /// top. The item itself is not counted. Unknown ids yield an empty set.
    pub fn item_counts(&self, item_id: ItemId) -> Multiset {
        let mut counts = Multiset::new();
        let Some(slot) = self.slot(item_id) else {
            return counts;
        };

        // Explicit stack; nesting depth is bounded by the data, not the call stack.
        let mut pending: Vec<usize> = self.children_at(slot).to_vec();
        while let Some(child) = pending.pop() {
            let item = self.item_at(child);
            counts.add(item.type_name(), item.quantity());
            pending.extend_from_slice(self.children_at(child));
        }
        counts
    }

    /// Sum of all quantities in [`ItemRegistry::item_counts`].
    pub fn total_item_count(&self, item_id: ItemId) -> u64 {
        self.item_counts(item_id).total()
    }
}
