//! Name resolution seam and the per-fetch type name cache.

use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

use hangar_core::{AssetResult, ItemId, TypeId};

use crate::item::UNKNOWN_ITEM;
use crate::registry::ItemRegistry;

/// A player-given name as returned by the naming collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemName {
    pub item_id: ItemId,
    pub name: String,
}

/// Collaborator that knows display names for items and types.
///
/// Implementations own transport concerns (batching, retries, rate limits).
/// Every failure is recovered by the engine with a placeholder.
pub trait NameResolver {
    /// Player-given names for the requested items. Ids without a name may be omitted.
    fn item_names(&self, item_ids: &[ItemId]) -> AssetResult<Vec<ItemName>>;

    /// Display name of one type, `None` when the type is unknown.
    fn type_name(&self, type_id: TypeId) -> AssetResult<Option<String>>;

    /// Display names for many types. Unknown or failing ids are left out.
    ///
    /// The default asks for one id at a time; batched backends should override it.
    fn type_names(&self, type_ids: &[TypeId]) -> HashMap<TypeId, String> {
        let mut out = HashMap::with_capacity(type_ids.len());
        for &type_id in type_ids {
            match self.type_name(type_id) {
                Ok(Some(name)) => {
                    out.insert(type_id, name);
                }
                Ok(None) => {}
                Err(err) => tracing::warn!(%type_id, error = %err, "type name lookup failed"),
            }
        }
        out
    }
}

impl<R: NameResolver + ?Sized> NameResolver for &R {
    fn item_names(&self, item_ids: &[ItemId]) -> AssetResult<Vec<ItemName>> {
        (**self).item_names(item_ids)
    }

    fn type_name(&self, type_id: TypeId) -> AssetResult<Option<String>> {
        (**self).type_name(type_id)
    }

    fn type_names(&self, type_ids: &[TypeId]) -> HashMap<TypeId, String> {
        (**self).type_names(type_ids)
    }
}

/// Type names resolved during one fetch cycle.
///
/// Created by the caller and dropped with the fetch. Only successful lookups
/// are kept: one resolver's miss must not shadow a name another resolver
/// sharing the cache can supply.
#[derive(Debug, Clone, Default)]
pub struct NameCache {
    type_names: HashMap<TypeId, String>,
}

impl NameCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn type_name(&self, type_id: TypeId) -> Option<&str> {
        self.type_names.get(&type_id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.type_names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.type_names.is_empty()
    }

    /// Ask `resolver` for every id not cached yet. Misses stay uncached.
    fn fill<R: NameResolver + ?Sized>(&mut self, resolver: &R, type_ids: &BTreeSet<TypeId>) {
        let missing: Vec<TypeId> = type_ids
            .iter()
            .copied()
            .filter(|id| !self.type_names.contains_key(id))
            .collect();
        if missing.is_empty() {
            return;
        }

        for (type_id, name) in resolver.type_names(&missing) {
            if missing.contains(&type_id) {
                self.type_names.insert(type_id, name);
            }
        }
    }
}

/// Outcome counters of one [`resolve_names`] pass.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct NameStats {
    pub types_unknown: usize,
    pub names_requested: usize,
    pub names_resolved: usize,
}

/// Attach type names to every item and player-given names to items of interest.
pub fn resolve_names<R>(registry: &mut ItemRegistry, resolver: &R, cache: &mut NameCache) -> NameStats
where
    R: NameResolver + ?Sized,
{
    let mut stats = NameStats::default();

    let type_ids: BTreeSet<TypeId> = registry.items().map(|item| item.type_id()).collect();
    cache.fill(resolver, &type_ids);
    for item in registry.items_mut() {
        let name = cache.type_name(item.type_id()).unwrap_or(UNKNOWN_ITEM);
        if name == UNKNOWN_ITEM {
            stats.types_unknown += 1;
        }
        item.set_type_name(name);
    }

    let wanted: Vec<ItemId> = registry.items_of_interest().map(|item| item.item_id()).collect();
    stats.names_requested = wanted.len();
    if !wanted.is_empty() {
        match resolver.item_names(&wanted) {
            Ok(names) => {
                for ItemName { item_id, name } in names {
                    if let Some(item) = registry.get_mut(item_id) {
                        item.set_name(unescape(&name));
                        stats.names_resolved += 1;
                    }
                }
            }
            Err(err) => {
                tracing::warn!(requested = wanted.len(), error = %err, "item name lookup failed");
            }
        }
    }

    tracing::debug!(
        types_unknown = stats.types_unknown,
        names_requested = stats.names_requested,
        names_resolved = stats.names_resolved,
        "resolved asset names"
    );
    stats
}

/// Undo the HTML escaping the inventory API applies to player-given names.
pub fn unescape(name: &str) -> String {
    name.replace("&gt;", ">")
        .replace("&lt;", "<")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}
