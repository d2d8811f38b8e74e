//! One character's assets, fetched, linked and named.

use hangar_core::AssetResult;

use crate::item::RawItem;
use crate::names::{NameCache, NameResolver, resolve_names};
use crate::registry::ItemRegistry;
use crate::requirement::{BuyList, BuyMode, ContainerReport, check};
use crate::summary::Summary;

/// Assets of a single character, ready for summarizing and comparison.
///
/// Each instance owns its registry; nothing is shared between characters
/// except what the caller passes in (a [`NameCache`], a [`BuyList`]).
#[derive(Debug, Clone)]
pub struct CharacterAssets {
    character_name: String,
    registry: ItemRegistry,
    summary: Summary,
}

impl CharacterAssets {
    /// Link `records`, resolve names through `resolver` and reduce to a summary.
    pub fn assemble<I, R>(
        character_name: impl Into<String>,
        records: I,
        resolver: &R,
        cache: &mut NameCache,
    ) -> AssetResult<Self>
    where
        I: IntoIterator<Item = RawItem>,
        R: NameResolver + ?Sized,
    {
        let character_name = character_name.into();
        let mut registry = ItemRegistry::build(records)?;
        resolve_names(&mut registry, resolver, cache);
        let summary = Summary::from_registry(&registry);

        tracing::info!(
            character = %character_name,
            items = registry.len(),
            containers = summary.len(),
            "assembled character assets"
        );

        Ok(Self {
            character_name,
            registry,
            summary,
        })
    }

    pub fn character_name(&self) -> &str {
        &self.character_name
    }

    pub fn registry(&self) -> &ItemRegistry {
        &self.registry
    }

    pub fn summary(&self) -> &Summary {
        &self.summary
    }

    /// Per-container discrepancies against `baseline`.
    pub fn check<'a>(&'a self, baseline: &'a Summary) -> impl Iterator<Item = ContainerReport> + 'a {
        check(&self.summary, baseline)
    }

    /// Fold this character's shortfalls into `acc`.
    pub fn buy_list(&self, baseline: &Summary, mode: BuyMode, mut acc: BuyList) -> BuyList {
        acc.accumulate(&self.summary, baseline, mode);
        acc
    }

    /// Summary entries whose label contains `needle`.
    pub fn filter(&self, needle: &str) -> Summary {
        self.summary.filter(needle)
    }
}
