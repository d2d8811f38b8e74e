//! Captured API responses for one character, read from disk.

use std::collections::HashMap;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use hangar_assets::{ItemName, NameResolver, RawItem, collect_pages};
use hangar_core::{AssetResult, ItemId, TypeId};

/// Everything fetched for one character: asset pages and name lookups.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capture {
    pub character_name: String,
    #[serde(default)]
    pub pages: Vec<Vec<RawItem>>,
    #[serde(default)]
    pub item_names: Vec<ItemName>,
    #[serde(default)]
    pub type_names: HashMap<TypeId, String>,
}

impl Capture {
    pub fn read(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path).with_context(|| format!("reading capture {}", path.display()))?;
        serde_json::from_str(&text).with_context(|| format!("parsing capture {}", path.display()))
    }

    /// Asset records in page order, up to the first short page.
    pub fn records(&self) -> Vec<RawItem> {
        collect_pages(self.pages.iter().cloned())
    }
}

impl NameResolver for Capture {
    fn item_names(&self, item_ids: &[ItemId]) -> AssetResult<Vec<ItemName>> {
        Ok(self
            .item_names
            .iter()
            .filter(|entry| item_ids.contains(&entry.item_id))
            .cloned()
            .collect())
    }

    fn type_name(&self, type_id: TypeId) -> AssetResult<Option<String>> {
        Ok(self.type_names.get(&type_id).cloned())
    }

    fn type_names(&self, type_ids: &[TypeId]) -> HashMap<TypeId, String> {
        type_ids
            .iter()
            .filter_map(|id| self.type_names.get(id).map(|name| (*id, name.clone())))
            .collect()
    }
}
