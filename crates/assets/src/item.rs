use serde::{Deserialize, Serialize};

use hangar_core::{AssetError, AssetResult, ItemId, LocationId, TypeId};

/// Items per page served by the inventory API. A shorter page is the last one.
pub const PAGE_SIZE: usize = 1000;

/// Placeholder type name used when a type lookup fails.
pub const UNKNOWN_ITEM: &str = "Unknown Item";

/// Location flag of an item sitting in a station hangar.
pub const HANGAR_FLAG: &str = "Hangar";

/// Substring shared by the corporate hangar division flags (`CorpSAG1`..`CorpSAG7`).
pub const CORP_HANGAR_MARKER: &str = "CorpSAG";

/// Substrings of the location flags used for fitted equipment.
pub const FITTED_SLOT_MARKERS: [&str; 5] = ["HiSlot", "MedSlot", "LoSlot", "RigSlot", "SubSystemSlot"];

/// Kind of place an item's `location_id` points at.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationType {
    Station,
    SolarSystem,
    Item,
    #[serde(other)]
    Other,
}

/// Inventory record exactly as the inventory API returns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawItem {
    pub item_id: ItemId,
    pub type_id: TypeId,
    pub location_id: LocationId,
    pub location_flag: String,
    pub location_type: LocationType,
    pub is_singleton: bool,
    #[serde(default = "default_quantity")]
    pub quantity: u64,
}

fn default_quantity() -> u64 {
    1
}

/// One inventory record plus the names resolved for it after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    item_id: ItemId,
    type_id: TypeId,
    location_id: LocationId,
    location_flag: String,
    location_type: LocationType,
    is_singleton: bool,
    quantity: u64,
    name: String,
    type_name: String,
}

impl Item {
    pub fn item_id(&self) -> ItemId {
        self.item_id
    }

    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    pub fn location_id(&self) -> LocationId {
        self.location_id
    }

    pub fn location_flag(&self) -> &str {
        &self.location_flag
    }

    pub fn location_type(&self) -> LocationType {
        self.location_type
    }

    pub fn is_singleton(&self) -> bool {
        self.is_singleton
    }

    pub fn quantity(&self) -> u64 {
        self.quantity
    }

    /// Player-given name; empty when unset or not resolved.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Display name of the item's type; empty until names are resolved.
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_type_name(&mut self, type_name: impl Into<String>) {
        self.type_name = type_name.into();
    }

    /// Summary label: `"{name} ({type_name})"`.
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.type_name)
    }

    /// Whether this item occupies a fitted equipment slot of its parent.
    pub fn is_fitted(&self) -> bool {
        FITTED_SLOT_MARKERS
            .iter()
            .any(|marker| self.location_flag.contains(marker))
    }

    /// Whether this item sits directly in a station hangar.
    pub fn in_station_hangar(&self) -> bool {
        self.location_flag == HANGAR_FLAG && self.location_type == LocationType::Station
    }

    /// Whether this item sits in a corporate hangar division.
    pub fn in_corp_hangar(&self) -> bool {
        self.location_flag.contains(CORP_HANGAR_MARKER)
    }
}

impl From<RawItem> for Item {
    fn from(raw: RawItem) -> Self {
        // Singletons are individually tracked and always count as one unit.
        let quantity = if raw.is_singleton { 1 } else { raw.quantity.max(1) };
        Self {
            item_id: raw.item_id,
            type_id: raw.type_id,
            location_id: raw.location_id,
            location_flag: raw.location_flag,
            location_type: raw.location_type,
            is_singleton: raw.is_singleton,
            quantity,
            name: String::new(),
            type_name: String::new(),
        }
    }
}

/// Parse one page of the inventory API response body.
pub fn parse_page(body: &str) -> AssetResult<Vec<RawItem>> {
    serde_json::from_str(body).map_err(|e| AssetError::malformed(format!("asset page: {e}")))
}

/// Concatenate fetched pages in order, stopping after the first short or empty page.
///
/// Pages handed in after the terminating page are ignored.
pub fn collect_pages<I>(pages: I) -> Vec<RawItem>
where
    I: IntoIterator<Item = Vec<RawItem>>,
{
    let mut out = Vec::new();
    for page in pages {
        let last = page.len() < PAGE_SIZE;
        out.extend(page);
        if last {
            break;
        }
    }
    out
}
