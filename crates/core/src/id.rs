//! Strongly-typed identifiers from the inventory API.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::AssetError;

/// Identifier of one inventory record. Unique within a fetch.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(i64);

/// Identifier of an item template (e.g. "Tritanium"). Shared by many items.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeId(i64);

/// Where an item is held: another item, a station, a solar system, ...
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocationId(i64);

macro_rules! impl_i64_newtype {
    ($t:ty, $name:literal) => {
        impl $t {
            pub const fn new(raw: i64) -> Self {
                Self(raw)
            }

            pub const fn get(self) -> i64 {
                self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<i64> for $t {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl From<$t> for i64 {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        impl FromStr for $t {
            type Err = AssetError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let raw = s
                    .trim()
                    .parse::<i64>()
                    .map_err(|e| AssetError::invalid_id(format!("{}: {}", $name, e)))?;
                Ok(Self(raw))
            }
        }
    };
}

impl_i64_newtype!(ItemId, "ItemId");
impl_i64_newtype!(TypeId, "TypeId");
impl_i64_newtype!(LocationId, "LocationId");

impl LocationId {
    /// The item this location would refer to if it is held inside another item.
    pub const fn as_item_id(self) -> ItemId {
        ItemId(self.0)
    }
}

impl From<ItemId> for LocationId {
    fn from(value: ItemId) -> Self {
        Self(value.0)
    }
}
