//! Asset aggregation and requirement comparison engine.
//!
//! Flat inventory records are linked into a location forest, the roots worth
//! tracking (assembled ships, hangar containers) are named and reduced to a
//! [`Summary`], and summaries are compared against a requirement baseline.
//! Everything here is synchronous and free of IO except the document file
//! helpers.

pub mod classify;
pub mod counter;
pub mod document;
pub mod item;
pub mod names;
pub mod registry;
pub mod requirement;
pub mod snapshot;
pub mod summary;

pub use classify::Classification;
pub use document::{dump, load, load_baseline, save_summary};
pub use item::{Item, LocationType, PAGE_SIZE, RawItem, UNKNOWN_ITEM, collect_pages, parse_page};
pub use names::{ItemName, NameCache, NameResolver, NameStats, resolve_names};
pub use registry::ItemRegistry;
pub use requirement::{BuyList, BuyMode, ContainerReport, Shortfall, buy_list, check};
pub use snapshot::CharacterAssets;
pub use summary::Summary;

pub use hangar_core::{AssetError, AssetResult, ItemId, LocationId, Multiset, TypeId};
