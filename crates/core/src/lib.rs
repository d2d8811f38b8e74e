//! `hangar-core` — building blocks shared by the asset engine.
//!
//! This crate contains **pure** primitives (no IO): typed identifiers, the
//! quantity multiset and the error taxonomy.

pub mod de;
pub mod error;
pub mod id;
pub mod multiset;

pub use de::unique_keys;
pub use error::{AssetError, AssetResult};
pub use id::{ItemId, LocationId, TypeId};
pub use multiset::Multiset;
