//! Engine error model.

use thiserror::Error;

use crate::id::ItemId;

/// Result type used across the asset engine.
pub type AssetResult<T> = Result<T, AssetError>;

/// Asset engine error.
///
/// Aggregation-stage faults (`DuplicateItem`, `CyclicGraph`) abort building a
/// registry. Baseline-stage faults (`MissingBaseline`, `MalformedDocument`)
/// are handed back to the caller untouched. `Lookup` is produced by name
/// resolvers; the engine itself always recovers from it with a placeholder.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AssetError {
    /// The same item id appeared twice in one fetch.
    #[error("duplicate item id {0} in asset listing")]
    DuplicateItem(ItemId),

    /// The item is only reachable through a location cycle.
    #[error("cyclic asset graph: item {0} is its own ancestor")]
    CyclicGraph(ItemId),

    /// No baseline document exists at the given location.
    #[error("no baseline set ({0})")]
    MissingBaseline(String),

    /// A summary or baseline document could not be parsed.
    #[error("malformed document: {0}")]
    MalformedDocument(String),

    /// A name lookup failed.
    #[error("lookup failed: {0}")]
    Lookup(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// Reading or writing a document failed for a reason other than absence.
    #[error("io error: {0}")]
    Io(String),
}

impl AssetError {
    pub fn missing_baseline(location: impl Into<String>) -> Self {
        Self::MissingBaseline(location.into())
    }

    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedDocument(msg.into())
    }

    pub fn lookup(msg: impl Into<String>) -> Self {
        Self::Lookup(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn io(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }

    /// True for faults that belong to the baseline stage.
    pub fn is_baseline_fault(&self) -> bool {
        matches!(self, Self::MissingBaseline(_) | Self::MalformedDocument(_))
    }
}
