//! DOM snapshot indexing
//!
//! One-pass traversal of the serialized snapshot tree, resolving a stable
//! selector for every element node. The resulting table is the only state
//! carried into event interpretation.

pub mod indexer;
pub mod selector;

pub use indexer::{SelectorEntry, SelectorTable, SnapshotIndexer};
pub use selector::resolve_selector;
