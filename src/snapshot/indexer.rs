//! Snapshot indexing
//!
//! Walks the serialized DOM tree of a full-snapshot event exactly once and
//! builds the node-id → selector table used for event correlation. The table
//! is owned by a single conversion; it is never shared across recordings.

use crate::events::types::{DomNode, EventPayload, RecordedEvent};
use crate::snapshot::selector::resolve_selector;
use std::collections::HashMap;

/// A selector table entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorEntry {
    /// Resolved selector string
    pub selector: String,
    /// False for the bare-tag fallback; codegen flags these for review
    pub reliable: bool,
}

/// Mapping from snapshot node id to its resolved selector.
///
/// Built once per recording, immutable afterwards. Node ids with no entry
/// (text nodes, comments, malformed nodes) are lookup misses that callers
/// must handle explicitly; lookups never panic.
#[derive(Debug, Default)]
pub struct SelectorTable {
    entries: HashMap<i64, SelectorEntry>,
}

impl SelectorTable {
    /// Look up the selector entry for a node id.
    pub fn get(&self, node_id: i64) -> Option<&SelectorEntry> {
        self.entries.get(&node_id)
    }

    /// Number of indexed element nodes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty (no snapshot, or snapshot with no elements).
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Builds a [`SelectorTable`] from the first full snapshot in a recording.
#[derive(Debug, Default)]
pub struct SnapshotIndexer;

impl SnapshotIndexer {
    pub fn new() -> Self {
        Self
    }

    /// Index the first full-snapshot event in the stream.
    ///
    /// A recording with no snapshot (interrupted before the first flush)
    /// yields an empty table; downstream lookups then miss and clicks fall
    /// back to coordinates. That is a valid state, not an error.
    pub fn index(&self, events: &[RecordedEvent]) -> SelectorTable {
        let mut table = SelectorTable::default();

        let snapshot = events.iter().find_map(|e| match &e.payload {
            EventPayload::FullSnapshot { node } => Some(node),
            _ => None,
        });

        match snapshot {
            Some(root) => {
                self.walk(root, &mut table);
                tracing::debug!(elements = table.len(), "indexed snapshot");
            }
            None => {
                tracing::warn!(
                    "recording has no full snapshot; clicks will degrade to coordinates"
                );
            }
        }

        table
    }

    /// Depth-first visit of every node. Traversal order does not affect
    /// correctness since the table is keyed by node id, except that a later
    /// duplicate `id` attribute silently overwrites an earlier one (an
    /// acknowledged limitation of the format).
    fn walk(&self, node: &DomNode, table: &mut SelectorTable) {
        // Container nodes (document, fragment) carry no tag but still have
        // children to descend into; element nodes without a resolvable
        // selector are skipped without aborting the traversal.
        if let Some(resolved) = resolve_selector(node) {
            table.entries.insert(
                node.id,
                SelectorEntry {
                    selector: resolved.selector,
                    reliable: resolved.reliable,
                },
            );
        }

        for child in &node.child_nodes {
            self.walk(child, table);
        }
    }
}
