//! Board domain model.
//!
//! # Responsibility
//! - Define the identified, named container of `WorkItem` records.
//! - Preserve insertion order of contained items exactly.
//!
//! # Invariants
//! - `id` is assigned at construction and never reassigned.
//! - `work_items` keeps insertion order; the model does not deduplicate
//!   by item ID.
//! - `synced` is opaque client-supplied state; no model logic reads it.
//! - A constructed value never changes; every "update" returns a new value.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::work_item::WorkItem;

/// Stable identifier for a board.
pub type BoardId = Uuid;

/// Named, identified container of work items with an opaque sync flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Stable global ID, usable as a UI list key.
    id: BoardId,
    /// Display name.
    name: String,
    /// Opaque synchronization flag owned by the caller. The model stores
    /// and reports it, nothing else.
    synced: bool,
    /// Contained items, in insertion order.
    work_items: Vec<WorkItem>,
}

impl Board {
    /// Creates a board with a generated stable ID.
    pub fn new(name: impl Into<String>, synced: bool, work_items: Vec<WorkItem>) -> Self {
        Self::with_id(Uuid::new_v4(), name, synced, work_items)
    }

    /// Creates a board with a caller-provided stable ID.
    pub fn with_id(
        id: BoardId,
        name: impl Into<String>,
        synced: bool,
        work_items: Vec<WorkItem>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            synced,
            work_items,
        }
    }

    pub fn id(&self) -> BoardId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn synced(&self) -> bool {
        self.synced
    }

    /// Contained items in insertion order.
    pub fn work_items(&self) -> &[WorkItem] {
        &self.work_items
    }

    /// Returns a copy with a new display name. The ID is preserved.
    pub fn with_name(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self.clone()
        }
    }

    /// Returns a copy with the sync flag set as given.
    pub fn with_synced(&self, synced: bool) -> Self {
        Self {
            synced,
            ..self.clone()
        }
    }

    /// Returns a copy whose item sequence is replaced wholesale.
    pub fn with_work_items(&self, work_items: Vec<WorkItem>) -> Self {
        Self {
            work_items,
            ..self.clone()
        }
    }

    /// Returns a copy with `item` appended at the end of the sequence.
    pub fn push_work_item(&self, item: WorkItem) -> Self {
        let mut work_items = self.work_items.clone();
        work_items.push(item);
        Self {
            work_items,
            ..self.clone()
        }
    }
}
