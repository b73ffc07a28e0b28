//! WorkItem domain model.
//!
//! # Responsibility
//! - Define the leaf task record contained by a `Board`.
//! - Provide copy-with-change helpers in place of in-place mutation.
//!
//! # Invariants
//! - `id` is assigned at construction and never reassigned.
//! - `description` defaults to the empty string, `done` to `false`,
//!   both at construction and on deserialization.
//! - A constructed value never changes; every "update" returns a new value.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a work item.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type WorkItemId = Uuid;

/// Leaf task record: identified, named, optionally described, with a
/// completion flag.
///
/// Fields are private so the only way to "change" a value is through the
/// `with_*` helpers, which leave the receiver untouched and return a new
/// record. Equality is structural.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkItem {
    /// Stable global ID, usable as a UI list key.
    id: WorkItemId,
    /// Display name.
    name: String,
    /// Free-form detail text. Empty when the caller supplies none.
    #[serde(default)]
    description: String,
    /// Completion flag.
    #[serde(default)]
    done: bool,
}

impl WorkItem {
    /// Creates a work item with a generated stable ID.
    ///
    /// # Invariants
    /// - `description` starts empty, `done` starts `false`.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), name)
    }

    /// Creates a work item with a caller-provided stable ID.
    ///
    /// Used by import paths where identity already exists externally.
    pub fn with_id(id: WorkItemId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: String::new(),
            done: false,
        }
    }

    pub fn id(&self) -> WorkItemId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn done(&self) -> bool {
        self.done
    }

    /// Returns a copy with a new display name. The ID is preserved.
    pub fn with_name(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self.clone()
        }
    }

    /// Returns a copy with a new description. The ID is preserved.
    pub fn with_description(&self, description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            ..self.clone()
        }
    }

    /// Returns a copy with the completion flag set as given.
    pub fn with_done(&self, done: bool) -> Self {
        Self {
            done,
            ..self.clone()
        }
    }
}
