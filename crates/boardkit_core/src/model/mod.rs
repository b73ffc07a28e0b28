//! Immutable Project/Board/WorkItem containment tree.
//!
//! # Responsibility
//! - Define the three value records consumed by UI and serialization layers.
//! - Keep containment strictly one-way: Project -> Boards -> WorkItems.
//!
//! # Invariants
//! - Every record is immutable once constructed; updates produce new values.
//! - Contained sequences preserve insertion order exactly.
//! - No back-references, no cross-references, no cycles.

pub mod board;
pub mod project;
pub mod work_item;
