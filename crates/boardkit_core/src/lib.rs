//! Immutable model layer for project/board/work-item data binding.
//! This crate is the single source of truth for the record shapes.

pub mod logging;
pub mod model;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::board::{Board, BoardId};
pub use model::project::Project;
pub use model::work_item::{WorkItem, WorkItemId};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
