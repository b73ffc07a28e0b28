//! Project domain model.
//!
//! # Responsibility
//! - Define the top-level named container of `Board` records.
//! - Preserve insertion order of contained boards exactly.
//!
//! # Invariants
//! - A project is identified by name only; it carries no ID field.
//! - `boards` keeps insertion order.
//! - A constructed value never changes; every "update" returns a new value.

use serde::{Deserialize, Serialize};

use crate::model::board::Board;

/// Top-level named container of boards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Display name. The only identity a project has.
    name: String,
    /// Contained boards, in insertion order.
    boards: Vec<Board>,
}

impl Project {
    pub fn new(name: impl Into<String>, boards: Vec<Board>) -> Self {
        Self {
            name: name.into(),
            boards,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Contained boards in insertion order.
    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    /// Returns a copy with a new display name.
    pub fn with_name(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self.clone()
        }
    }

    /// Returns a copy whose board sequence is replaced wholesale.
    pub fn with_boards(&self, boards: Vec<Board>) -> Self {
        Self {
            boards,
            ..self.clone()
        }
    }

    /// Returns a copy with `board` appended at the end of the sequence.
    pub fn push_board(&self, board: Board) -> Self {
        let mut boards = self.boards.clone();
        boards.push(board);
        Self {
            boards,
            ..self.clone()
        }
    }
}
