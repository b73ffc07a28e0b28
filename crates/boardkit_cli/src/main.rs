//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `boardkit_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use boardkit_core::{Board, Project, WorkItem};

fn main() {
    println!("boardkit_core ping={}", boardkit_core::ping());
    println!("boardkit_core version={}", boardkit_core::core_version());

    let board = Board::new("Sprint 1", false, vec![WorkItem::new("Write spec")]);
    let project = Project::new("Demo", vec![board]);
    println!(
        "sample project={} boards={} work_items={}",
        project.name(),
        project.boards().len(),
        project
            .boards()
            .iter()
            .map(|board| board.work_items().len())
            .sum::<usize>()
    );
}
