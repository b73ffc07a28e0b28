use boardkit_core::{Board, Project, WorkItem};

#[test]
fn new_keeps_supplied_fields() {
    let project = Project::new("Demo", vec![]);

    assert_eq!(project.name(), "Demo");
    assert!(project.boards().is_empty());
}

#[test]
fn boards_preserve_insertion_order() {
    let first = Board::new("Backlog", false, vec![]);
    let second = Board::new("Sprint 1", true, vec![]);
    let project = Project::new("Demo", vec![first.clone(), second.clone()]);

    assert_eq!(project.boards(), &[first, second]);
}

#[test]
fn push_board_leaves_original_project_unchanged() {
    let empty = Project::new("Demo", vec![]);
    let board = Board::new("Sprint 1", false, vec![]);

    let one = empty.push_board(board.clone());

    assert!(empty.boards().is_empty());
    assert_eq!(one.boards(), &[board]);
    assert_ne!(empty, one);
}

#[test]
fn with_name_keeps_boards() {
    let project = Project::new("Demo", vec![Board::new("Sprint 1", false, vec![])]);
    let renamed = project.with_name("Demo v2");

    assert_eq!(project.name(), "Demo");
    assert_eq!(renamed.name(), "Demo v2");
    assert_eq!(renamed.boards(), project.boards());
}

#[test]
fn nested_tree_round_trips_losslessly() {
    let item = WorkItem::new("Write spec").with_done(true);
    let board = Board::new("Sprint 1", false, vec![item]);
    let project = Project::new("Demo", vec![board]);

    let json = serde_json::to_value(&project).unwrap();
    assert_eq!(json["name"], "Demo");
    assert_eq!(json["boards"][0]["work_items"][0]["done"], true);

    let decoded: Project = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, project);
}
