//! Board Scenario Tests
//!
//! End-to-end behaviour of the board against an in-memory store.

#[cfg(test)]
mod tests {
    use crate::board::{load, Command, GoalBoard};
    use crate::config::BoardConfig;
    use crate::domain::{GoalError, GoalList};
    use crate::reorder::{drop_position, RowSpan};
    use crate::repository::{MemoryStore, SnapshotStore};
    use crate::snapshot;
    use proptest::prelude::*;

    fn setup_board(texts: &[&str]) -> GoalBoard<MemoryStore> {
        let mut board = GoalBoard::open(MemoryStore::new(), BoardConfig::default());
        for text in texts {
            board.apply(Command::Append(text.to_string())).unwrap();
        }
        board
    }

    fn slot(board: &GoalBoard<MemoryStore>) -> Option<&str> {
        board.store().slot("goals")
    }

    #[test]
    fn test_remove_then_append_persists_each_step() {
        let mut board = setup_board(&["A", "B", "C"]);
        assert_eq!(slot(&board), Some(r#"["A","B","C"]"#));

        board.apply(Command::Remove(1)).unwrap();
        assert_eq!(board.goals().texts(), vec!["A", "C"]);
        assert_eq!(slot(&board), Some(r#"["A","C"]"#));

        board.apply(Command::Append("D".to_string())).unwrap();
        assert_eq!(board.goals().texts(), vec!["A", "C", "D"]);
        assert_eq!(slot(&board), Some(r#"["A","C","D"]"#));
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let board = setup_board(&["Run 5k", "Read a book", "Run 5k"]);
        let reloaded = load(board.store(), "goals");
        assert_eq!(&reloaded, board.goals());
    }

    #[test]
    fn test_reopen_restores_list() {
        let board = setup_board(&["A", "B"]);
        let store = board.store().clone();
        let reopened = GoalBoard::open(store, BoardConfig::default());
        assert_eq!(reopened.goals().texts(), vec!["A", "B"]);
    }

    #[test]
    fn test_export_then_import_round_trip() {
        let board = setup_board(&["A", "B", "C"]);
        let file = board.export().unwrap();

        let mut other = setup_board(&["X"]);
        other.apply(Command::Import(file.contents)).unwrap();
        assert_eq!(other.goals(), board.goals());
        assert_eq!(slot(&other), Some(r#"["A","B","C"]"#));
    }

    #[test]
    fn test_import_non_array_is_rejected() {
        let mut board = setup_board(&["A", "B"]);
        let err = board.apply(Command::Import(r#"{"a":1}"#.to_string())).unwrap_err();
        assert!(matches!(err, GoalError::InvalidFormat { .. }));
        assert_eq!(board.goals().texts(), vec!["A", "B"]);
        assert_eq!(slot(&board), Some(r#"["A","B"]"#));
    }

    #[test]
    fn test_import_malformed_is_rejected() {
        let mut board = setup_board(&["A", "B"]);
        let err = board.apply(Command::Import("{not json".to_string())).unwrap_err();
        assert!(matches!(err, GoalError::Parse(_)));
        assert_eq!(board.goals().texts(), vec!["A", "B"]);
        assert_eq!(slot(&board), Some(r#"["A","B"]"#));
    }

    #[test]
    fn test_import_keeps_text_verbatim() {
        let mut board = setup_board(&["A"]);
        board.apply(Command::Import(r#"["  Run 5k  ","Read"]"#.to_string())).unwrap();
        assert_eq!(board.goals().texts(), vec!["  Run 5k  ", "Read"]);
        assert_eq!(slot(&board), Some(r#"["  Run 5k  ","Read"]"#));

        let reloaded = load(board.store(), "goals");
        assert_eq!(reloaded.texts(), vec!["  Run 5k  ", "Read"]);
    }

    #[test]
    fn test_import_empty_array_clears() {
        let mut board = setup_board(&["A"]);
        board.apply(Command::Import("[]".to_string())).unwrap();
        assert!(board.goals().is_empty());
        assert_eq!(slot(&board), Some("[]"));
    }

    #[test]
    fn test_drag_to_top_and_bottom() {
        let rows = vec![
            RowSpan::new(0.0, 30.0),
            RowSpan::new(30.0, 30.0),
            RowSpan::new(60.0, 30.0),
        ];
        let mut board = setup_board(&["A", "B", "C"]);

        let to = drop_position(2, -10.0, &rows);
        board.apply(Command::Move { from: 2, to }).unwrap();
        assert_eq!(board.goals().texts(), vec!["C", "A", "B"]);
        assert_eq!(slot(&board), Some(r#"["C","A","B"]"#));

        let to = drop_position(0, 200.0, &rows);
        board.apply(Command::Move { from: 0, to }).unwrap();
        assert_eq!(board.goals().texts(), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_out_of_range_commands_are_ignored() {
        let mut board = setup_board(&["A"]);
        board.apply(Command::Remove(4)).unwrap();
        board.apply(Command::Move { from: 4, to: 0 }).unwrap();
        assert_eq!(board.goals().texts(), vec!["A"]);
    }

    #[test]
    fn test_failed_import_leaves_store_untouched() {
        let mut store = MemoryStore::new();
        store.write("goals", r#"["keep"]"#).unwrap();
        let mut board = GoalBoard::open(store, BoardConfig::default());
        assert!(board.apply(Command::Import("42".to_string())).is_err());
        assert_eq!(slot(&board), Some(r#"["keep"]"#));
    }

    proptest! {
        #[test]
        fn prop_append_order_is_preserved(texts in prop::collection::vec("[a-zA-Z0-9]{1,12}", 0..24)) {
            let mut board = GoalBoard::open(MemoryStore::new(), BoardConfig::default());
            for text in &texts {
                board.apply(Command::Append(text.clone())).unwrap();
            }
            let expected: Vec<&str> = texts.iter().map(String::as_str).collect();
            prop_assert_eq!(board.goals().texts(), expected);

            let reloaded: GoalList = load(board.store(), "goals");
            prop_assert_eq!(&reloaded, board.goals());
        }

        #[test]
        fn prop_export_import_reproduces_list(texts in prop::collection::vec("[ -~]{0,16}", 0..16)) {
            let mut board = GoalBoard::open(MemoryStore::new(), BoardConfig::default());
            for text in &texts {
                board.apply(Command::Append(text.clone())).unwrap();
            }
            let file = board.export().unwrap();
            let imported = snapshot::decode(&file.contents).unwrap();
            prop_assert_eq!(&GoalList::from_goals(imported), board.goals());
        }
    }
}
