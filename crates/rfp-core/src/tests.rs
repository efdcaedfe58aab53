//! Scenario Tests
//!
//! Whole-session flows over the builtin seed data.

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use crate::{
        dashboard_metrics, Advance, BoardState, CardId, ClientDirectory, ClientDraft, ColumnId,
        FieldKey, MoveOutcome, Notice, NoticeLevel, Notifier, Seed, WizardState,
    };

    #[derive(Default)]
    struct Toasts(RefCell<Vec<Notice>>);

    impl Notifier for Toasts {
        fn announce(&self, notice: Notice) {
            self.0.borrow_mut().push(notice);
        }
    }

    fn setup_board() -> BoardState {
        let seed = Seed::builtin().expect("Failed to load seed");
        BoardState::new(seed.board)
    }

    fn column_ids(state: &BoardState, column: ColumnId) -> Vec<String> {
        state.column(column).cards.iter().map(|c| c.id.to_string()).collect()
    }

    #[test]
    fn test_every_move_preserves_card_count() {
        let mut state = setup_board();
        let total = state.total_cards();

        // walk every card through every column
        for card in ["rfp-1", "rfp-2", "rfp-3", "rfp-4", "rfp-5", "rfp-6"] {
            let id = CardId::from(card);
            for target in ColumnId::ALL {
                let (source, _) = state.find_card(&id).expect("card vanished");
                state.begin_drag(id.clone(), source);
                state.drop_on(target);
                assert_eq!(state.total_cards(), total);
                assert_eq!(state.find_card(&id).map(|(col, _)| col), Some(target));
            }
        }
        assert!(state.drag().is_none());
    }

    #[test]
    fn test_drag_to_won_then_table_status() {
        let mut state = setup_board();
        state.begin_drag("rfp-3".into(), ColumnId::InProgress);
        assert_eq!(state.drop_on(ColumnId::Won), MoveOutcome::Moved);

        assert!(state.column(ColumnId::InProgress).cards.is_empty());
        assert_eq!(column_ids(&state, ColumnId::Won), vec!["rfp-5", "rfp-3"]);

        let row = state.rows().into_iter().find(|r| r.id.as_str() == "rfp-3").unwrap();
        assert_eq!(row.status, ColumnId::Won);
        assert_eq!(row.status.display_name(), "Won");
    }

    #[test]
    fn test_emptying_every_column_but_one() {
        let mut state = setup_board();
        for card in ["rfp-1", "rfp-2", "rfp-3", "rfp-4", "rfp-5"] {
            let id = CardId::from(card);
            let (source, _) = state.find_card(&id).unwrap();
            state.move_card(&id, source, ColumnId::Lost);
        }
        assert_eq!(state.columns().count(), 5);
        assert_eq!(state.column(ColumnId::Lost).cards.len(), 6);
        // original lost card stays first, the rest keep the move order
        assert_eq!(column_ids(&state, ColumnId::Lost)[0], "rfp-6");
    }

    #[test]
    fn test_metrics_follow_the_board() {
        let seed = Seed::builtin().unwrap();
        let mut state = BoardState::new(seed.board);
        let before = dashboard_metrics(state.board(), seed.clients.len(), &seed.analytics.metric_trends);
        assert_eq!(before[0].value, "4");
        assert_eq!(before[1].value, "50%");

        state.move_card(&"rfp-1".into(), ColumnId::New, ColumnId::Won);
        let after = dashboard_metrics(state.board(), seed.clients.len(), &seed.analytics.metric_trends);
        assert_eq!(after[0].value, "3");
        assert_eq!(after[1].value, "67%");
    }

    #[test]
    fn test_full_wizard_session() {
        let mut wizard = WizardState::rfp();
        let toasts = Toasts::default();

        wizard.set_value(FieldKey::Title, "Test");
        wizard.set_value(FieldKey::ClientName, "Acme");
        wizard.set_value(FieldKey::DueDate, "2024-09-15");
        assert!(matches!(wizard.advance(), Advance::Blocked(_)));
        assert_eq!(wizard.step_index(), 0);

        wizard.set_value(FieldKey::Title, "Testt");
        assert_eq!(wizard.advance(), Advance::Moved(1));

        wizard.set_value(FieldKey::Requirements, "PDF, two copies, by Friday");
        wizard.set_value(FieldKey::Notes, "Ask Dana about pricing");
        assert_eq!(wizard.advance(), Advance::Moved(2));

        let submission = wizard.submit(&toasts).expect("valid submission");
        assert_eq!(submission.values.get(FieldKey::Notes), "Ask Dana about pricing");
        assert_eq!(&submission.values, wizard.values());

        let notices = toasts.0.borrow();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].level, NoticeLevel::Success);
    }

    #[test]
    fn test_empty_required_field_blocks_submit() {
        let mut wizard = WizardState::rfp();
        let toasts = Toasts::default();

        wizard.set_value(FieldKey::Title, "Testt");
        wizard.set_value(FieldKey::ClientName, "Acme");
        wizard.set_value(FieldKey::DueDate, "2024-09-15");
        wizard.advance();
        wizard.set_value(FieldKey::Requirements, "Detailed list of requirements");
        wizard.advance();

        // clear a field from the review step's perspective
        wizard.set_value(FieldKey::Requirements, "");
        assert!(wizard.submit(&toasts).is_err());
        assert_eq!(wizard.error(FieldKey::Requirements), Some("Please outline submission requirements"));
        assert!(toasts.0.borrow().iter().all(|n| n.level == NoticeLevel::Failure));
    }

    #[test]
    fn test_client_directory_from_seed() {
        let seed = Seed::builtin().unwrap();
        let mut directory = ClientDirectory::new(seed.clients);
        let client = directory
            .add(ClientDraft {
                company_name: "Initech".to_string(),
                contact_person: "Bill Lumbergh".to_string(),
                email: "bill@initech.com".to_string(),
                phone: String::new(),
            })
            .unwrap();
        assert_eq!(client.id, "CLI005");
        assert_eq!(directory.len(), 5);
    }
}
