//! Unit tests for qs-client.

#[cfg(test)]
mod mood_tests {
    use crate::Mood;

    #[test]
    fn thresholds() {
        assert_eq!(Mood::from_patience(10), Mood::Calm);
        assert_eq!(Mood::from_patience(5), Mood::Calm);
        assert_eq!(Mood::from_patience(4), Mood::Neutral);
        assert_eq!(Mood::from_patience(3), Mood::Neutral);
        assert_eq!(Mood::from_patience(2), Mood::Agitated);
        assert_eq!(Mood::from_patience(0), Mood::Agitated);
        assert_eq!(Mood::from_patience(-3), Mood::Agitated);
    }

    #[test]
    fn ordinal_order() {
        assert!(Mood::Agitated < Mood::Neutral);
        assert!(Mood::Neutral < Mood::Calm);
    }

    #[test]
    fn display() {
        assert_eq!(Mood::Calm.to_string(), "calm");
        assert_eq!(Mood::Agitated.to_string(), "agitated");
    }
}

#[cfg(test)]
mod client_tests {
    use qs_core::{ClientId, Point};

    use crate::{Client, ExitDirection, Mood};

    fn waiting(patience: i32) -> Client {
        Client::new(ClientId(1), patience, Point::new(900, 200), 50)
    }

    #[test]
    fn decrement_stops_at_minimum() {
        let mut c = waiting(i32::MIN + 1);
        c.decrement_patience();
        assert_eq!(c.patience(), i32::MIN);
        c.decrement_patience();
        assert_eq!(c.patience(), i32::MIN);
    }

    #[test]
    fn new_client_is_waiting() {
        let c = waiting(7);
        assert!(!c.is_exiting());
        assert_eq!(c.exit_direction(), None);
        assert_eq!(c.target_x(), 50);
        assert!(!c.at_target());
    }

    #[test]
    fn mood_follows_patience() {
        let mut c = waiting(5);
        assert_eq!(c.mood(), Mood::Calm);
        c.decrement_patience();
        assert_eq!(c.mood(), Mood::Neutral);
        c.clear_patience();
        assert_eq!(c.patience(), 0);
        assert_eq!(c.mood(), Mood::Agitated);
    }

    #[test]
    fn exit_latch_is_one_way() {
        let mut c = waiting(5);
        assert!(c.begin_exit(ExitDirection::Up, 1_000));
        assert_eq!(c.exit_direction(), Some(ExitDirection::Up));
        assert_eq!(c.target_x(), 1_000);

        // Second attempt leaves direction and target untouched.
        assert!(!c.begin_exit(ExitDirection::Down, 2_000));
        assert_eq!(c.exit_direction(), Some(ExitDirection::Up));
        assert_eq!(c.target_x(), 1_000);
    }

    #[test]
    fn exiting_client_ignores_slot_assignment() {
        let mut c = waiting(5);
        assert!(c.assign_slot(130));
        assert_eq!(c.target_x(), 130);

        c.begin_exit(ExitDirection::Down, 1_000);
        assert!(!c.assign_slot(50));
        assert_eq!(c.target_x(), 1_000);
    }

    #[test]
    fn move_by_shifts_both_axes() {
        let mut c = waiting(5);
        c.move_by(-17, 2);
        assert_eq!(c.position(), Point::new(883, 202));
    }

    #[test]
    fn view_copies_state() {
        let mut c = waiting(3);
        c.begin_exit(ExitDirection::Down, 1_000);
        let v = c.view();
        assert_eq!(v.id, ClientId(1));
        assert_eq!(v.position, Point::new(900, 200));
        assert_eq!(v.patience, 3);
        assert_eq!(v.mood, Mood::Neutral);
        assert_eq!(v.exit, Some(ExitDirection::Down));
        assert!(v.is_exiting());
    }

    #[test]
    fn direction_signs() {
        assert_eq!(ExitDirection::Up.vertical_sign(), -1);
        assert_eq!(ExitDirection::Down.vertical_sign(), 1);
    }
}
