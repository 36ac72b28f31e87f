use memento::{History, Signal};
use std::sync::mpsc;

const S1: &str = "s1";
const S2: &str = "s2";
const S3: &str = "s3";
const S4: &str = "s4";

#[test]
fn undo_then_redo() {
    let mut history = History::new();
    history.push(S1);
    history.push(S2);
    assert_eq!(history.undo(), Some(&S1));
    assert_eq!(history.redo(), Some(&S2));
    assert_eq!(history.redo(), None);
    assert_eq!(history.current(), Some(&S2));
    assert_eq!(history.cursor(), Some(1));
}

#[test]
fn push_discards_redo() {
    let mut history = History::new();
    history.push(S1);
    history.push(S2);
    history.push(S3);
    history.undo();
    history.undo();
    history.push(S4);
    assert!(!history.can_redo());
    assert_eq!(history.redo(), None);
    assert_eq!(history.current(), Some(&S4));
    assert_eq!(history.snapshots().collect::<Vec<_>>(), [&S1, &S4]);
}

#[test]
fn undo_at_floor() {
    let mut history = History::<&str>::new();
    assert!(!history.can_undo());
    assert_eq!(history.undo(), None);
    assert_eq!(history.cursor(), None);

    history.push(S1);
    assert!(!history.can_undo());
    assert_eq!(history.undo(), None);
    assert!(!history.can_undo());
    assert_eq!(history.current(), Some(&S1));
}

#[test]
fn can_undo_and_redo() {
    let mut history = History::new();
    history.push(S1);
    history.push(S2);
    history.push(S3);
    assert!(history.can_undo());
    assert!(!history.can_redo());
    history.undo();
    assert!(history.can_undo());
    assert!(history.can_redo());
    history.undo();
    assert!(!history.can_undo());
    assert!(history.can_redo());
}

#[test]
fn go_to() {
    let mut history = History::new();
    history.push(S1);
    history.push(S2);
    history.push(S3);
    history.push(S4);

    assert_eq!(history.go_to(0), Some(&S1));
    assert_eq!(history.cursor(), Some(0));
    assert_eq!(history.go_to(3), Some(&S4));
    assert_eq!(history.go_to(2), Some(&S3));
    assert_eq!(history.go_to(4), None);
    assert_eq!(history.cursor(), Some(2));

    history.go_to(1);
    history.push(S1);
    assert_eq!(history.snapshots().collect::<Vec<_>>(), [&S1, &S2, &S1]);
}

#[test]
fn signals() {
    let (sender, receiver) = mpsc::channel();
    let mut iter = receiver.try_iter();
    let mut history = History::builder().connect(sender).build();

    history.push(S1);
    history.push(S2);
    history.push(S3);
    assert_eq!(
        iter.by_ref().collect::<Vec<_>>(),
        [
            Signal::Cursor(0),
            Signal::Undo(true),
            Signal::Cursor(1),
            Signal::Cursor(2),
        ]
    );

    history.undo();
    history.undo();
    assert_eq!(
        iter.by_ref().collect::<Vec<_>>(),
        [
            Signal::Redo(true),
            Signal::Cursor(1),
            Signal::Undo(false),
            Signal::Cursor(0),
        ]
    );

    history.push(S4);
    assert_eq!(
        iter.by_ref().collect::<Vec<_>>(),
        [Signal::Redo(false), Signal::Undo(true), Signal::Cursor(1)]
    );

    history.go_to(0);
    assert_eq!(
        iter.by_ref().collect::<Vec<_>>(),
        [Signal::Undo(false), Signal::Redo(true), Signal::Cursor(0)]
    );

    history.clear();
    assert_eq!(iter.by_ref().collect::<Vec<_>>(), [Signal::Redo(false)]);
}

#[test]
fn connect_closure() {
    let mut count = 0;
    {
        let mut history = History::builder()
            .connect(|_: Signal| count += 1)
            .build();
        history.push(S1);
        history.push(S2);
        history.undo();
    }
    assert_eq!(count, 6);
}

#[test]
fn display() {
    let mut history = History::new();
    history.push("Glass");
    history.push("Tempered Glass");
    history.push("Steel");
    history.undo();

    let mut display = history.display();
    display.detailed(false);
    #[cfg(feature = "colored")]
    let _ = display.colored(false);
    assert_eq!(
        display.to_string(),
        "* 2 Steel\n* 1 [HEAD] Tempered Glass\n* 0 Glass\n"
    );

    display.head(false);
    assert_eq!(display.to_string(), "* 2 Steel\n* 1 Tempered Glass\n* 0 Glass\n");
}

#[cfg(feature = "chrono")]
#[test]
fn time_travel() {
    use chrono::{Duration, Utc};

    let before = Utc::now() - Duration::seconds(1);
    let mut history = History::new();
    history.push(S1);
    history.push(S2);
    history.push(S3);
    let timestamps = history.entries().map(|e| e.timestamp()).collect::<Vec<_>>();

    assert_eq!(history.time_travel(&before), None);
    assert_eq!(history.cursor(), Some(2));
    assert!(history.time_travel(&timestamps[0]).is_some());
    assert_eq!(
        history.time_travel(&(Utc::now() + Duration::seconds(1))),
        Some(&S3)
    );
}

#[cfg(feature = "serde")]
mod serialization {
    use memento::{BoundedUndoStack, History, MaterialState};
    use serde_json::Value;

    fn glass_history() -> History<MaterialState> {
        let mut history = History::new();
        history.push(MaterialState::new("Glass", 2.5, "Clear", true));
        history.push(MaterialState::new("Tempered Glass", 2.5, "Clear", true));
        history.push(MaterialState::new("Tempered Glass", 2.8, "Clear", true));
        history.undo();
        history
    }

    fn with_field(history: &History<MaterialState>, field: &str, value: Value) -> Value {
        let mut json = serde_json::to_value(history).unwrap();
        json[field] = value;
        json
    }

    #[test]
    fn round_trip() {
        let history = glass_history();
        let json = serde_json::to_string(&history).unwrap();
        let mut restored: History<MaterialState> = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.len(), 3);
        assert_eq!(restored.cursor(), Some(1));
        assert_eq!(restored.current(), history.current());
        assert!(restored.can_undo());
        assert!(restored.can_redo());
        assert_eq!(
            restored.redo().map(MaterialState::density),
            Some(2.8)
        );

        restored.undo();
        restored.push(MaterialState::new("Steel", 7.8, "Grey", false));
        assert!(!restored.can_redo());
        assert_eq!(restored.len(), 3);
    }

    #[test]
    fn round_trip_limited() {
        let mut history = History::builder().limit(2).build();
        history.push(1);
        history.push(2);
        let json = serde_json::to_string(&history).unwrap();
        let mut restored: History<u32> = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.limit(), 2);
        restored.push(3);
        assert_eq!(restored.snapshots().copied().collect::<Vec<_>>(), [2, 3]);
    }

    #[test]
    fn reject_cursor_past_the_end() {
        let json = with_field(&glass_history(), "index", Value::from(4));
        let err = serde_json::from_value::<History<MaterialState>>(json).unwrap_err();
        assert!(err.to_string().contains("out of range"));
    }

    #[test]
    fn reject_missing_cursor() {
        let json = with_field(&glass_history(), "index", Value::from(0));
        let err = serde_json::from_value::<History<MaterialState>>(json).unwrap_err();
        assert!(err.to_string().contains("no cursor"));
    }

    #[test]
    fn reject_more_snapshots_than_limit() {
        let json = with_field(&glass_history(), "limit", Value::from(2));
        let err = serde_json::from_value::<History<MaterialState>>(json).unwrap_err();
        assert!(err.to_string().contains("exceed the limit"));
    }

    #[test]
    fn empty_history_round_trip() {
        let history = History::<u32>::new();
        let json = serde_json::to_string(&history).unwrap();
        let restored: History<u32> = serde_json::from_str(&json).unwrap();
        assert!(restored.is_empty());
        assert_eq!(restored.cursor(), None);
    }

    #[test]
    fn bounded_stack_round_trip() {
        let mut stack: BoundedUndoStack<MaterialState, 2> = BoundedUndoStack::new();
        stack.push(MaterialState::new("Glass", 2.5, "Clear", true));
        stack.push(MaterialState::new("Tempered Glass", 2.5, "Clear", true));
        let json = serde_json::to_string(&stack).unwrap();
        let mut restored: BoundedUndoStack<MaterialState, 2> = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.len(), 2);
        assert_eq!(
            restored.undo(),
            Some(MaterialState::new("Tempered Glass", 2.5, "Clear", true))
        );
    }

    #[test]
    fn signal_round_trip() {
        let signal = memento::Signal::Cursor(3);
        let json = serde_json::to_string(&signal).unwrap();
        assert_eq!(serde_json::from_str::<memento::Signal>(&json).unwrap(), signal);
    }
}
