use super::*;
use crate::effects::transitions::Direction;

#[test]
fn insert_if_absent_keeps_first() {
    let mut table = TransitionTable::new();
    assert!(table.insert_if_absent(transition("a", "b", 1.0, TransitionKind::Fade)));
    assert!(!table.insert_if_absent(transition("a", "b", 2.0, TransitionKind::Blur)));
    assert_eq!(table.len(), 1);
    let t = table.get("a", "b").unwrap();
    assert_eq!(t.duration, 1.0);
    assert_eq!(t.kind, TransitionKind::Fade);
}

#[test]
fn upsert_keeps_last_and_position() {
    let mut table = TransitionTable::new();
    table.upsert(transition("a", "b", 1.0, TransitionKind::Fade));
    table.upsert(transition("b", "c", 1.0, TransitionKind::Fade));
    table.upsert(transition("a", "b", 2.5, TransitionKind::Slide(Direction::Left)));

    let pairs: Vec<_> = table.iter().map(|t| (t.from.as_str(), t.to.as_str())).collect();
    assert_eq!(pairs, vec![("a", "b"), ("b", "c")]);
    assert_eq!(table.duration_between("a", "b"), Some(2.5));
    assert_eq!(
        table.get("a", "b").unwrap().kind,
        TransitionKind::Slide(Direction::Left)
    );
}

#[test]
fn pairs_are_directional() {
    let mut table = TransitionTable::new();
    table.insert_if_absent(transition("a", "b", 1.0, TransitionKind::Fade));
    assert!(table.get("b", "a").is_none());
    assert!(table.insert_if_absent(transition("b", "a", 1.0, TransitionKind::Fade)));
    assert_eq!(table.into_vec().len(), 2);
}
