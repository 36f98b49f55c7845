//! Property tests for repositioning invariants.
//!
//! Uses proptest to verify:
//! 1. Sorting — positioned before unpositioned, non-decreasing, stable
//! 2. Rejection — a target below one mutates nothing
//! 3. Clamping — oversized targets behave like `len + 1`
//! 4. Idempotence — repeating a reposition changes nothing further
//! 5. Uniqueness — no two items share a position after a reposition,
//!    including a ranked subject pulled out of a dense list
//! 6. Collection moves — the list stays sorted and the subject lands on its rank

use proptest::prelude::*;
use subjective_sort_core::{
    move_item, reposition, sort_by_position, HasPosition, Position, RepositionError, Sortable,
};

type Item = Sortable<usize>;

// ── Strategies (proptest) ────────────────────────────────────────────

/// Raw positions with gaps, duplicates and unpositioned slots mixed in.
fn arb_position() -> impl Strategy<Value = Option<Position>> {
    prop_oneof![
        1 => Just(None),
        3 => (1u32..12).prop_map(|n| Some(Position::new(i64::from(n)).unwrap())),
    ]
}

/// Peers tagged with their input index so stability can be checked.
fn arb_peers() -> impl Strategy<Value = Vec<Item>> {
    prop::collection::vec(arb_position(), 0..16).prop_map(|positions| {
        positions
            .into_iter()
            .enumerate()
            .map(|(value, position)| Sortable { position, value })
            .collect()
    })
}

fn snapshot(items: &[Item]) -> Vec<(usize, Option<Position>)> {
    items.iter().map(|s| (s.value, s.position)).collect()
}

// ── 1. Sorting ───────────────────────────────────────────────────────

proptest! {
    #[test]
    fn sort_orders_positioned_first_and_is_stable(mut items in arb_peers()) {
        sort_by_position(&mut items);

        let first_unpositioned = items.iter().position(|s| s.position.is_none()).unwrap_or(items.len());
        prop_assert!(items[first_unpositioned..].iter().all(|s| s.position.is_none()));

        for pair in items.windows(2) {
            match (pair[0].position, pair[1].position) {
                (Some(a), Some(b)) => {
                    prop_assert!(a <= b);
                    if a == b {
                        prop_assert!(pair[0].value < pair[1].value);
                    }
                }
                (None, None) => prop_assert!(pair[0].value < pair[1].value),
                (Some(_), None) => {}
                (None, Some(_)) => prop_assert!(false, "unpositioned item before positioned"),
            }
        }
    }
}

// ── 2. Rejection ─────────────────────────────────────────────────────

proptest! {
    #[test]
    fn target_below_one_mutates_nothing(
        mut peers in arb_peers(),
        subject_position in arb_position(),
        target in -50i64..1,
    ) {
        let before = snapshot(&peers);
        let mut subject = Sortable { position: subject_position, value: usize::MAX };

        let result = reposition(&mut subject, &mut peers, Some(target));

        prop_assert_eq!(result.unwrap_err(), RepositionError::InvalidPosition(target));
        prop_assert_eq!(subject.position, subject_position);
        prop_assert_eq!(snapshot(&peers), before);
    }
}

// ── 3. Clamping ──────────────────────────────────────────────────────

proptest! {
    #[test]
    fn oversized_target_matches_append(
        peers in arb_peers(),
        subject_position in arb_position(),
        excess in 1i64..100,
    ) {
        let max = peers.len() as i64 + 1;

        let mut clamped_peers = peers.clone();
        let mut clamped = Sortable { position: subject_position, value: usize::MAX };
        let clamped_affected = reposition(&mut clamped, &mut clamped_peers, Some(max + excess))
            .unwrap()
            .len();

        let mut appended_peers = peers;
        let mut appended = Sortable { position: subject_position, value: usize::MAX };
        let appended_affected = reposition(&mut appended, &mut appended_peers, Some(max))
            .unwrap()
            .len();

        prop_assert_eq!(clamped.position, appended.position);
        prop_assert_eq!(clamped_affected, appended_affected);
        prop_assert_eq!(snapshot(&clamped_peers), snapshot(&appended_peers));
    }
}

// ── 4. Idempotence ───────────────────────────────────────────────────

proptest! {
    #[test]
    fn repeating_a_reposition_is_stable(
        mut peers in arb_peers(),
        subject_position in arb_position(),
        target in prop::option::of(1i64..20),
    ) {
        let mut subject = Sortable { position: subject_position, value: usize::MAX };

        reposition(&mut subject, &mut peers, target).unwrap();
        let once = (subject.position, snapshot(&peers));

        sort_by_position(&mut peers);
        reposition(&mut subject, &mut peers, target).unwrap();
        let twice = (subject.position, snapshot(&peers));

        prop_assert_eq!(once, twice);
    }
}

// ── 5. Uniqueness ────────────────────────────────────────────────────

proptest! {
    #[test]
    fn positions_are_unique_afterwards(
        mut peers in arb_peers(),
        subject_position in arb_position(),
        target in prop::option::of(1i64..20),
    ) {
        let len = peers.len();
        let mut subject = Sortable { position: subject_position, value: usize::MAX };

        reposition(&mut subject, &mut peers, target).unwrap();

        if let Some(requested) = target {
            let expected = requested.min(len as i64 + 1);
            prop_assert_eq!(subject.position(), Some(Position::new(expected).unwrap()));
        } else {
            prop_assert_eq!(subject.position(), None);
        }

        let mut ranks: Vec<Position> = peers
            .iter()
            .filter_map(|s| s.position())
            .chain(subject.position())
            .collect();
        let total = ranks.len();
        ranks.sort();
        ranks.dedup();
        prop_assert_eq!(ranks.len(), total);
    }
}

proptest! {
    /// A ranked subject taken out of a dense list leaves a gap in its peers;
    /// repositioning it anywhere yields a dense list again.
    #[test]
    fn ranked_subject_from_dense_list_restores_density(
        len in 1usize..16,
        index_seed in any::<prop::sample::Index>(),
        target in 1i64..20,
    ) {
        let mut peers: Vec<Item> = (0..len).map(|i| Sortable::at(i, Position::from_index(i))).collect();
        let mut subject = peers.remove(index_seed.index(len));

        reposition(&mut subject, &mut peers, Some(target)).unwrap();

        let mut ranks: Vec<u32> = peers
            .iter()
            .chain(std::iter::once(&subject))
            .filter_map(|s| s.position().map(Position::get))
            .collect();
        ranks.sort_unstable();
        let expected: Vec<u32> = (1..=len as u32).collect();
        prop_assert_eq!(ranks, expected);
    }
}

// ── 6. Collection moves ──────────────────────────────────────────────

proptest! {
    #[test]
    fn move_item_keeps_collection_sorted(
        mut items in arb_peers().prop_filter("non-empty", |v| !v.is_empty()),
        index_seed in any::<prop::sample::Index>(),
        target in prop::option::of(1i64..20),
    ) {
        let index = index_seed.index(items.len());
        let moved = items[index].value;

        let outcome = move_item(&mut items, index, target).unwrap();

        prop_assert_eq!(items[outcome.subject.index].value, moved);
        prop_assert_eq!(items[outcome.subject.index].position, outcome.subject.current);
        for change in &outcome.peers {
            prop_assert_eq!(items[change.index].position, change.current);
        }

        let mut resorted = items.clone();
        sort_by_position(&mut resorted);
        prop_assert_eq!(snapshot(&resorted), snapshot(&items));
    }
}
