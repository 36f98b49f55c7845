//! Strict checks on the positions a peer set arrives with.
//!
//! Repositioning itself tolerates gaps and duplicates and normalizes them.
//! These checks exist for applications that want to detect drift in their
//! stored ordering instead of silently repairing it.

use crate::domain::{HasPosition, Position};
use crate::error::RepositionError;

/// Check that the positioned peers hold exactly the ranks `1..=k`.
///
/// Does not mutate or reorder `peers`. Unpositioned peers are ignored.
pub fn validate_peers<T: HasPosition>(peers: &[T]) -> Result<(), RepositionError> {
    validate_ranks(peers.iter().map(|peer| peer.position()))
}

/// Dense-sequence check over raw positions, `None` entries ignored.
pub(crate) fn validate_ranks<I>(positions: I) -> Result<(), RepositionError>
where
    I: IntoIterator<Item = Option<Position>>,
{
    let mut ranks: Vec<Position> = positions.into_iter().flatten().collect();
    ranks.sort_unstable();

    let mut expected = Position::FIRST;
    let mut previous: Option<Position> = None;
    for rank in ranks {
        if previous == Some(rank) {
            return Err(RepositionError::DuplicatePosition(rank));
        }
        if rank != expected {
            return Err(RepositionError::PositionGap { expected, found: rank });
        }
        previous = Some(rank);
        expected = rank.next();
    }

    Ok(())
}
