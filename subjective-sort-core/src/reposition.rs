//! Repositioning: move one item to a 1-based rank among its peers.
//!
//! The caller removes the subject from its peer group before calling in,
//! then persists the subject plus every peer handed back. Peers are sorted
//! in place as a side effect, so the slice reflects the new order afterwards.
//!
//! Rules applied to each peer, walking the sorted peers with a 1-based
//! `index_position`:
//! - Clearing the subject: positioned peers collapse to `index_position`,
//!   unpositioned peers are left alone.
//! - Unpositioned peer: promoted to `index_position` only if the subject is
//!   inserted after it, otherwise left alone.
//! - Positioned peer: `index_position` before the insertion point,
//!   `index_position + 1` from the insertion point on.

use crate::config::{PeerValidation, RepositionConfig};
use crate::domain::{HasPosition, Position};
use crate::error::RepositionError;
use crate::validation::validate_ranks;
use std::iter;
use tracing::{debug, warn};

/// A peer whose position was written, by index into the sorted peers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Write {
    pub index: usize,
    pub previous: Option<Position>,
    pub current: Position,
}

/// Stable sort by position, unpositioned items last in their original order.
pub fn sort_by_position<T: HasPosition>(items: &mut [T]) {
    items.sort_by_key(|item| {
        let position = item.position();
        (position.is_none(), position)
    });
}

/// Move `subject` to `target` among `peers` using the default config.
///
/// Returns every peer whose position was written, in sorted order.
pub fn reposition<'a, S, T>(
    subject: &mut S,
    peers: &'a mut [T],
    target: Option<i64>,
) -> Result<Vec<&'a mut T>, RepositionError>
where
    S: HasPosition + ?Sized,
    T: HasPosition,
{
    reposition_with(&RepositionConfig::default(), subject, peers, target)
}

/// Move `subject` to `target` among `peers`.
///
/// Nothing is mutated when this returns an error.
pub fn reposition_with<'a, S, T>(
    config: &RepositionConfig,
    subject: &mut S,
    peers: &'a mut [T],
    target: Option<i64>,
) -> Result<Vec<&'a mut T>, RepositionError>
where
    S: HasPosition + ?Sized,
    T: HasPosition,
{
    let target = prepare(config, subject.position(), peers, target)?;
    subject.set_position(target);
    let writes = apply(target, peers);

    let mut written = writes.iter().map(|w| w.index).peekable();
    let affected = peers
        .iter_mut()
        .enumerate()
        .filter_map(|(index, peer)| {
            if written.peek() == Some(&index) {
                written.next();
                Some(peer)
            } else {
                None
            }
        })
        .collect();

    Ok(affected)
}

/// Validate and clamp a requested rank. Performs no mutation.
///
/// Strict validation covers the whole stored ordering: the peers plus the
/// rank the subject currently holds.
pub(crate) fn prepare<T: HasPosition>(
    config: &RepositionConfig,
    current: Option<Position>,
    peers: &[T],
    target: Option<i64>,
) -> Result<Option<Position>, RepositionError> {
    let target = target.map(Position::new).transpose()?;

    if config.peer_validation == PeerValidation::Strict {
        let stored = peers.iter().map(|peer| peer.position()).chain(iter::once(current));
        validate_ranks(stored).map_err(|err| {
            warn!(error = %err, peers = peers.len(), "rejected peer set");
            err
        })?;
    }

    let max_position = Position::from_index(peers.len());
    Ok(target.map(|requested| {
        if requested > max_position {
            debug!(%requested, %max_position, "clamped target position");
            max_position
        } else {
            requested
        }
    }))
}

/// Sort `peers` and rewrite their positions around an already-resolved target.
pub(crate) fn apply<T: HasPosition>(target: Option<Position>, peers: &mut [T]) -> Vec<Write> {
    sort_by_position(peers);

    let mut writes = Vec::new();
    for (index, peer) in peers.iter_mut().enumerate() {
        let index_position = Position::from_index(index);
        let previous = peer.position();

        let current = match (target, previous) {
            (None, None) => continue,
            (None, Some(_)) => index_position,
            (Some(target), None) if target <= index_position => continue,
            (Some(_), None) => index_position,
            (Some(target), Some(_)) if index_position < target => index_position,
            (Some(_), Some(_)) => index_position.next(),
        };

        peer.set_position(Some(current));
        writes.push(Write { index, previous, current });
    }

    debug!(
        position = ?target.map(Position::get),
        peers = peers.len(),
        affected = writes.len(),
        "repositioned subject"
    );

    writes
}
