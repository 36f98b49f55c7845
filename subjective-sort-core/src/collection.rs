//! Drag-and-drop moves within a whole collection.
//!
//! `move_item` takes the full list (subject included), pulls the subject out,
//! repositions it among the rest and puts it back, leaving the list sorted by
//! position. The returned [`MoveOutcome`] lists every write with final indices,
//! ready to hand to a persistence layer.

use crate::config::RepositionConfig;
use crate::domain::{HasPosition, Position};
use crate::error::RepositionError;
use crate::reposition::{apply, prepare};
use serde::{Deserialize, Serialize};
use std::iter;
use tracing::debug;

/// One position write, addressed by the item's index after the move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionChange {
    pub index: usize,
    pub previous: Option<Position>,
    pub current: Option<Position>,
}

impl PositionChange {
    /// True when the write left the stored value as it was.
    pub fn is_noop(&self) -> bool {
        self.previous == self.current
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    pub subject: PositionChange,
    pub peers: Vec<PositionChange>,
}

impl MoveOutcome {
    /// Changes that actually alter a stored value, subject first.
    pub fn effective(&self) -> impl Iterator<Item = &PositionChange> {
        iter::once(&self.subject)
            .chain(self.peers.iter())
            .filter(|change| !change.is_noop())
    }
}

/// Move `items[index]` to rank `target` using the default config.
pub fn move_item<T: HasPosition>(
    items: &mut Vec<T>,
    index: usize,
    target: Option<i64>,
) -> Result<MoveOutcome, RepositionError> {
    move_item_with(&RepositionConfig::default(), items, index, target)
}

/// Move `items[index]` to rank `target`; `None` clears its position.
///
/// On error `items` is left exactly as it was.
pub fn move_item_with<T: HasPosition>(
    config: &RepositionConfig,
    items: &mut Vec<T>,
    index: usize,
    target: Option<i64>,
) -> Result<MoveOutcome, RepositionError> {
    let len = items.len();
    if index >= len {
        return Err(RepositionError::IndexOutOfBounds { index, len });
    }

    let mut subject = items.remove(index);
    let target = match prepare(config, subject.position(), items, target) {
        Ok(target) => target,
        Err(err) => {
            items.insert(index, subject);
            return Err(err);
        }
    };

    let previous = subject.position();
    subject.set_position(target);
    let writes = apply(target, items);

    let slot = target.map_or(items.len(), Position::index);
    items.insert(slot, subject);

    let peers = writes
        .into_iter()
        .map(|write| PositionChange {
            index: if write.index < slot { write.index } else { write.index + 1 },
            previous: write.previous,
            current: Some(write.current),
        })
        .collect();

    debug!(from = index, to = slot, "moved item");

    Ok(MoveOutcome {
        subject: PositionChange { index: slot, previous, current: target },
        peers,
    })
}
