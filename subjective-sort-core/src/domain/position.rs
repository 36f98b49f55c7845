use crate::error::RepositionError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU32;

/// One-based rank of an item among its peers.
///
/// An item without a rank is represented as `Option::<Position>::None`,
/// never as a zero or negative sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Position(NonZeroU32);

impl Position {
    pub const FIRST: Position = Position(NonZeroU32::MIN);

    /// Validate a caller-supplied rank. Values above `u32::MAX` saturate.
    pub fn new(value: i64) -> Result<Self, RepositionError> {
        if value < 1 {
            return Err(RepositionError::InvalidPosition(value));
        }
        let clamped = u32::try_from(value).unwrap_or(u32::MAX);
        NonZeroU32::new(clamped)
            .map(Self)
            .ok_or(RepositionError::InvalidPosition(value))
    }

    /// Rank of the element at a 0-based slice index.
    pub fn from_index(index: usize) -> Self {
        let offset = u32::try_from(index).unwrap_or(u32::MAX);
        Self(NonZeroU32::MIN.saturating_add(offset))
    }

    pub fn get(self) -> u32 {
        self.0.get()
    }

    /// 0-based slice index this rank corresponds to.
    pub fn index(self) -> usize {
        self.get() as usize - 1
    }

    /// The rank directly after this one.
    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl TryFrom<u32> for Position {
    type Error = RepositionError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        NonZeroU32::new(value)
            .map(Self)
            .ok_or(RepositionError::InvalidPosition(0))
    }
}

impl From<Position> for u32 {
    fn from(position: Position) -> Self {
        position.get()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
