use super::Position;
use serde::{Deserialize, Serialize};

/// Capability of anything that takes part in manual ordering.
pub trait HasPosition {
    fn position(&self) -> Option<Position>;
    fn set_position(&mut self, position: Option<Position>);
}

/// A bare position slot.
impl HasPosition for Option<Position> {
    fn position(&self) -> Option<Position> {
        *self
    }

    fn set_position(&mut self, position: Option<Position>) {
        *self = position;
    }
}

/// Lets callers reorder references into entities they store elsewhere.
impl<T: HasPosition + ?Sized> HasPosition for &mut T {
    fn position(&self) -> Option<Position> {
        (**self).position()
    }

    fn set_position(&mut self, position: Option<Position>) {
        (**self).set_position(position)
    }
}

/// A value carrying its own manual rank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sortable<T> {
    pub position: Option<Position>,
    pub value: T,
}

impl<T> Sortable<T> {
    /// Create an unpositioned item.
    pub fn new(value: T) -> Self {
        Self { position: None, value }
    }

    /// Create an item at a given rank.
    pub fn at(value: T, position: Position) -> Self {
        Self { position: Some(position), value }
    }
}

impl<T> HasPosition for Sortable<T> {
    fn position(&self) -> Option<Position> {
        self.position
    }

    fn set_position(&mut self, position: Option<Position>) {
        self.position = position;
    }
}
