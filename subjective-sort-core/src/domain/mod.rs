//! Domain types for manual ordering

pub mod position;
pub mod sortable;

pub use position::Position;
pub use sortable::{HasPosition, Sortable};
