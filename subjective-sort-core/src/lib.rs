//! Subjective Sort Core — manual, user-controlled ordering of items.
//!
//! Items carry an optional 1-based position; unpositioned items sort after
//! every positioned one. This crate contains:
//! - Domain types (`Position`, the `HasPosition` capability, `Sortable<T>`)
//! - Repositioning of one item among its peers with minimal peer rewrites
//! - Whole-collection moves for drag-and-drop reordering
//! - Optional strict validation of stored positions
//!
//! Storage, transactions and concurrency control belong to the caller: persist
//! the subject plus every peer reported as changed, in one transaction.

pub mod collection;
pub mod config;
pub mod domain;
pub mod error;
pub mod reposition;
pub mod validation;

pub use collection::{move_item, move_item_with, MoveOutcome, PositionChange};
pub use config::{PeerValidation, RepositionConfig};
pub use domain::{HasPosition, Position, Sortable};
pub use error::{ConfigError, RepositionError};
pub use reposition::{reposition, reposition_with, sort_by_position};
pub use validation::validate_peers;
