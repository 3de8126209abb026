//! Domain entities
//!
//! Pure domain models representing core business concepts.
//! These are separate from the SeaORM entities in the `entity` module.

pub mod item;

pub use item::{Item, ItemId, NewItem, SortBy, SortOrder};
