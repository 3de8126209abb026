//! SeaORM entities
//!
//! Database table models. Converted to domain entities by the postgres adapters.

pub mod items;
