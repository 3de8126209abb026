//! PostgreSQL adapters
//!
//! Implementations of repository traits using SeaORM and PostgreSQL.

pub mod item_repo;


pub use item_repo::PostgresItemRepository;
