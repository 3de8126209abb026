//! In-memory adapters
//!
//! Process-local stores. Data lives as long as the server process.

pub mod item_repo;

pub use item_repo::InMemoryItemRepository;
