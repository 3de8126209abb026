//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (in-memory and PostgreSQL).

use async_trait::async_trait;

use crate::domain::entities::{Item, ItemId, NewItem};
use crate::error::DomainError;

/// Repository for Item entities
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// All items, oldest first
    async fn get_all(&self) -> Result<Vec<Item>, DomainError>;

    /// Find an item by ID
    async fn get_by_id(&self, id: &ItemId) -> Result<Option<Item>, DomainError>;

    /// Create a new item. The store assigns the id and timestamps.
    async fn create(&self, item: &NewItem) -> Result<Item, DomainError>;

    /// Delete an item, returning whether anything was removed
    async fn delete(&self, id: &ItemId) -> Result<bool, DomainError>;

    /// Find an item by exact (case-sensitive) name
    async fn find_by_name(&self, name: &str) -> Result<Option<Item>, DomainError>;
}
