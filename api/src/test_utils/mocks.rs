//! Mock implementations of port traits

use async_trait::async_trait;

use crate::domain::entities::{Item, ItemId, NewItem};
use crate::domain::ports::ItemRepository;
use crate::error::DomainError;

// ============================================================================
// Failing Item Repository
// ============================================================================

/// Every call fails as if the database were unreachable
pub struct FailingItemRepository;

fn unreachable_db() -> DomainError {
    DomainError::Database("connection refused".to_string())
}

#[async_trait]
impl ItemRepository for FailingItemRepository {
    async fn get_all(&self) -> Result<Vec<Item>, DomainError> {
        Err(unreachable_db())
    }

    async fn get_by_id(&self, _id: &ItemId) -> Result<Option<Item>, DomainError> {
        Err(unreachable_db())
    }

    async fn create(&self, _item: &NewItem) -> Result<Item, DomainError> {
        Err(unreachable_db())
    }

    async fn delete(&self, _id: &ItemId) -> Result<bool, DomainError> {
        Err(unreachable_db())
    }

    async fn find_by_name(&self, _name: &str) -> Result<Option<Item>, DomainError> {
        Err(unreachable_db())
    }
}

// ============================================================================
// Vanishing Item Repository
// ============================================================================

/// Finds its item, but the item is gone by the time it is deleted.
/// Simulates a concurrent delete between lookup and removal.
pub struct VanishingItemRepository {
    item: Item,
}

impl VanishingItemRepository {
    pub fn new(item: Item) -> Self {
        Self { item }
    }
}

#[async_trait]
impl ItemRepository for VanishingItemRepository {
    async fn get_all(&self) -> Result<Vec<Item>, DomainError> {
        Ok(vec![self.item.clone()])
    }

    async fn get_by_id(&self, id: &ItemId) -> Result<Option<Item>, DomainError> {
        Ok((id == &self.item.id).then(|| self.item.clone()))
    }

    async fn create(&self, _item: &NewItem) -> Result<Item, DomainError> {
        Err(DomainError::Internal("read-only mock".to_string()))
    }

    async fn delete(&self, _id: &ItemId) -> Result<bool, DomainError> {
        Ok(false)
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Item>, DomainError> {
        Ok((name == self.item.name).then(|| self.item.clone()))
    }
}
