//! In-memory adapter for ItemRepository

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::domain::entities::{Item, ItemId, NewItem};
use crate::domain::ports::ItemRepository;
use crate::error::DomainError;

/// In-memory implementation of ItemRepository
///
/// Items are kept in insertion order, which is also creation order.
#[derive(Default)]
pub struct InMemoryItemRepository {
    items: RwLock<Vec<Item>>,
}

impl InMemoryItemRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with an item
    pub fn with_item(mut self, item: Item) -> Self {
        self.items.get_mut().push(item);
        self
    }

    /// Pre-populate with the two sample items shown on a fresh install
    pub fn with_sample_items(self) -> Self {
        let now = Utc::now();
        self.with_item(Item {
            id: ItemId::new(),
            name: "Sample Item 1".to_string(),
            description: "This is a sample item from the backend".to_string(),
            created_at: now,
            updated_at: None,
        })
        .with_item(Item {
            id: ItemId::new(),
            name: "Sample Item 2".to_string(),
            description: "Another sample item".to_string(),
            created_at: now,
            updated_at: None,
        })
    }
}

#[async_trait]
impl ItemRepository for InMemoryItemRepository {
    async fn get_all(&self) -> Result<Vec<Item>, DomainError> {
        Ok(self.items.read().await.clone())
    }

    async fn get_by_id(&self, id: &ItemId) -> Result<Option<Item>, DomainError> {
        let items = self.items.read().await;
        Ok(items.iter().find(|i| &i.id == id).cloned())
    }

    async fn create(&self, new_item: &NewItem) -> Result<Item, DomainError> {
        let item = Item {
            id: ItemId::new(),
            name: new_item.name.clone(),
            description: new_item.description.clone(),
            created_at: Utc::now(),
            updated_at: None,
        };

        self.items.write().await.push(item.clone());

        Ok(item)
    }

    async fn delete(&self, id: &ItemId) -> Result<bool, DomainError> {
        let mut items = self.items.write().await;
        match items.iter().position(|i| &i.id == id) {
            Some(index) => {
                items.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Item>, DomainError> {
        let items = self.items.read().await;
        Ok(items.iter().find(|i| i.name == name).cloned())
    }
}
