//! Get item by id use case

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;

use super::UseCase;
use crate::domain::entities::{Item, ItemId};
use crate::domain::ports::ItemRepository;
use crate::error::DomainError;

#[derive(Debug, Clone)]
pub struct GetItemByIdInput {
    pub id: ItemId,
}

#[derive(Debug, Clone, Serialize)]
pub struct GetItemByIdOutput {
    pub item: Item,
}

pub struct GetItemByIdUseCase<R>
where
    R: ItemRepository + ?Sized,
{
    items: Arc<R>,
}

impl<R> GetItemByIdUseCase<R>
where
    R: ItemRepository + ?Sized,
{
    pub fn new(items: Arc<R>) -> Self {
        Self { items }
    }
}

#[async_trait]
impl<R> UseCase for GetItemByIdUseCase<R>
where
    R: ItemRepository + ?Sized,
{
    type Input = GetItemByIdInput;
    type Output = GetItemByIdOutput;

    async fn execute(&self, input: GetItemByIdInput) -> Result<GetItemByIdOutput, DomainError> {
        if input.id.is_blank() {
            return Err(DomainError::NotFound("Item ID is required".to_string()));
        }

        let item = self
            .items
            .get_by_id(&input.id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("Item with ID {} not found", input.id)))?;

        Ok(GetItemByIdOutput { item })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryItemRepository;
    use crate::app::{CreateItemInput, CreateItemUseCase};
    use crate::test_utils::FailingItemRepository;

    #[tokio::test]
    async fn get_unknown_id_is_not_found() {
        let use_case = GetItemByIdUseCase::new(Arc::new(InMemoryItemRepository::new()));

        let result = use_case
            .execute(GetItemByIdInput {
                id: ItemId::from("never-created"),
            })
            .await;

        match result {
            Err(DomainError::NotFound(msg)) => {
                assert_eq!(msg, "Item with ID never-created not found")
            }
            other => panic!("Expected not found, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn get_blank_id_is_not_found() {
        let use_case = GetItemByIdUseCase::new(Arc::new(InMemoryItemRepository::new()));

        let result = use_case
            .execute(GetItemByIdInput {
                id: ItemId::from(""),
            })
            .await;

        assert!(matches!(result, Err(DomainError::NotFound(_))));
    }

    #[tokio::test]
    async fn get_returns_created_item() {
        let repo = Arc::new(InMemoryItemRepository::new());
        let create = CreateItemUseCase::new(repo.clone());
        let get = GetItemByIdUseCase::new(repo);

        let created = create
            .execute(CreateItemInput {
                name: "Widget".to_string(),
                description: "A fine widget".to_string(),
            })
            .await
            .unwrap()
            .item;
        let found = get
            .execute(GetItemByIdInput {
                id: created.id.clone(),
            })
            .await
            .unwrap()
            .item;

        assert_eq!(found, created);
    }

    #[tokio::test]
    async fn get_surfaces_storage_failure() {
        let use_case = GetItemByIdUseCase::new(Arc::new(FailingItemRepository));

        let result = use_case
            .execute(GetItemByIdInput {
                id: ItemId::from("1"),
            })
            .await;

        assert!(matches!(result, Err(DomainError::Database(_))));
    }
}
