//! Create item use case

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;

use super::UseCase;
use crate::domain::entities::{Item, NewItem};
use crate::domain::ports::ItemRepository;
use crate::error::DomainError;

pub const NAME_MIN_LEN: usize = 3;
pub const NAME_MAX_LEN: usize = 100;
pub const DESCRIPTION_MIN_LEN: usize = 10;
pub const DESCRIPTION_MAX_LEN: usize = 500;

#[derive(Debug, Clone, Default)]
pub struct CreateItemInput {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateItemOutput {
    pub item: Item,
}

pub struct CreateItemUseCase<R>
where
    R: ItemRepository + ?Sized,
{
    items: Arc<R>,
}

impl<R> CreateItemUseCase<R>
where
    R: ItemRepository + ?Sized,
{
    pub fn new(items: Arc<R>) -> Self {
        Self { items }
    }

    /// Reject duplicate names (exact, case-sensitive match)
    async fn check_business_rules(&self, name: &str) -> Result<(), DomainError> {
        if self.items.find_by_name(name).await?.is_some() {
            tracing::warn!(name, "Rejected duplicate item name");
            return Err(DomainError::BusinessRule(
                "An item with this name already exists".to_string(),
            ));
        }
        Ok(())
    }
}

/// Validate and trim the input. The first failing check wins.
fn validate_input(input: &CreateItemInput) -> Result<NewItem, DomainError> {
    let name = input.name.trim();
    let description = input.description.trim();

    if name.is_empty() {
        return Err(DomainError::Validation("Name is required".to_string()));
    }
    if description.is_empty() {
        return Err(DomainError::Validation(
            "Description is required".to_string(),
        ));
    }

    let name_len = name.chars().count();
    if name_len < NAME_MIN_LEN {
        return Err(DomainError::Validation(format!(
            "Name must be at least {} characters long",
            NAME_MIN_LEN
        )));
    }
    if name_len > NAME_MAX_LEN {
        return Err(DomainError::Validation(format!(
            "Name must not exceed {} characters",
            NAME_MAX_LEN
        )));
    }

    let description_len = description.chars().count();
    if description_len < DESCRIPTION_MIN_LEN {
        return Err(DomainError::Validation(format!(
            "Description must be at least {} characters long",
            DESCRIPTION_MIN_LEN
        )));
    }
    if description_len > DESCRIPTION_MAX_LEN {
        return Err(DomainError::Validation(format!(
            "Description must not exceed {} characters",
            DESCRIPTION_MAX_LEN
        )));
    }

    Ok(NewItem {
        name: name.to_string(),
        description: description.to_string(),
    })
}

#[async_trait]
impl<R> UseCase for CreateItemUseCase<R>
where
    R: ItemRepository + ?Sized,
{
    type Input = CreateItemInput;
    type Output = CreateItemOutput;

    async fn execute(&self, input: CreateItemInput) -> Result<CreateItemOutput, DomainError> {
        let new_item = validate_input(&input)?;

        self.check_business_rules(&new_item.name).await?;

        let item = self.items.create(&new_item).await?;
        tracing::debug!(id = %item.id, name = %item.name, "Created item");

        Ok(CreateItemOutput { item })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryItemRepository;
    use crate::test_utils::{test_item_named, FailingItemRepository};

    fn create_use_case(repo: InMemoryItemRepository) -> CreateItemUseCase<InMemoryItemRepository> {
        CreateItemUseCase::new(Arc::new(repo))
    }

    fn input(name: &str, description: &str) -> CreateItemInput {
        CreateItemInput {
            name: name.to_string(),
            description: description.to_string(),
        }
    }

    fn assert_validation(result: Result<CreateItemOutput, DomainError>, expected: &str) {
        match result {
            Err(DomainError::Validation(msg)) => assert_eq!(msg, expected),
            other => panic!("Expected validation error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn create_success_trims_input() {
        let use_case = create_use_case(InMemoryItemRepository::new());

        let output = use_case
            .execute(input("  Widget One  ", "\tA fine widget for testing\n"))
            .await
            .unwrap();

        assert_eq!(output.item.name, "Widget One");
        assert_eq!(output.item.description, "A fine widget for testing");
    }

    #[tokio::test]
    async fn create_accepts_boundary_lengths() {
        let use_case = create_use_case(InMemoryItemRepository::new());

        assert!(use_case.execute(input("abc", &"d".repeat(10))).await.is_ok());
        assert!(use_case
            .execute(input(&"n".repeat(100), &"d".repeat(500)))
            .await
            .is_ok());
    }

    #[tokio::test]
    async fn create_requires_name() {
        let use_case = create_use_case(InMemoryItemRepository::new());
        assert_validation(
            use_case.execute(input("   ", "A fine widget")).await,
            "Name is required",
        );
    }

    #[tokio::test]
    async fn create_requires_description() {
        let use_case = create_use_case(InMemoryItemRepository::new());
        assert_validation(
            use_case.execute(input("Widget", "")).await,
            "Description is required",
        );
    }

    #[tokio::test]
    async fn create_rejects_short_name() {
        let use_case = create_use_case(InMemoryItemRepository::new());
        assert_validation(
            use_case.execute(input(" ab ", "A fine widget")).await,
            "Name must be at least 3 characters long",
        );
    }

    #[tokio::test]
    async fn create_rejects_long_name() {
        let use_case = create_use_case(InMemoryItemRepository::new());
        assert_validation(
            use_case.execute(input(&"n".repeat(101), "A fine widget")).await,
            "Name must not exceed 100 characters",
        );
    }

    #[tokio::test]
    async fn create_rejects_short_description() {
        let use_case = create_use_case(InMemoryItemRepository::new());
        assert_validation(
            use_case.execute(input("Widget", "too short")).await,
            "Description must be at least 10 characters long",
        );
    }

    #[tokio::test]
    async fn create_rejects_long_description() {
        let use_case = create_use_case(InMemoryItemRepository::new());
        assert_validation(
            use_case.execute(input("Widget", &"d".repeat(501))).await,
            "Description must not exceed 500 characters",
        );
    }

    #[tokio::test]
    async fn name_length_is_checked_before_description_length() {
        let use_case = create_use_case(InMemoryItemRepository::new());
        assert_validation(
            use_case.execute(input("ab", "short")).await,
            "Name must be at least 3 characters long",
        );
    }

    #[tokio::test]
    async fn name_length_counts_characters_not_bytes() {
        let use_case = create_use_case(InMemoryItemRepository::new());
        // Three characters, six bytes
        assert!(use_case.execute(input("ééé", "A fine widget")).await.is_ok());
    }

    #[tokio::test]
    async fn create_rejects_duplicate_name() {
        let use_case = create_use_case(InMemoryItemRepository::new());

        use_case
            .execute(input("Widget One", "A fine widget for testing"))
            .await
            .unwrap();
        let result = use_case
            .execute(input(" Widget One ", "Another fine widget"))
            .await;

        assert!(matches!(result, Err(DomainError::BusinessRule(_))));
    }

    #[tokio::test]
    async fn duplicate_check_is_case_sensitive() {
        let use_case =
            create_use_case(InMemoryItemRepository::new().with_item(test_item_named("Widget")));

        assert!(use_case.execute(input("widget", "A fine widget")).await.is_ok());
    }

    #[tokio::test]
    async fn create_surfaces_storage_failure() {
        let use_case = CreateItemUseCase::new(Arc::new(FailingItemRepository));

        let result = use_case.execute(input("Widget", "A fine widget")).await;

        assert!(matches!(result, Err(DomainError::Database(_))));
    }
}
