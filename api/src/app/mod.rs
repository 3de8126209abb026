//! Application layer
//!
//! Contains the item use cases. Each use case validates its input, checks
//! business rules and calls the repository port, returning failures as
//! `DomainError` values rather than panicking.

pub mod create_item;
pub mod delete_item;
pub mod get_all_items;
pub mod get_item_by_id;

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::ItemRepository;
use crate::error::DomainError;

pub use create_item::{CreateItemInput, CreateItemOutput, CreateItemUseCase};
pub use delete_item::{DeleteItemInput, DeleteItemOutput, DeleteItemUseCase, DeletionRules};
pub use get_all_items::{GetAllItemsInput, GetAllItemsOutput, GetAllItemsUseCase};
pub use get_item_by_id::{GetItemByIdInput, GetItemByIdOutput, GetItemByIdUseCase};

/// A single application operation
#[async_trait]
pub trait UseCase {
    type Input: Send;
    type Output: Send;

    async fn execute(&self, input: Self::Input) -> Result<Self::Output, DomainError>;
}

/// All item use cases, sharing one repository
pub struct ItemUseCases<R>
where
    R: ItemRepository + ?Sized,
{
    pub get_all: GetAllItemsUseCase<R>,
    pub get_by_id: GetItemByIdUseCase<R>,
    pub create: CreateItemUseCase<R>,
    pub delete: DeleteItemUseCase<R>,
}

impl<R> ItemUseCases<R>
where
    R: ItemRepository + ?Sized,
{
    pub fn new(items: Arc<R>, deletion_rules: DeletionRules) -> Self {
        Self {
            get_all: GetAllItemsUseCase::new(items.clone()),
            get_by_id: GetItemByIdUseCase::new(items.clone()),
            create: CreateItemUseCase::new(items.clone()),
            delete: DeleteItemUseCase::new(items, deletion_rules),
        }
    }
}
