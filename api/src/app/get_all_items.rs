//! Get all items use case

use std::cmp::Ordering;
use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;

use super::UseCase;
use crate::domain::entities::{Item, SortBy, SortOrder};
use crate::domain::ports::ItemRepository;
use crate::error::DomainError;

#[derive(Debug, Clone, Default)]
pub struct GetAllItemsInput {
    /// `None` keeps repository (creation) order
    pub sort_by: Option<SortBy>,
    /// Defaults to ascending
    pub sort_order: Option<SortOrder>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GetAllItemsOutput {
    pub items: Vec<Item>,
    pub count: usize,
}

pub struct GetAllItemsUseCase<R>
where
    R: ItemRepository + ?Sized,
{
    items: Arc<R>,
}

impl<R> GetAllItemsUseCase<R>
where
    R: ItemRepository + ?Sized,
{
    pub fn new(items: Arc<R>) -> Self {
        Self { items }
    }
}

#[async_trait]
impl<R> UseCase for GetAllItemsUseCase<R>
where
    R: ItemRepository + ?Sized,
{
    type Input = GetAllItemsInput;
    type Output = GetAllItemsOutput;

    async fn execute(&self, input: GetAllItemsInput) -> Result<GetAllItemsOutput, DomainError> {
        let mut items = self.items.get_all().await?;

        if let Some(sort_by) = input.sort_by {
            sort_items(&mut items, sort_by, input.sort_order.unwrap_or_default());
        }

        let count = items.len();
        Ok(GetAllItemsOutput { items, count })
    }
}

/// Sort ascending, then reverse for descending
pub fn sort_items(items: &mut [Item], sort_by: SortBy, sort_order: SortOrder) {
    items.sort_by(|a, b| match sort_by {
        SortBy::Name => compare_names(&a.name, &b.name),
        SortBy::CreatedAt => a.created_at.cmp(&b.created_at),
    });

    if sort_order == SortOrder::Desc {
        items.reverse();
    }
}

/// Case-insensitive ordering; on a tie lowercase sorts first.
///
/// This compares lowercased code points, not a locale collation, so
/// non-ASCII letters sort after every ASCII letter ("Élan" comes after
/// "Zebra"). Case folding still applies to them ("élan" equals "ÉLAN"
/// up to the lowercase-first tie break).
fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| b.cmp(a))
}
