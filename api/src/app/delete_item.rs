//! Delete item use case

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;

use super::UseCase;
use crate::domain::entities::{Item, ItemId};
use crate::domain::ports::ItemRepository;
use crate::error::DomainError;

#[derive(Debug, Clone)]
pub struct DeleteItemInput {
    pub id: ItemId,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteItemOutput {
    pub message: String,
    pub deleted_id: ItemId,
}

/// Rules checked before an item may be deleted
///
/// Inactive by default. `min_age` refuses deletion of items younger than
/// the given age and is only set from explicit configuration.
#[derive(Debug, Clone, Default)]
pub struct DeletionRules {
    pub min_age: Option<Duration>,
}

impl DeletionRules {
    pub fn check(&self, item: &Item, now: DateTime<Utc>) -> Result<(), DomainError> {
        let Some(min_age) = self.min_age else {
            return Ok(());
        };

        let min_age_chrono = chrono::Duration::from_std(min_age)
            .map_err(|e| DomainError::Internal(format!("Invalid deletion min age: {}", e)))?;

        // A cutoff before the earliest representable time means every item is too young
        let too_young = match now.checked_sub_signed(min_age_chrono) {
            Some(cutoff) => item.created_at > cutoff,
            None => true,
        };

        if too_young {
            return Err(DomainError::BusinessRule(format!(
                "Cannot delete items created in the last {}",
                describe_age(min_age)
            )));
        }
        Ok(())
    }
}

fn describe_age(age: Duration) -> String {
    let secs = age.as_secs();
    match (secs / 60, secs % 60) {
        (1, 0) => "minute".to_string(),
        (minutes, 0) if minutes > 0 => format!("{} minutes", minutes),
        _ if secs == 1 => "second".to_string(),
        _ => format!("{} seconds", secs),
    }
}

pub struct DeleteItemUseCase<R>
where
    R: ItemRepository + ?Sized,
{
    items: Arc<R>,
    rules: DeletionRules,
}

impl<R> DeleteItemUseCase<R>
where
    R: ItemRepository + ?Sized,
{
    pub fn new(items: Arc<R>, rules: DeletionRules) -> Self {
        Self { items, rules }
    }
}

#[async_trait]
impl<R> UseCase for DeleteItemUseCase<R>
where
    R: ItemRepository + ?Sized,
{
    type Input = DeleteItemInput;
    type Output = DeleteItemOutput;

    async fn execute(&self, input: DeleteItemInput) -> Result<DeleteItemOutput, DomainError> {
        let id = input.id;
        if id.is_blank() {
            return Err(DomainError::NotFound("Item ID is required".to_string()));
        }

        let item = self
            .items
            .get_by_id(&id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("Item with ID {} not found", id)))?;

        if let Err(e) = self.rules.check(&item, Utc::now()) {
            tracing::warn!(id = %id, error = %e, "Rejected item deletion");
            return Err(e);
        }

        // Another request may have removed it since the lookup
        if !self.items.delete(&id).await? {
            return Err(DomainError::NotFound(format!(
                "Failed to delete item with ID {}",
                id
            )));
        }
        tracing::debug!(id = %id, "Deleted item");

        Ok(DeleteItemOutput {
            message: "Item deleted successfully".to_string(),
            deleted_id: id,
        })
    }
}
