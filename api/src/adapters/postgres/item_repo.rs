//! PostgreSQL adapter for ItemRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use crate::domain::entities::{Item, ItemId, NewItem};
use crate::domain::ports::ItemRepository;
use crate::entity::items;
use crate::error::DomainError;

/// PostgreSQL implementation of ItemRepository
pub struct PostgresItemRepository {
    db: DatabaseConnection,
}

impl PostgresItemRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Ids are stored as UUIDs; anything else can't match a row
fn parse_id(id: &ItemId) -> Option<Uuid> {
    Uuid::parse_str(id.as_str()).ok()
}

#[async_trait]
impl ItemRepository for PostgresItemRepository {
    async fn get_all(&self) -> Result<Vec<Item>, DomainError> {
        let results = items::Entity::find()
            .order_by_asc(items::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn get_by_id(&self, id: &ItemId) -> Result<Option<Item>, DomainError> {
        let Some(uuid) = parse_id(id) else {
            return Ok(None);
        };

        let result = items::Entity::find_by_id(uuid)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn create(&self, item: &NewItem) -> Result<Item, DomainError> {
        let now = Utc::now().fixed_offset();

        let model = items::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(item.name.clone()),
            description: Set(item.description.clone()),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.into())
    }

    async fn delete(&self, id: &ItemId) -> Result<bool, DomainError> {
        let Some(uuid) = parse_id(id) else {
            return Ok(false);
        };

        let result = items::Entity::delete_many()
            .filter(items::Column::Id.eq(uuid))
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.rows_affected > 0)
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Item>, DomainError> {
        let result = items::Entity::find()
            .filter(items::Column::Name.eq(name))
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }
}

/// Convert SeaORM model to domain entity
impl From<items::Model> for Item {
    fn from(model: items::Model) -> Self {
        Item {
            id: ItemId::from(model.id),
            name: model.name,
            description: model.description,
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: Some(model.updated_at.with_timezone(&Utc)),
        }
    }
}
