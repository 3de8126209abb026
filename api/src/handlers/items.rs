//! Item handlers
//!
//! CRUD endpoints under `/api/items`. Use case errors map to status codes
//! through `AppError`.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use crate::app::{
    CreateItemInput, CreateItemOutput, DeleteItemInput, DeleteItemOutput, GetAllItemsInput,
    GetAllItemsOutput, GetItemByIdInput, GetItemByIdOutput, UseCase,
};
use crate::domain::entities::{ItemId, SortBy, SortOrder};
use crate::error::AppError;
use crate::AppState;

/// Query parameters for listing items
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListItemsQuery {
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
}

impl ListItemsQuery {
    /// Unrecognized values are treated as absent
    fn into_input(self) -> GetAllItemsInput {
        GetAllItemsInput {
            sort_by: self.sort_by.and_then(|s| s.parse::<SortBy>().ok()),
            sort_order: self.sort_order.and_then(|s| s.parse::<SortOrder>().ok()),
        }
    }
}

/// Request body for creating an item
///
/// Missing fields are left for the use case to reject.
#[derive(Debug, Deserialize)]
pub struct CreateItemRequest {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// GET /api/items
///
/// List all items, optionally sorted. A query string that can't be
/// decoded is ignored like any other unrecognized sort option.
pub async fn list_items(
    State(state): State<AppState>,
    query: Result<Query<ListItemsQuery>, QueryRejection>,
) -> Result<Json<GetAllItemsOutput>, AppError> {
    let query = match query {
        Ok(Query(query)) => query,
        Err(e) => {
            tracing::debug!(error = %e, "Ignoring undecodable list query");
            ListItemsQuery::default()
        }
    };

    let output = state.items.get_all.execute(query.into_input()).await?;
    Ok(Json(output))
}

/// POST /api/items
///
/// Create an item. Responds 201 with the stored item.
pub async fn create_item(
    State(state): State<AppState>,
    payload: Result<Json<CreateItemRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateItemOutput>), AppError> {
    let Json(request) = payload.map_err(|e| {
        tracing::debug!(error = %e, "Rejected create item body");
        AppError::BadRequest("Invalid request body".to_string())
    })?;

    let output = state
        .items
        .create
        .execute(CreateItemInput {
            name: request.name.unwrap_or_default(),
            description: request.description.unwrap_or_default(),
        })
        .await?;

    Ok((StatusCode::CREATED, Json(output)))
}

/// GET /api/items/:id
pub async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<GetItemByIdOutput>, AppError> {
    let output = state
        .items
        .get_by_id
        .execute(GetItemByIdInput {
            id: ItemId::from(id),
        })
        .await?;
    Ok(Json(output))
}

/// DELETE /api/items/:id
pub async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteItemOutput>, AppError> {
    let output = state
        .items
        .delete
        .execute(DeleteItemInput {
            id: ItemId::from(id),
        })
        .await?;
    Ok(Json(output))
}
