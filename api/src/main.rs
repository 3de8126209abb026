//! Itemdesk API Server
//!
//! A small item-management service: create, list, fetch and delete items.
//! Uses hexagonal (ports & adapters) architecture so the in-memory and
//! PostgreSQL stores are interchangeable behind the same use cases.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{routing::get, Json, Router};
use migration::{Migrator, MigratorTrait};
use sea_orm::Database;
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod entity;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::{InMemoryItemRepository, PostgresItemRepository};
use app::{DeletionRules, ItemUseCases};
use config::{Config, StoreKind};
use domain::ports::ItemRepository;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub items: Arc<ItemUseCases<dyn ItemRepository>>,
}

impl AppState {
    pub fn new(repo: Arc<dyn ItemRepository>, deletion_rules: DeletionRules) -> Self {
        Self {
            items: Arc::new(ItemUseCases::new(repo, deletion_rules)),
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the HTTP router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route(
            "/api/items",
            get(handlers::list_items).post(handlers::create_item),
        )
        .route(
            "/api/items/:id",
            get(handlers::get_item).delete(handlers::delete_item),
        )
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Create the item repository selected by configuration
async fn connect_store(config: &Config) -> anyhow::Result<Arc<dyn ItemRepository>> {
    match config.store {
        StoreKind::Memory => {
            let repo = InMemoryItemRepository::new();
            let repo = if config.seed_sample_items {
                tracing::info!("Seeding in-memory store with sample items");
                repo.with_sample_items()
            } else {
                repo
            };
            Ok(Arc::new(repo))
        }
        StoreKind::Postgres => {
            let url = config
                .database_url
                .as_deref()
                .context("DATABASE_URL must be set")?;

            tracing::info!("Connecting to database...");
            let db = Database::connect(url)
                .await
                .context("Failed to connect to database")?;
            tracing::info!("Database connected");

            if config.run_migrations {
                Migrator::up(&db, None)
                    .await
                    .context("Failed to apply migrations")?;
                tracing::info!("Migrations applied");
            }

            Ok(Arc::new(PostgresItemRepository::new(db)))
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,itemdesk_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Itemdesk API...");

    let config = Config::from_env().context("Invalid configuration")?;
    tracing::info!(store = ?config.store, "Using item store");

    if let Some(min_age) = config.delete_min_age {
        tracing::info!(min_age_secs = min_age.as_secs(), "Deletion age rule enabled");
    }

    let repo = connect_store(&config).await?;
    let state = AppState::new(
        repo,
        DeletionRules {
            min_age: config.delete_min_age,
        },
    );

    let app = router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
