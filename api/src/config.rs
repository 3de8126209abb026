use std::env;
use std::time::Duration;

use crate::error::ConfigError;

/// Which item store backs the repository port
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    Memory,
    Postgres,
}

impl std::str::FromStr for StoreKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "memory" => Ok(StoreKind::Memory),
            "postgres" => Ok(StoreKind::Postgres),
            _ => Err(format!("Unknown store: {}", s)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub store: StoreKind,
    /// Required when `store` is Postgres
    pub database_url: Option<String>,
    /// Apply pending migrations at startup (Postgres only)
    pub run_migrations: bool,
    /// Seed the in-memory store with sample items
    pub seed_sample_items: bool,
    /// Minimum item age before deletion is allowed. `None` leaves the rule off.
    pub delete_min_age: Option<Duration>,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build the config from any variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let store = match lookup("ITEM_STORE") {
            Some(value) => value.parse().map_err(|_| ConfigError::Invalid {
                name: "ITEM_STORE",
                value,
            })?,
            None => StoreKind::Memory,
        };

        let database_url = lookup("DATABASE_URL");
        if store == StoreKind::Postgres && database_url.is_none() {
            return Err(ConfigError::Missing("DATABASE_URL"));
        }

        let delete_min_age = match lookup("ITEM_DELETE_MIN_AGE_SECS") {
            Some(value) => Some(Duration::from_secs(value.parse().map_err(|_| {
                ConfigError::Invalid {
                    name: "ITEM_DELETE_MIN_AGE_SECS",
                    value: value.clone(),
                }
            })?)),
            None => None,
        };

        let port = match lookup("PORT") {
            Some(value) => value.parse().map_err(|_| ConfigError::Invalid {
                name: "PORT",
                value,
            })?,
            None => 8080,
        };

        Ok(Self {
            store,
            database_url,
            run_migrations: bool_var(&lookup, "RUN_MIGRATIONS", true)?,
            seed_sample_items: bool_var(&lookup, "SEED_SAMPLE_ITEMS", false)?,
            delete_min_age,
            port,
        })
    }
}

fn bool_var(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    default: bool,
) -> Result<bool, ConfigError> {
    match lookup(name) {
        Some(value) => parse_bool(&value).ok_or(ConfigError::Invalid { name, value }),
        None => Ok(default),
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
