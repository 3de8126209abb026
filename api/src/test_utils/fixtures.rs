//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use chrono::{DateTime, Utc};

use crate::domain::entities::{Item, ItemId};

/// Create a test item with default values
pub fn test_item() -> Item {
    test_item_named("Test Item")
}

/// Create a test item with a specific name
pub fn test_item_named(name: &str) -> Item {
    test_item_created_at(name, Utc::now())
}

/// Create a test item with a specific name and creation time
pub fn test_item_created_at(name: &str, created_at: DateTime<Utc>) -> Item {
    Item {
        id: ItemId::new(),
        name: name.to_string(),
        description: format!("Description for {}", name),
        created_at,
        updated_at: None,
    }
}
