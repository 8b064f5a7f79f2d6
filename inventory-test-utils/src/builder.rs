//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring test environments before execution.
//! The builder pattern allows chaining multiple configuration methods together, with all operations
//! queued and executed during the final `build()` call.

use entity::location::LocationType;
use sea_orm::Schema;

use crate::{constant::TEST_OWNER_GROUP, error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// Provides an interface for setting up test environments with database tables and
/// fixture records. Methods can be chained together and finalized with `build()`.
pub struct TestBuilder {
    // Tables to create
    include_user_tables: bool,
    include_inventory_tables: bool,

    // Database fixtures to insert
    include_owner_group: bool,
    locations: Vec<(String, String, LocationType, Option<String>)>, // (id, title, type, parent_id)
}

impl TestBuilder {
    /// Create a new TestBuilder.
    ///
    /// Initializes an empty builder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            include_user_tables: false,
            include_inventory_tables: false,
            include_owner_group: false,
            locations: Vec::new(),
        }
    }

    /// Add the account tables to the test database.
    ///
    /// Creates InventoryUser, InventoryGroup and InventoryUserGroup.
    pub fn with_user_tables(mut self) -> Self {
        self.include_user_tables = true;
        self
    }

    /// Add every application table to the test database.
    ///
    /// Creates the account tables plus Location, Accommodation and LocalizeAccommodation.
    pub fn with_inventory_tables(mut self) -> Self {
        self.include_user_tables = true;
        self.include_inventory_tables = true;
        self
    }

    /// Insert the `Property Owners` group into the database.
    ///
    /// Requires the account tables.
    pub fn with_owner_group(mut self) -> Self {
        self.include_owner_group = true;
        self
    }

    /// Insert a location into the database.
    ///
    /// Locations are inserted in the order they are queued, so a parent must be queued before
    /// its children.
    ///
    /// # Arguments
    /// - `id` - Primary key of the location
    /// - `title` - Display title, also the source of the sitemap slug
    /// - `location_type` - Level within the hierarchy
    /// - `parent_id` - Optional parent location ID
    pub fn with_location(
        mut self,
        id: &str,
        title: &str,
        location_type: LocationType,
        parent_id: Option<&str>,
    ) -> Self {
        self.locations.push((
            id.to_string(),
            title.to_string(),
            location_type,
            parent_id.map(str::to_string),
        ));
        self
    }

    /// Build the test context, executing all queued operations.
    ///
    /// Tables are created first, account tables before inventory tables so foreign keys
    /// resolve, followed by fixture records.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment
    /// - `Err(TestError::DbErr)` - Table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let context = TestContext::new().await?;

        // 1. Create tables
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        let mut tables = Vec::new();

        if self.include_user_tables {
            tables.push(schema.create_table_from_entity(entity::prelude::InventoryUser));
            tables.push(schema.create_table_from_entity(entity::prelude::InventoryGroup));
            tables.push(schema.create_table_from_entity(entity::prelude::InventoryUserGroup));
        }

        if self.include_inventory_tables {
            tables.push(schema.create_table_from_entity(entity::prelude::Location));
            tables.push(schema.create_table_from_entity(entity::prelude::Accommodation));
            tables.push(schema.create_table_from_entity(entity::prelude::LocalizeAccommodation));
        }

        context.with_tables(tables).await?;

        // 2. Insert fixtures
        if self.include_owner_group {
            context.user().insert_group(TEST_OWNER_GROUP).await?;
        }

        for (id, title, location_type, parent_id) in self.locations {
            context
                .location()
                .insert_location(&id, &title, location_type, parent_id.as_deref())
                .await?;
        }

        Ok(context)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
