use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{SingleUser, GroupTeam, InGroup};
///
/// let test = TestBuilder::new()
///     .with_table(SingleUser)
///     .with_table(GroupTeam)
///     .with_table(InGroup)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Tables with foreign keys should be added after their referenced
    /// tables.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity implementing `EntityTrait` to create a table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the user table together with its three preference tables.
    ///
    /// Adds, in dependency order:
    /// - SingleUser
    /// - Boardgame
    /// - UserFavoriteGame
    /// - UserPreferredGenre
    /// - UserPreferredMechanic
    pub fn with_user_tables(self) -> Self {
        self.with_table(SingleUser)
            .with_table(Boardgame)
            .with_table(UserFavoriteGame)
            .with_table(UserPreferredGenre)
            .with_table(UserPreferredMechanic)
    }

    /// Adds every table of the schema.
    ///
    /// Equivalent to `with_user_tables()` followed by the group and membership tables.
    /// Use this for anything touching memberships or the user cascade delete.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_club_tables()
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_club_tables(self) -> Self {
        self.with_user_tables()
            .with_table(GroupTeam)
            .with_table(InGroup)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
