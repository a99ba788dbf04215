//! User factory for creating test user entities.
//!
//! This module provides factory methods for creating `single_user` rows with sensible
//! defaults. The factory supports customization through a builder pattern.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user::UserFactory;
///
/// let user = UserFactory::new(&db)
///     .name("Alice")
///     .age(31)
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    age: Option<i32>,
    budget: Option<f64>,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - name: `"User {id}"` where id is auto-incremented
    /// - age: `None`
    /// - budget: `None`
    ///
    /// The `userid` is always assigned by the database.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("User {}", id),
            age: None,
            budget: None,
        }
    }

    /// Sets the name for the user.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the age for the user.
    pub fn age(mut self, age: i32) -> Self {
        self.age = Some(age);
        self
    }

    /// Sets the budget for the user.
    pub fn budget(mut self, budget: f64) -> Self {
        self.budget = Some(budget);
        self
    }

    /// Builds and inserts the user entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::single_user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::single_user::Model, DbErr> {
        entity::single_user::ActiveModel {
            userid: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            age: ActiveValue::Set(self.age),
            budget: ActiveValue::Set(self.budget),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a user with default values.
///
/// Shorthand for `UserFactory::new(db).build().await`.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::single_user::Model, DbErr> {
    UserFactory::new(db).build().await
}

/// Creates a user with a specific name.
///
/// Shorthand for `UserFactory::new(db).name(name).build().await`.
pub async fn create_user_with_name(
    db: &DatabaseConnection,
    name: impl Into<String>,
) -> Result<entity::single_user::Model, DbErr> {
    UserFactory::new(db).name(name).build().await
}
