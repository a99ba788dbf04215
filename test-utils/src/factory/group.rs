//! Group factory for creating test `group_team` entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test groups with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::group::GroupFactory;
///
/// let group = GroupFactory::new(&db)
///     .group_name("Tuesday Euros")
///     .age_limit(18)
///     .build()
///     .await?;
/// ```
pub struct GroupFactory<'a> {
    db: &'a DatabaseConnection,
    group_name: String,
    age_limit: Option<i32>,
    budget: Option<f64>,
}

impl<'a> GroupFactory<'a> {
    /// Creates a new GroupFactory with default values.
    ///
    /// Defaults:
    /// - group_name: `"Group {id}"` where id is auto-incremented
    /// - age_limit: `None`
    /// - budget: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            group_name: format!("Group {}", id),
            age_limit: None,
            budget: None,
        }
    }

    /// Sets the group name.
    pub fn group_name(mut self, group_name: impl Into<String>) -> Self {
        self.group_name = group_name.into();
        self
    }

    /// Sets the minimum member age.
    pub fn age_limit(mut self, age_limit: i32) -> Self {
        self.age_limit = Some(age_limit);
        self
    }

    /// Sets the group budget.
    pub fn budget(mut self, budget: f64) -> Self {
        self.budget = Some(budget);
        self
    }

    /// Builds and inserts the group entity into the database.
    pub async fn build(self) -> Result<entity::group_team::Model, DbErr> {
        entity::group_team::ActiveModel {
            groupid: ActiveValue::NotSet,
            group_name: ActiveValue::Set(self.group_name),
            age_limit: ActiveValue::Set(self.age_limit),
            budget: ActiveValue::Set(self.budget),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a group with default values.
pub async fn create_group(db: &DatabaseConnection) -> Result<entity::group_team::Model, DbErr> {
    GroupFactory::new(db).build().await
}

/// Creates a group with a specific name.
pub async fn create_group_with_name(
    db: &DatabaseConnection,
    group_name: impl Into<String>,
) -> Result<entity::group_team::Model, DbErr> {
    GroupFactory::new(db).group_name(group_name).build().await
}
