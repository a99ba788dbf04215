//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing `single_user` rows. It handles
//! creation, lookups by id or name, partial updates, filtered listings and the cascading
//! delete, converting entity models into domain models at the infrastructure boundary.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
};

use crate::server::{
    data::expr::{contains_ignore_case, name_equals},
    model::user::{CreateUserParam, UpdateBudgetParam, UpdateUserInfoParam, User},
};

/// Repository providing database operations for user management.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new user; the id is assigned by the database.
    ///
    /// # Arguments
    /// - `param` - Validated name plus optional age and budget
    ///
    /// # Returns
    /// - `Ok(User)` - The created user including its generated id
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateUserParam) -> Result<User, DbErr> {
        let entity = entity::single_user::ActiveModel {
            name: ActiveValue::Set(param.name),
            age: ActiveValue::Set(param.age),
            budget: ActiveValue::Set(param.budget),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Finds a user by id.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, userid: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::SingleUser::find_by_id(userid)
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a user by name, ignoring case and surrounding whitespace.
    ///
    /// Names are not unique; the match with the lowest id wins.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - First matching user
    /// - `Ok(None)` - No user with that name
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_name(&self, name: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::SingleUser::find()
            .filter(name_equals(entity::single_user::Column::Name, name))
            .order_by_asc(entity::single_user::Column::Userid)
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Updates the supplied name and/or age of a user.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - The user after the update
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_info(&self, param: UpdateUserInfoParam) -> Result<Option<User>, DbErr> {
        let Some(entity) = entity::prelude::SingleUser::find_by_id(param.userid)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        if let Some(name) = param.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(age) = param.age {
            active.age = ActiveValue::Set(Some(age));
        }

        let updated = active.update(self.db).await?;

        Ok(Some(User::from_entity(updated)))
    }

    /// Replaces a user's budget.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - The user after the update
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_budget(&self, param: UpdateBudgetParam) -> Result<Option<User>, DbErr> {
        let Some(entity) = entity::prelude::SingleUser::find_by_id(param.userid)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        active.budget = ActiveValue::Set(Some(param.budget));

        let updated = active.update(self.db).await?;

        Ok(Some(User::from_entity(updated)))
    }

    /// Lists users ordered by id, optionally filtered by a case-insensitive name substring.
    pub async fn search(&self, name: Option<&str>) -> Result<Vec<User>, DbErr> {
        let mut query = entity::prelude::SingleUser::find();
        if let Some(name) = name {
            query = query.filter(contains_ignore_case(entity::single_user::Column::Name, name));
        }

        let entities = query
            .order_by_asc(entity::single_user::Column::Userid)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(User::from_entity).collect())
    }

    /// Returns up to `limit` user names ordered by id.
    pub async fn get_names(&self, limit: u64) -> Result<Vec<String>, DbErr> {
        entity::prelude::SingleUser::find()
            .select_only()
            .column(entity::single_user::Column::Name)
            .order_by_asc(entity::single_user::Column::Userid)
            .limit(limit)
            .into_tuple::<String>()
            .all(self.db)
            .await
    }

    /// Deletes a user together with every row referencing it.
    ///
    /// Memberships and the three preference rows are removed before the user row, all
    /// within one transaction. Nothing is deleted when the user does not exist.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - The deleted user
    /// - `Ok(None)` - No user with that id; the transaction was rolled back
    /// - `Err(DbErr)` - Database error; the transaction was rolled back
    pub async fn delete(&self, userid: i32) -> Result<Option<User>, DbErr> {
        let txn = self.db.begin().await?;

        let Some(entity) = entity::prelude::SingleUser::find_by_id(userid)
            .one(&txn)
            .await?
        else {
            txn.rollback().await?;
            return Ok(None);
        };

        entity::prelude::InGroup::delete_many()
            .filter(entity::in_group::Column::Userid.eq(userid))
            .exec(&txn)
            .await?;
        entity::prelude::UserFavoriteGame::delete_many()
            .filter(entity::user_favorite_game::Column::Userid.eq(userid))
            .exec(&txn)
            .await?;
        entity::prelude::UserPreferredGenre::delete_many()
            .filter(entity::user_preferred_genre::Column::Userid.eq(userid))
            .exec(&txn)
            .await?;
        entity::prelude::UserPreferredMechanic::delete_many()
            .filter(entity::user_preferred_mechanic::Column::Userid.eq(userid))
            .exec(&txn)
            .await?;

        let result = entity::prelude::SingleUser::delete_by_id(userid)
            .exec(&txn)
            .await?;

        if result.rows_affected == 0 {
            txn.rollback().await?;
            return Ok(None);
        }

        txn.commit().await?;

        Ok(Some(User::from_entity(entity)))
    }
}
