//! User service for business logic.
//!
//! This module provides the `UserService` for user lookups, updates, preference
//! changes and deletion. Lookups that match nothing return `None`; updates against
//! a missing user fail with `AppError::NotFound`.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        boardgame::BoardgameRepository, preference::PreferenceRepository, user::UserRepository,
    },
    error::AppError,
    model::{
        preference::{Preference, PreferenceKind, SetPreferenceParam},
        user::{
            CreateUserParam, UpdateBudgetParam, UpdateUserInfoParam, User, UserLookup,
            UserProfile,
        },
    },
};

/// Number of names returned by [`UserService::list_names`].
const NAME_LIST_LIMIT: u64 = 100;

/// Service providing business logic for user management.
pub struct UserService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a user.
    ///
    /// # Returns
    /// - `Ok(User)` - The created user with its database-assigned id
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateUserParam) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);
        let user = user_repo.create(param).await?;

        tracing::debug!("Created user {} ({})", user.userid, user.name);

        Ok(user)
    }

    /// Looks up a single user by id or name and attaches their preferences.
    ///
    /// # Returns
    /// - `Ok(Some(UserProfile))` - User found with favorite game, genre and mechanic ids
    /// - `Ok(None)` - No user matched
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn find(&self, lookup: UserLookup) -> Result<Option<UserProfile>, AppError> {
        let user_repo = UserRepository::new(self.db);
        let user = match lookup {
            UserLookup::Id(userid) => user_repo.find_by_id(userid).await?,
            UserLookup::Name(name) => user_repo.find_by_name(&name).await?,
        };

        let Some(user) = user else {
            return Ok(None);
        };

        let preference_repo = PreferenceRepository::new(self.db);
        let gameid = preference_repo
            .get(user.userid, PreferenceKind::FavoriteGame)
            .await?
            .map(|p| p.target_id);
        let genreid = preference_repo
            .get(user.userid, PreferenceKind::Genre)
            .await?
            .map(|p| p.target_id);
        let mechanicid = preference_repo
            .get(user.userid, PreferenceKind::Mechanic)
            .await?
            .map(|p| p.target_id);

        Ok(Some(UserProfile {
            user,
            gameid,
            genreid,
            mechanicid,
        }))
    }

    /// Updates a user's name and/or age.
    ///
    /// # Returns
    /// - `Ok(User)` - The updated user
    /// - `Err(AppError::NotFound)` - No user with that id
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn update_info(&self, param: UpdateUserInfoParam) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        user_repo
            .update_info(param)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// Replaces a user's budget.
    ///
    /// # Returns
    /// - `Ok(User)` - The updated user
    /// - `Err(AppError::NotFound)` - No user with that id
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn update_budget(&self, param: UpdateBudgetParam) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        user_repo
            .update_budget(param)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// Replaces the user's single row in one preference relation.
    ///
    /// The user must exist, and for the favorite-game relation so must the game.
    ///
    /// # Returns
    /// - `Ok(Preference)` - The newly stored row
    /// - `Err(AppError::NotFound)` - Unknown user or, for favorite games, unknown game
    /// - `Err(AppError::DbErr)` - Database error; the previous row is kept
    pub async fn set_preference(&self, param: SetPreferenceParam) -> Result<Preference, AppError> {
        let user_repo = UserRepository::new(self.db);
        if user_repo.find_by_id(param.userid).await?.is_none() {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        if param.kind == PreferenceKind::FavoriteGame {
            let boardgame_repo = BoardgameRepository::new(self.db);
            if !boardgame_repo.exists(param.target_id).await? {
                return Err(AppError::NotFound("Game not found".to_string()));
            }
        }

        let preference_repo = PreferenceRepository::new(self.db);
        let preference = preference_repo
            .replace(param.userid, param.kind, param.target_id)
            .await?;

        Ok(preference)
    }

    /// Deletes a user along with their memberships and preferences.
    ///
    /// # Returns
    /// - `Ok(User)` - The deleted user
    /// - `Err(AppError::NotFound)` - No user with that id; nothing was deleted
    /// - `Err(AppError::DbErr)` - Database error; nothing was deleted
    pub async fn delete(&self, userid: i32) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);
        let user = user_repo
            .delete(userid)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        tracing::debug!("Deleted user {} ({})", user.userid, user.name);

        Ok(user)
    }

    /// Returns the first hundred user names ordered by id.
    pub async fn list_names(&self) -> Result<Vec<String>, AppError> {
        let user_repo = UserRepository::new(self.db);
        let names = user_repo.get_names(NAME_LIST_LIMIT).await?;

        Ok(names)
    }
}
