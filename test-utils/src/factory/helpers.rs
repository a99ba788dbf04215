//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including unique value generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique names in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a user who is a member of a freshly created group.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, group))` - The created user and the group they joined
/// - `Err(DbErr)` - Database error during creation
pub async fn create_user_in_group(
    db: &DatabaseConnection,
) -> Result<(entity::single_user::Model, entity::group_team::Model), DbErr> {
    let user = crate::factory::user::create_user(db).await?;
    let group = crate::factory::group::create_group(db).await?;
    crate::factory::relation::create_membership(db, user.userid, group.groupid).await?;

    Ok((user, group))
}

/// Creates a user holding one row in each of the three preference relations.
///
/// A boardgame is created to back the favorite game row.
///
/// # Arguments
/// - `db` - Database connection
/// - `genreid` - Genre ID stored as the preferred genre
/// - `mechanicid` - Mechanic ID stored as the preferred mechanic
///
/// # Returns
/// - `Ok((user, game))` - The created user and their favorite game
/// - `Err(DbErr)` - Database error during creation
pub async fn create_user_with_preferences(
    db: &DatabaseConnection,
    genreid: i32,
    mechanicid: i32,
) -> Result<(entity::single_user::Model, entity::boardgame::Model), DbErr> {
    let user = crate::factory::user::create_user(db).await?;
    let game = crate::factory::boardgame::create_boardgame(db).await?;
    crate::factory::relation::create_favorite_game(db, user.userid, game.gameid).await?;
    crate::factory::relation::create_preferred_genre(db, user.userid, genreid).await?;
    crate::factory::relation::create_preferred_mechanic(db, user.userid, mechanicid).await?;

    Ok((user, game))
}
