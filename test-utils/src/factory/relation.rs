//! Factories for the link tables: memberships and the three preference relations.
//!
//! These rows have no generated values, so each factory is a single function taking the
//! ids to link. Referenced rows must already exist.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts an `in_group` row linking a user to a group.
pub async fn create_membership(
    db: &DatabaseConnection,
    userid: i32,
    groupid: i32,
) -> Result<entity::in_group::Model, DbErr> {
    entity::in_group::ActiveModel {
        userid: ActiveValue::Set(userid),
        groupid: ActiveValue::Set(groupid),
    }
    .insert(db)
    .await
}

/// Inserts a `user_favorite_game` row.
pub async fn create_favorite_game(
    db: &DatabaseConnection,
    userid: i32,
    gameid: i32,
) -> Result<entity::user_favorite_game::Model, DbErr> {
    entity::user_favorite_game::ActiveModel {
        userid: ActiveValue::Set(userid),
        gameid: ActiveValue::Set(gameid),
    }
    .insert(db)
    .await
}

/// Inserts a `user_preferred_genre` row.
pub async fn create_preferred_genre(
    db: &DatabaseConnection,
    userid: i32,
    genreid: i32,
) -> Result<entity::user_preferred_genre::Model, DbErr> {
    entity::user_preferred_genre::ActiveModel {
        userid: ActiveValue::Set(userid),
        genreid: ActiveValue::Set(genreid),
    }
    .insert(db)
    .await
}

/// Inserts a `user_preferred_mechanic` row.
pub async fn create_preferred_mechanic(
    db: &DatabaseConnection,
    userid: i32,
    mechanicid: i32,
) -> Result<entity::user_preferred_mechanic::Model, DbErr> {
    entity::user_preferred_mechanic::ActiveModel {
        userid: ActiveValue::Set(userid),
        mechanicid: ActiveValue::Set(mechanicid),
    }
    .insert(db)
    .await
}
