//! Preference data repository.
//!
//! Each of `user_favorite_game`, `user_preferred_genre` and `user_preferred_mechanic`
//! holds at most one row per user. [`PreferenceRepository::replace`] swaps that row
//! inside a transaction so a failed insert leaves the previous preference in place.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, TransactionTrait,
};

use crate::server::model::preference::{Preference, PreferenceKind};

pub struct PreferenceRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PreferenceRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the user's row in the relation selected by `kind`, if any.
    pub async fn get(&self, userid: i32, kind: PreferenceKind) -> Result<Option<Preference>, DbErr> {
        let target_id = match kind {
            PreferenceKind::FavoriteGame => {
                entity::prelude::UserFavoriteGame::find_by_id(userid)
                    .one(self.db)
                    .await?
                    .map(|row| row.gameid)
            }
            PreferenceKind::Genre => entity::prelude::UserPreferredGenre::find_by_id(userid)
                .one(self.db)
                .await?
                .map(|row| row.genreid),
            PreferenceKind::Mechanic => entity::prelude::UserPreferredMechanic::find_by_id(userid)
                .one(self.db)
                .await?
                .map(|row| row.mechanicid),
        };

        Ok(target_id.map(|target_id| Preference {
            userid,
            kind,
            target_id,
        }))
    }

    /// Replaces the user's row in the relation selected by `kind`.
    ///
    /// Deletes every existing row for the user, then inserts the new one. Both statements
    /// run in one transaction.
    ///
    /// # Returns
    /// - `Ok(Preference)` - The newly stored row
    /// - `Err(DbErr)` - Database error; the previous row is kept
    pub async fn replace(
        &self,
        userid: i32,
        kind: PreferenceKind,
        target_id: i32,
    ) -> Result<Preference, DbErr> {
        let txn = self.db.begin().await?;

        delete_for_user(&txn, userid, kind).await?;
        if let Err(err) = insert_for_user(&txn, userid, kind, target_id).await {
            txn.rollback().await?;
            return Err(err);
        }

        txn.commit().await?;

        Ok(Preference {
            userid,
            kind,
            target_id,
        })
    }
}

async fn delete_for_user<C>(conn: &C, userid: i32, kind: PreferenceKind) -> Result<(), DbErr>
where
    C: ConnectionTrait,
{
    match kind {
        PreferenceKind::FavoriteGame => {
            entity::prelude::UserFavoriteGame::delete_many()
                .filter(entity::user_favorite_game::Column::Userid.eq(userid))
                .exec(conn)
                .await?;
        }
        PreferenceKind::Genre => {
            entity::prelude::UserPreferredGenre::delete_many()
                .filter(entity::user_preferred_genre::Column::Userid.eq(userid))
                .exec(conn)
                .await?;
        }
        PreferenceKind::Mechanic => {
            entity::prelude::UserPreferredMechanic::delete_many()
                .filter(entity::user_preferred_mechanic::Column::Userid.eq(userid))
                .exec(conn)
                .await?;
        }
    }

    Ok(())
}

async fn insert_for_user<C>(
    conn: &C,
    userid: i32,
    kind: PreferenceKind,
    target_id: i32,
) -> Result<(), DbErr>
where
    C: ConnectionTrait,
{
    match kind {
        PreferenceKind::FavoriteGame => {
            entity::user_favorite_game::ActiveModel {
                userid: ActiveValue::Set(userid),
                gameid: ActiveValue::Set(target_id),
            }
            .insert(conn)
            .await?;
        }
        PreferenceKind::Genre => {
            entity::user_preferred_genre::ActiveModel {
                userid: ActiveValue::Set(userid),
                genreid: ActiveValue::Set(target_id),
            }
            .insert(conn)
            .await?;
        }
        PreferenceKind::Mechanic => {
            entity::user_preferred_mechanic::ActiveModel {
                userid: ActiveValue::Set(userid),
                mechanicid: ActiveValue::Set(target_id),
            }
            .insert(conn)
            .await?;
        }
    }

    Ok(())
}
