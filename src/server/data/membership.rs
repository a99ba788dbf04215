//! Membership data repository.
//!
//! Manages `in_group` rows linking users to groups, and the listings that follow those
//! links in either direction. Membership is unique per (`userid`, `groupid`).

use sea_orm::{
    sea_query::{OnConflict, Query},
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::group::{Group, GroupMember, JoinedGroup, Membership};

pub struct MembershipRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MembershipRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a user to a group unless the membership already exists.
    ///
    /// A single `INSERT .. ON CONFLICT DO NOTHING` on the (`userid`, `groupid`) key, so
    /// concurrent joins of the same pair never fail on the primary key.
    ///
    /// # Returns
    /// - `Ok(JoinedGroup)` - The membership, flagged with whether it was inserted now
    /// - `Err(DbErr)` - Database error, including foreign key violations
    pub async fn join(&self, userid: i32, groupid: i32) -> Result<JoinedGroup, DbErr> {
        let inserted = entity::prelude::InGroup::insert(entity::in_group::ActiveModel {
            userid: ActiveValue::Set(userid),
            groupid: ActiveValue::Set(groupid),
        })
        .on_conflict(
            OnConflict::columns([
                entity::in_group::Column::Userid,
                entity::in_group::Column::Groupid,
            ])
            .do_nothing()
            .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(JoinedGroup {
            membership: Membership { userid, groupid },
            newly_joined: inserted > 0,
        })
    }

    /// Removes a user from a group.
    ///
    /// # Returns
    /// - `Ok(Some(Membership))` - The removed membership
    /// - `Ok(None)` - The user was not a member of the group
    /// - `Err(DbErr)` - Database error during delete
    pub async fn leave(&self, userid: i32, groupid: i32) -> Result<Option<Membership>, DbErr> {
        let result = entity::prelude::InGroup::delete_by_id((userid, groupid))
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        Ok(Some(Membership { userid, groupid }))
    }

    /// Gets the members of a group ordered by name.
    pub async fn get_members(&self, groupid: i32) -> Result<Vec<GroupMember>, DbErr> {
        let entities = entity::prelude::SingleUser::find()
            .inner_join(entity::prelude::InGroup)
            .filter(entity::in_group::Column::Groupid.eq(groupid))
            .order_by_asc(entity::single_user::Column::Name)
            .order_by_asc(entity::single_user::Column::Userid)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(GroupMember::from_entity).collect())
    }

    /// Gets the groups a user belongs to ordered by name.
    pub async fn get_groups_of_user(&self, userid: i32) -> Result<Vec<Group>, DbErr> {
        let entities = entity::prelude::GroupTeam::find()
            .inner_join(entity::prelude::InGroup)
            .filter(entity::in_group::Column::Userid.eq(userid))
            .order_by_asc(entity::group_team::Column::GroupName)
            .order_by_asc(entity::group_team::Column::Groupid)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Group::from_entity).collect())
    }

    /// Gets the groups a user does not belong to ordered by name.
    pub async fn get_groups_without_user(&self, userid: i32) -> Result<Vec<Group>, DbErr> {
        let entities = entity::prelude::GroupTeam::find()
            .filter(
                entity::group_team::Column::Groupid.not_in_subquery(
                    Query::select()
                        .column(entity::in_group::Column::Groupid)
                        .from(entity::prelude::InGroup)
                        .and_where(entity::in_group::Column::Userid.eq(userid))
                        .to_owned(),
                ),
            )
            .order_by_asc(entity::group_team::Column::GroupName)
            .order_by_asc(entity::group_team::Column::Groupid)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Group::from_entity).collect())
    }
}
