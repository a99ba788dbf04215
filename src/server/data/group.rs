//! Group data repository for database operations.
//!
//! This module provides the `GroupRepository` for managing `group_team` rows: creation,
//! lookups by id or name, renaming, listings and the cascading delete that removes the
//! group's memberships first.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::{
    data::expr::{contains_ignore_case, name_equals},
    model::group::{CreateGroupParam, Group, UpdateGroupNameParam},
};

/// Repository providing database operations for group management.
pub struct GroupRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GroupRepository<'a> {
    /// Creates a new GroupRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new group; the id is assigned by the database.
    ///
    /// # Returns
    /// - `Ok(Group)` - The created group including its generated id
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateGroupParam) -> Result<Group, DbErr> {
        let entity = entity::group_team::ActiveModel {
            group_name: ActiveValue::Set(param.group_name),
            age_limit: ActiveValue::Set(param.age_limit),
            budget: ActiveValue::Set(param.budget),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Group::from_entity(entity))
    }

    pub async fn find_by_id(&self, groupid: i32) -> Result<Option<Group>, DbErr> {
        let entity = entity::prelude::GroupTeam::find_by_id(groupid)
            .one(self.db)
            .await?;

        Ok(entity.map(Group::from_entity))
    }

    /// Finds a group by name, ignoring case and surrounding whitespace.
    ///
    /// The match with the lowest id wins when several groups share a name.
    pub async fn find_by_name(&self, group_name: &str) -> Result<Option<Group>, DbErr> {
        let entity = entity::prelude::GroupTeam::find()
            .filter(name_equals(entity::group_team::Column::GroupName, group_name))
            .order_by_asc(entity::group_team::Column::Groupid)
            .one(self.db)
            .await?;

        Ok(entity.map(Group::from_entity))
    }

    /// Renames a group.
    ///
    /// # Returns
    /// - `Ok(Some(Group))` - The group after the rename
    /// - `Ok(None)` - No group with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_name(&self, param: UpdateGroupNameParam) -> Result<Option<Group>, DbErr> {
        let Some(entity) = entity::prelude::GroupTeam::find_by_id(param.groupid)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        active.group_name = ActiveValue::Set(param.group_name);

        let updated = active.update(self.db).await?;

        Ok(Some(Group::from_entity(updated)))
    }

    /// Gets every group ordered by name.
    pub async fn get_all(&self) -> Result<Vec<Group>, DbErr> {
        let entities = entity::prelude::GroupTeam::find()
            .order_by_asc(entity::group_team::Column::GroupName)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Group::from_entity).collect())
    }

    /// Lists groups ordered by id, optionally filtered by a case-insensitive name substring.
    pub async fn search(&self, group_name: Option<&str>) -> Result<Vec<Group>, DbErr> {
        let mut query = entity::prelude::GroupTeam::find();
        if let Some(group_name) = group_name {
            query = query.filter(contains_ignore_case(
                entity::group_team::Column::GroupName,
                group_name,
            ));
        }

        let entities = query
            .order_by_asc(entity::group_team::Column::Groupid)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Group::from_entity).collect())
    }

    /// Deletes a group and its memberships in one transaction.
    ///
    /// # Returns
    /// - `Ok(Some(Group))` - The deleted group
    /// - `Ok(None)` - No group with that id; nothing was deleted
    /// - `Err(DbErr)` - Database error; the transaction was rolled back
    pub async fn delete(&self, groupid: i32) -> Result<Option<Group>, DbErr> {
        let txn = self.db.begin().await?;

        let Some(entity) = entity::prelude::GroupTeam::find_by_id(groupid)
            .one(&txn)
            .await?
        else {
            txn.rollback().await?;
            return Ok(None);
        };

        entity::prelude::InGroup::delete_many()
            .filter(entity::in_group::Column::Groupid.eq(groupid))
            .exec(&txn)
            .await?;

        let result = entity::prelude::GroupTeam::delete_by_id(groupid)
            .exec(&txn)
            .await?;

        if result.rows_affected == 0 {
            txn.rollback().await?;
            return Ok(None);
        }

        txn.commit().await?;

        Ok(Some(Group::from_entity(entity)))
    }
}
