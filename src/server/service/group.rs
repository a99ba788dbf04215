//! Group service for business logic.
//!
//! This module provides the `GroupService` for group CRUD and membership management.
//! Join and leave requests identify users by name; the service resolves those names
//! before handing ids to the membership repository.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{group::GroupRepository, membership::MembershipRepository, user::UserRepository},
    error::AppError,
    model::group::{
        CreateGroupParam, Group, GroupLookup, GroupMember, JoinGroupParam, JoinedGroup,
        LeaveGroupParam, Membership, UpdateGroupNameParam,
    },
};

/// Service providing business logic for groups and memberships.
pub struct GroupService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> GroupService<'a> {
    /// Creates a new GroupService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreateGroupParam) -> Result<Group, AppError> {
        let group_repo = GroupRepository::new(self.db);
        let group = group_repo.create(param).await?;

        tracing::debug!("Created group {} ({})", group.groupid, group.group_name);

        Ok(group)
    }

    /// Looks up a single group by id or name.
    ///
    /// # Returns
    /// - `Ok(Some(Group))` - Group found
    /// - `Ok(None)` - No group matched
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn find(&self, lookup: GroupLookup) -> Result<Option<Group>, AppError> {
        let group_repo = GroupRepository::new(self.db);
        let group = match lookup {
            GroupLookup::Id(groupid) => group_repo.find_by_id(groupid).await?,
            GroupLookup::Name(name) => group_repo.find_by_name(&name).await?,
        };

        Ok(group)
    }

    /// Renames a group.
    ///
    /// # Returns
    /// - `Ok(Group)` - The renamed group
    /// - `Err(AppError::NotFound)` - No group with that id
    pub async fn update_name(&self, param: UpdateGroupNameParam) -> Result<Group, AppError> {
        let group_repo = GroupRepository::new(self.db);

        group_repo
            .update_name(param)
            .await?
            .ok_or_else(|| AppError::NotFound("Group not found".to_string()))
    }

    /// Deletes a group and its memberships.
    ///
    /// # Returns
    /// - `Ok(Group)` - The deleted group
    /// - `Err(AppError::NotFound)` - No group with that id; nothing was deleted
    pub async fn delete(&self, groupid: i32) -> Result<Group, AppError> {
        let group_repo = GroupRepository::new(self.db);
        let group = group_repo
            .delete(groupid)
            .await?
            .ok_or_else(|| AppError::NotFound("Group not found".to_string()))?;

        tracing::debug!("Deleted group {} ({})", group.groupid, group.group_name);

        Ok(group)
    }

    /// Gets every group ordered by name.
    pub async fn get_all(&self) -> Result<Vec<Group>, AppError> {
        let group_repo = GroupRepository::new(self.db);
        let groups = group_repo.get_all().await?;

        Ok(groups)
    }

    /// Gets a group's members ordered by name; empty for an unknown group.
    pub async fn get_members(&self, groupid: i32) -> Result<Vec<GroupMember>, AppError> {
        let membership_repo = MembershipRepository::new(self.db);
        let members = membership_repo.get_members(groupid).await?;

        Ok(members)
    }

    /// Gets the groups the named user belongs to; empty for an unknown or blank name.
    pub async fn get_groups_of_user(&self, username: Option<&str>) -> Result<Vec<Group>, AppError> {
        let Some(userid) = self.resolve_userid(username).await? else {
            return Ok(Vec::new());
        };

        let membership_repo = MembershipRepository::new(self.db);
        let groups = membership_repo.get_groups_of_user(userid).await?;

        Ok(groups)
    }

    /// Gets the groups the named user does not belong to.
    ///
    /// An unknown or blank name yields an empty list rather than every group.
    pub async fn get_groups_without_user(
        &self,
        username: Option<&str>,
    ) -> Result<Vec<Group>, AppError> {
        let Some(userid) = self.resolve_userid(username).await? else {
            return Ok(Vec::new());
        };

        let membership_repo = MembershipRepository::new(self.db);
        let groups = membership_repo.get_groups_without_user(userid).await?;

        Ok(groups)
    }

    /// Adds the named user to the named group.
    ///
    /// Joining a group the user is already in succeeds without inserting a second row.
    ///
    /// # Returns
    /// - `Ok(JoinedGroup)` - The membership and whether it was created by this call
    /// - `Err(AppError::NotFound)` - Unknown user or group
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn join(&self, param: JoinGroupParam) -> Result<JoinedGroup, AppError> {
        let user_repo = UserRepository::new(self.db);
        let user = user_repo
            .find_by_name(&param.username)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        let group_repo = GroupRepository::new(self.db);
        let group = group_repo
            .find_by_name(&param.groupname)
            .await?
            .ok_or_else(|| AppError::NotFound("Group not found".to_string()))?;

        let membership_repo = MembershipRepository::new(self.db);
        let joined = membership_repo.join(user.userid, group.groupid).await?;

        Ok(joined)
    }

    /// Removes the named user from a group.
    ///
    /// # Returns
    /// - `Ok(Membership)` - The removed membership
    /// - `Err(AppError::NotFound)` - Unknown user, or the user was not a member
    pub async fn leave(&self, param: LeaveGroupParam) -> Result<Membership, AppError> {
        let user_repo = UserRepository::new(self.db);
        let user = user_repo
            .find_by_name(&param.username)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        let membership_repo = MembershipRepository::new(self.db);

        membership_repo
            .leave(user.userid, param.groupid)
            .await?
            .ok_or_else(|| AppError::NotFound("Membership not found".to_string()))
    }

    async fn resolve_userid(&self, username: Option<&str>) -> Result<Option<i32>, AppError> {
        let Some(username) = username.map(str::trim).filter(|name| !name.is_empty()) else {
            return Ok(None);
        };

        let user_repo = UserRepository::new(self.db);
        let user = user_repo.find_by_name(username).await?;

        Ok(user.map(|user| user.userid))
    }
}
