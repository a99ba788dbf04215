//! Group domain models and parameters.
//!
//! Defines the group and membership domain models, the lookup and parameter types
//! for group operations, and conversions from entity models and into DTOs.

use crate::{
    model::group::{
        CreateGroupDto, FindGroupQuery, GroupDto, GroupMemberDto, JoinGroupDto, LeaveGroupDto,
        MembershipDto, UpdateGroupNameDto,
    },
    server::{
        error::AppError,
        model::{non_blank, require},
    },
};

/// A row of `group_team`.
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    /// Database-assigned id, immutable once created.
    pub groupid: i32,
    pub group_name: String,
    pub age_limit: Option<i32>,
    pub budget: Option<f64>,
}

impl Group {
    pub fn into_dto(self) -> GroupDto {
        GroupDto {
            groupid: self.groupid,
            group_name: self.group_name,
            age_limit: self.age_limit,
            budget: self.budget,
        }
    }

    pub fn from_entity(entity: entity::group_team::Model) -> Self {
        Self {
            groupid: entity.groupid,
            group_name: entity.group_name,
            age_limit: entity.age_limit,
            budget: entity.budget,
        }
    }
}

/// A member listed for a group: just the user's id and name.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupMember {
    pub userid: i32,
    pub name: String,
}

impl GroupMember {
    pub fn into_dto(self) -> GroupMemberDto {
        GroupMemberDto {
            userid: self.userid,
            name: self.name,
        }
    }

    pub fn from_entity(entity: entity::single_user::Model) -> Self {
        Self {
            userid: entity.userid,
            name: entity.name,
        }
    }
}

/// A row of `in_group`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Membership {
    pub userid: i32,
    pub groupid: i32,
}

impl Membership {
    pub fn into_dto(self) -> MembershipDto {
        MembershipDto {
            userid: self.userid,
            groupid: self.groupid,
        }
    }
}

/// Result of a join request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinedGroup {
    pub membership: Membership,
    /// `false` when the user already belonged to the group and nothing was inserted.
    pub newly_joined: bool,
}

/// How a single group is identified in a lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum GroupLookup {
    Id(i32),
    /// Matched case- and surrounding-whitespace-insensitively.
    Name(String),
}

impl TryFrom<FindGroupQuery> for GroupLookup {
    type Error = AppError;

    fn try_from(query: FindGroupQuery) -> Result<Self, Self::Error> {
        match (query.groupid, non_blank(query.groupname)) {
            (Some(groupid), None) => Ok(Self::Id(groupid)),
            (None, Some(groupname)) => Ok(Self::Name(groupname)),
            (Some(_), Some(_)) => Err(AppError::BadRequest(
                "Provide either groupid or groupname, not both".to_string(),
            )),
            (None, None) => Err(AppError::BadRequest(
                "groupid or groupname is required".to_string(),
            )),
        }
    }
}

/// Parameters for creating a new group.
#[derive(Debug, Clone)]
pub struct CreateGroupParam {
    pub group_name: String,
    pub age_limit: Option<i32>,
    pub budget: Option<f64>,
}

impl TryFrom<CreateGroupDto> for CreateGroupParam {
    type Error = AppError;

    fn try_from(dto: CreateGroupDto) -> Result<Self, Self::Error> {
        Ok(Self {
            group_name: require(non_blank(dto.group_name), "Group name is required")?,
            age_limit: dto.age_limit,
            budget: dto.budget,
        })
    }
}

/// Parameters for renaming a group.
#[derive(Debug, Clone)]
pub struct UpdateGroupNameParam {
    pub groupid: i32,
    pub group_name: String,
}

impl TryFrom<UpdateGroupNameDto> for UpdateGroupNameParam {
    type Error = AppError;

    fn try_from(dto: UpdateGroupNameDto) -> Result<Self, Self::Error> {
        Ok(Self {
            groupid: require(dto.groupid, "groupid is required")?,
            group_name: require(non_blank(dto.group_name), "Group name is required")?,
        })
    }
}

/// Parameters for adding a user to a group, both resolved by name.
#[derive(Debug, Clone)]
pub struct JoinGroupParam {
    pub username: String,
    pub groupname: String,
}

impl TryFrom<JoinGroupDto> for JoinGroupParam {
    type Error = AppError;

    fn try_from(dto: JoinGroupDto) -> Result<Self, Self::Error> {
        Ok(Self {
            username: require(non_blank(dto.username), "username is required")?,
            groupname: require(non_blank(dto.groupname), "groupname is required")?,
        })
    }
}

/// Parameters for removing a user, resolved by name, from a group.
#[derive(Debug, Clone)]
pub struct LeaveGroupParam {
    pub username: String,
    pub groupid: i32,
}

impl TryFrom<LeaveGroupDto> for LeaveGroupParam {
    type Error = AppError;

    fn try_from(dto: LeaveGroupDto) -> Result<Self, Self::Error> {
        Ok(Self {
            username: require(non_blank(dto.username), "username is required")?,
            groupid: require(dto.groupid, "groupid is required")?,
        })
    }
}
