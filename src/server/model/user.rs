//! User domain models and parameters.
//!
//! Provides the user domain model and the parameter types for creating, looking up,
//! and updating users. Preference ids are attached through [`UserProfile`].

use crate::{
    model::user::{
        CreateUserDto, FindUserQuery, UpdateBudgetDto, UpdateUserInfoDto, UserDto,
        UserProfileDto,
    },
    server::{
        error::AppError,
        model::{non_blank, require},
    },
};

/// A row of `single_user`.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// Database-assigned id, immutable once created.
    pub userid: i32,
    pub name: String,
    pub age: Option<i32>,
    pub budget: Option<f64>,
}

impl User {
    /// Converts the user domain model to a DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            userid: self.userid,
            name: self.name,
            age: self.age,
            budget: self.budget,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::single_user::Model) -> Self {
        Self {
            userid: entity.userid,
            name: entity.name,
            age: entity.age,
            budget: entity.budget,
        }
    }
}

/// A user together with the single target id of each preference relation.
#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub user: User,
    pub gameid: Option<i32>,
    pub genreid: Option<i32>,
    pub mechanicid: Option<i32>,
}

impl UserProfile {
    pub fn into_dto(self) -> UserProfileDto {
        UserProfileDto {
            userid: self.user.userid,
            name: self.user.name,
            age: self.user.age,
            budget: self.user.budget,
            gameid: self.gameid,
            genreid: self.genreid,
            mechanicid: self.mechanicid,
        }
    }
}

/// How a single user is identified in a lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum UserLookup {
    Id(i32),
    /// Matched case- and surrounding-whitespace-insensitively.
    Name(String),
}

impl TryFrom<FindUserQuery> for UserLookup {
    type Error = AppError;

    /// Exactly one of `userid` / `username` must be supplied; blank counts as absent.
    fn try_from(query: FindUserQuery) -> Result<Self, Self::Error> {
        match (query.userid, non_blank(query.username)) {
            (Some(userid), None) => Ok(Self::Id(userid)),
            (None, Some(username)) => Ok(Self::Name(username)),
            (Some(_), Some(_)) => Err(AppError::BadRequest(
                "Provide either userid or username, not both".to_string(),
            )),
            (None, None) => Err(AppError::BadRequest(
                "userid or username is required".to_string(),
            )),
        }
    }
}

/// Parameters for creating a new user.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub name: String,
    pub age: Option<i32>,
    pub budget: Option<f64>,
}

impl TryFrom<CreateUserDto> for CreateUserParam {
    type Error = AppError;

    fn try_from(dto: CreateUserDto) -> Result<Self, Self::Error> {
        Ok(Self {
            name: require(non_blank(dto.name), "Name is required")?,
            age: dto.age,
            budget: dto.budget,
        })
    }
}

/// Parameters for a partial update of a user's name and/or age.
///
/// At least one of the two fields is always present.
#[derive(Debug, Clone)]
pub struct UpdateUserInfoParam {
    pub userid: i32,
    pub name: Option<String>,
    pub age: Option<i32>,
}

impl TryFrom<UpdateUserInfoDto> for UpdateUserInfoParam {
    type Error = AppError;

    fn try_from(dto: UpdateUserInfoDto) -> Result<Self, Self::Error> {
        let userid = require(dto.userid, "userid is required")?;
        let name = non_blank(dto.name);

        if name.is_none() && dto.age.is_none() {
            return Err(AppError::BadRequest(
                "Provide a new name and/or age".to_string(),
            ));
        }

        Ok(Self {
            userid,
            name,
            age: dto.age,
        })
    }
}

/// Parameters for replacing a user's budget.
#[derive(Debug, Clone)]
pub struct UpdateBudgetParam {
    pub userid: i32,
    pub budget: f64,
}

impl TryFrom<UpdateBudgetDto> for UpdateBudgetParam {
    type Error = AppError;

    fn try_from(dto: UpdateBudgetDto) -> Result<Self, Self::Error> {
        Ok(Self {
            userid: require(dto.userid, "userid is required")?,
            budget: require(dto.budget, "budget is required")?,
        })
    }
}
