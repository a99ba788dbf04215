use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::model::lenient::deserialize_optional;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct UserDto {
    pub userid: i32,
    pub name: String,
    pub age: Option<i32>,
    pub budget: Option<f64>,
}

/// A user row enriched with the id held by each preference relation.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct UserProfileDto {
    pub userid: i32,
    pub name: String,
    pub age: Option<i32>,
    pub budget: Option<f64>,
    pub gameid: Option<i32>,
    pub genreid: Option<i32>,
    pub mechanicid: Option<i32>,
}

#[derive(Deserialize, Debug, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FindUserQuery {
    #[serde(default, deserialize_with = "deserialize_optional")]
    pub userid: Option<i32>,
    #[serde(default)]
    pub username: Option<String>,
}

#[derive(Deserialize, Debug, Default, ToSchema)]
pub struct CreateUserDto {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional")]
    pub age: Option<i32>,
    #[serde(default, deserialize_with = "deserialize_optional")]
    pub budget: Option<f64>,
}

#[derive(Deserialize, Debug, Default, ToSchema)]
pub struct UpdateUserInfoDto {
    #[serde(default, deserialize_with = "deserialize_optional")]
    pub userid: Option<i32>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional")]
    pub age: Option<i32>,
}

#[derive(Deserialize, Debug, Default, ToSchema)]
pub struct UpdateBudgetDto {
    #[serde(default, deserialize_with = "deserialize_optional")]
    pub userid: Option<i32>,
    #[serde(default, deserialize_with = "deserialize_optional")]
    pub budget: Option<f64>,
}

#[derive(Deserialize, Debug, Default, ToSchema)]
pub struct SetFavoriteGameDto {
    #[serde(default, deserialize_with = "deserialize_optional")]
    pub userid: Option<i32>,
    #[serde(default, deserialize_with = "deserialize_optional")]
    pub gameid: Option<i32>,
}

#[derive(Deserialize, Debug, Default, ToSchema)]
pub struct SetPreferredGenreDto {
    #[serde(default, deserialize_with = "deserialize_optional")]
    pub userid: Option<i32>,
    #[serde(default, deserialize_with = "deserialize_optional")]
    pub genreid: Option<i32>,
}

#[derive(Deserialize, Debug, Default, ToSchema)]
pub struct SetPreferredMechanicDto {
    #[serde(default, deserialize_with = "deserialize_optional")]
    pub userid: Option<i32>,
    #[serde(default, deserialize_with = "deserialize_optional")]
    pub mechanicid: Option<i32>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct FavoriteGameDto {
    pub userid: i32,
    pub gameid: i32,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct PreferredGenreDto {
    pub userid: i32,
    pub genreid: i32,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct PreferredMechanicDto {
    pub userid: i32,
    pub mechanicid: i32,
}

#[derive(Deserialize, Debug, Default, ToSchema)]
pub struct DeleteUserDto {
    #[serde(default, deserialize_with = "deserialize_optional")]
    pub userid: Option<i32>,
}
