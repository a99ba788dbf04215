use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::model::lenient::deserialize_optional;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct GroupDto {
    pub groupid: i32,
    pub group_name: String,
    pub age_limit: Option<i32>,
    pub budget: Option<f64>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct GroupMemberDto {
    pub userid: i32,
    pub name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct MembershipDto {
    pub userid: i32,
    pub groupid: i32,
}

#[derive(Deserialize, Debug, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FindGroupQuery {
    #[serde(default, deserialize_with = "deserialize_optional")]
    pub groupid: Option<i32>,
    #[serde(default)]
    pub groupname: Option<String>,
}

#[derive(Deserialize, Debug, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GroupIdQuery {
    #[serde(default, deserialize_with = "deserialize_optional")]
    pub groupid: Option<i32>,
}

#[derive(Deserialize, Debug, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct UsernameQuery {
    #[serde(default)]
    pub username: Option<String>,
}

#[derive(Deserialize, Debug, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateGroupDto {
    #[serde(default)]
    pub group_name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional")]
    pub age_limit: Option<i32>,
    #[serde(default, deserialize_with = "deserialize_optional")]
    pub budget: Option<f64>,
}

#[derive(Deserialize, Debug, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGroupNameDto {
    #[serde(default, deserialize_with = "deserialize_optional")]
    pub groupid: Option<i32>,
    #[serde(default)]
    pub group_name: Option<String>,
}

#[derive(Deserialize, Debug, Default, ToSchema)]
pub struct DeleteGroupDto {
    #[serde(default, deserialize_with = "deserialize_optional")]
    pub groupid: Option<i32>,
}

#[derive(Deserialize, Debug, Default, ToSchema)]
pub struct JoinGroupDto {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub groupname: Option<String>,
}

#[derive(Deserialize, Debug, Default, ToSchema)]
pub struct LeaveGroupDto {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional")]
    pub groupid: Option<i32>,
}
