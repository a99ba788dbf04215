use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Deserialize, Debug, Default, IntoParams)]
#[into_params(parameter_in = Query)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuery {
    /// `users` or `clubs`
    #[serde(default)]
    pub table: Option<String>,
    /// Substring filter on user names when `table=users`
    #[serde(default)]
    pub name: Option<String>,
    /// Substring filter on group names when `table=clubs`
    #[serde(default)]
    pub group_name: Option<String>,
}

#[derive(Deserialize, Debug, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GameSearchQuery {
    #[serde(default)]
    pub q: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct DatumDto {
    pub datum: String,
}

/// `{data: [{datum}]}` body of the user name listing.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct DataDto {
    pub data: Vec<DatumDto>,
}
