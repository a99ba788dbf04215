//! Parameters for the combined user/club listing.

use crate::{
    model::search::SearchQuery,
    server::{error::AppError, model::non_blank},
};

/// Which listing a search request targets, with its optional name filter.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchTarget {
    /// `table=users`; filter applies to `single_user.name`
    Users { name: Option<String> },
    /// `table=clubs`; filter applies to `group_team.group_name`
    Clubs { group_name: Option<String> },
}

impl TryFrom<SearchQuery> for SearchTarget {
    type Error = AppError;

    fn try_from(query: SearchQuery) -> Result<Self, Self::Error> {
        match query.table.as_deref().map(str::trim) {
            Some("users") => Ok(Self::Users {
                name: non_blank(query.name),
            }),
            Some("clubs") => Ok(Self::Clubs {
                group_name: non_blank(query.group_name),
            }),
            Some(other) => Err(AppError::BadRequest(format!("Unknown table '{}'", other))),
            None => Err(AppError::BadRequest("table is required".to_string())),
        }
    }
}
