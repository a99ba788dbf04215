//! Search service for the listing and game search endpoints.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{boardgame::BoardgameRepository, group::GroupRepository, user::UserRepository},
    error::AppError,
    model::{boardgame::Boardgame, group::Group, search::SearchTarget, user::User},
};

/// Rows produced by a user/club search.
#[derive(Debug)]
pub enum SearchRows {
    Users(Vec<User>),
    Clubs(Vec<Group>),
}

pub struct SearchService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> SearchService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists users ordered by id or clubs ordered by groupid, with an optional
    /// case-insensitive substring filter on the name.
    pub async fn search(&self, target: SearchTarget) -> Result<SearchRows, AppError> {
        let rows = match target {
            SearchTarget::Users { name } => {
                let user_repo = UserRepository::new(self.db);
                SearchRows::Users(user_repo.search(name.as_deref()).await?)
            }
            SearchTarget::Clubs { group_name } => {
                let group_repo = GroupRepository::new(self.db);
                SearchRows::Clubs(group_repo.search(group_name.as_deref()).await?)
            }
        };

        Ok(rows)
    }

    /// Searches games by title or description; an empty query returns every game.
    pub async fn search_games(&self, query: Option<&str>) -> Result<Vec<Boardgame>, AppError> {
        let query = query.filter(|q| !q.is_empty());

        let boardgame_repo = BoardgameRepository::new(self.db);
        let games = boardgame_repo.search(query).await?;

        Ok(games)
    }
}
