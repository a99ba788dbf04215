//! Boardgame data repository. The catalogue is read-only to the API.

use sea_orm::{
    Condition, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{data::expr::contains_ignore_case, model::boardgame::Boardgame};

pub struct BoardgameRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BoardgameRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns whether a game with the given id exists.
    pub async fn exists(&self, gameid: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Boardgame::find_by_id(gameid)
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Searches games by case-insensitive substring over title or description.
    ///
    /// Results are ordered by title. `None` returns the whole catalogue.
    pub async fn search(&self, query: Option<&str>) -> Result<Vec<Boardgame>, DbErr> {
        let mut select = entity::prelude::Boardgame::find();
        if let Some(query) = query {
            select = select.filter(
                Condition::any()
                    .add(contains_ignore_case(entity::boardgame::Column::Title, query))
                    .add(contains_ignore_case(
                        entity::boardgame::Column::Description,
                        query,
                    )),
            );
        }

        let entities = select
            .order_by_asc(entity::boardgame::Column::Title)
            .order_by_asc(entity::boardgame::Column::Gameid)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Boardgame::from_entity).collect())
    }
}
