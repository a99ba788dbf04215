//! Boardgame factory for seeding the read-only `boardgame` table in tests.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test boardgames with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::boardgame::BoardgameFactory;
///
/// let game = BoardgameFactory::new(&db)
///     .title("Azul")
///     .description("Tile drafting")
///     .build()
///     .await?;
/// ```
pub struct BoardgameFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    description: Option<String>,
    min_players: Option<i32>,
    max_players: Option<i32>,
    avg_rating: Option<f64>,
    price: Option<f64>,
    url: Option<String>,
}

impl<'a> BoardgameFactory<'a> {
    /// Creates a new BoardgameFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Game {id}"` where id is auto-incremented
    /// - players: 2 to 4
    /// - every other column: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            title: format!("Game {}", id),
            description: None,
            min_players: Some(2),
            max_players: Some(4),
            avg_rating: None,
            price: None,
            url: None,
        }
    }

    /// Sets the game title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the game description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the supported player count range.
    pub fn players(mut self, min_players: i32, max_players: i32) -> Self {
        self.min_players = Some(min_players);
        self.max_players = Some(max_players);
        self
    }

    /// Sets the average rating.
    pub fn avg_rating(mut self, avg_rating: f64) -> Self {
        self.avg_rating = Some(avg_rating);
        self
    }

    /// Sets the price.
    pub fn price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    /// Sets the store or info URL.
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Builds and inserts the boardgame entity into the database.
    pub async fn build(self) -> Result<entity::boardgame::Model, DbErr> {
        entity::boardgame::ActiveModel {
            gameid: ActiveValue::NotSet,
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(self.description),
            min_players: ActiveValue::Set(self.min_players),
            max_players: ActiveValue::Set(self.max_players),
            avg_rating: ActiveValue::Set(self.avg_rating),
            price: ActiveValue::Set(self.price),
            url: ActiveValue::Set(self.url),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a boardgame with default values.
pub async fn create_boardgame(db: &DatabaseConnection) -> Result<entity::boardgame::Model, DbErr> {
    BoardgameFactory::new(db).build().await
}

/// Creates a boardgame with a specific title and description.
pub async fn create_boardgame_with_title(
    db: &DatabaseConnection,
    title: impl Into<String>,
    description: impl Into<String>,
) -> Result<entity::boardgame::Model, DbErr> {
    BoardgameFactory::new(db)
        .title(title)
        .description(description)
        .build()
        .await
}
