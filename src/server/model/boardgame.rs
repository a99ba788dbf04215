//! Boardgame domain model. Games are read-only to this application.

use crate::model::boardgame::BoardgameDto;

#[derive(Debug, Clone, PartialEq)]
pub struct Boardgame {
    pub gameid: i32,
    pub title: String,
    pub description: Option<String>,
    pub min_players: Option<i32>,
    pub max_players: Option<i32>,
    pub avg_rating: Option<f64>,
    pub price: Option<f64>,
    pub url: Option<String>,
}

impl Boardgame {
    pub fn into_dto(self) -> BoardgameDto {
        BoardgameDto {
            gameid: self.gameid,
            title: self.title,
            description: self.description,
            min_players: self.min_players,
            max_players: self.max_players,
            avg_rating: self.avg_rating,
            price: self.price,
            url: self.url,
        }
    }

    pub fn from_entity(entity: entity::boardgame::Model) -> Self {
        Self {
            gameid: entity.gameid,
            title: entity.title,
            description: entity.description,
            min_players: entity.min_players,
            max_players: entity.max_players,
            avg_rating: entity.avg_rating,
            price: entity.price,
            url: entity.url,
        }
    }
}
