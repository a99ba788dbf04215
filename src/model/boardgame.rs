use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct BoardgameDto {
    pub gameid: i32,
    pub title: String,
    pub description: Option<String>,
    pub min_players: Option<i32>,
    pub max_players: Option<i32>,
    pub avg_rating: Option<f64>,
    pub price: Option<f64>,
    pub url: Option<String>,
}
