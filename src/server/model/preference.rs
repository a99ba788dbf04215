//! Preference relation models.
//!
//! A user holds at most one row in each of the favorite-game, preferred-genre and
//! preferred-mechanic tables. [`PreferenceKind`] selects the table and [`Preference`]
//! carries the row regardless of which table it came from.

use crate::{
    model::user::{
        FavoriteGameDto, PreferredGenreDto, PreferredMechanicDto, SetFavoriteGameDto,
        SetPreferredGenreDto, SetPreferredMechanicDto,
    },
    server::{error::AppError, model::require},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreferenceKind {
    /// `user_favorite_game`, target is a `boardgame.gameid`
    FavoriteGame,
    /// `user_preferred_genre`
    Genre,
    /// `user_preferred_mechanic`
    Mechanic,
}

/// The single row a user holds in one preference relation.
#[derive(Debug, Clone, PartialEq)]
pub struct Preference {
    pub userid: i32,
    pub kind: PreferenceKind,
    pub target_id: i32,
}

impl Preference {
    pub fn into_favorite_game_dto(self) -> FavoriteGameDto {
        FavoriteGameDto {
            userid: self.userid,
            gameid: self.target_id,
        }
    }

    pub fn into_preferred_genre_dto(self) -> PreferredGenreDto {
        PreferredGenreDto {
            userid: self.userid,
            genreid: self.target_id,
        }
    }

    pub fn into_preferred_mechanic_dto(self) -> PreferredMechanicDto {
        PreferredMechanicDto {
            userid: self.userid,
            mechanicid: self.target_id,
        }
    }
}

/// Parameters for replacing a user's row in one preference relation.
#[derive(Debug, Clone)]
pub struct SetPreferenceParam {
    pub userid: i32,
    pub kind: PreferenceKind,
    pub target_id: i32,
}

impl TryFrom<SetFavoriteGameDto> for SetPreferenceParam {
    type Error = AppError;

    fn try_from(dto: SetFavoriteGameDto) -> Result<Self, Self::Error> {
        Ok(Self {
            userid: require(dto.userid, "userid is required")?,
            kind: PreferenceKind::FavoriteGame,
            target_id: require(dto.gameid, "gameid is required")?,
        })
    }
}

impl TryFrom<SetPreferredGenreDto> for SetPreferenceParam {
    type Error = AppError;

    fn try_from(dto: SetPreferredGenreDto) -> Result<Self, Self::Error> {
        Ok(Self {
            userid: require(dto.userid, "userid is required")?,
            kind: PreferenceKind::Genre,
            target_id: require(dto.genreid, "genreid is required")?,
        })
    }
}

impl TryFrom<SetPreferredMechanicDto> for SetPreferenceParam {
    type Error = AppError;

    fn try_from(dto: SetPreferredMechanicDto) -> Result<Self, Self::Error> {
        Ok(Self {
            userid: require(dto.userid, "userid is required")?,
            kind: PreferenceKind::Mechanic,
            target_id: require(dto.mechanicid, "mechanicid is required")?,
        })
    }
}
