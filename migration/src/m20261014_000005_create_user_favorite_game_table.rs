use sea_orm_migration::{prelude::*, schema::*};

use super::m20261014_000001_create_single_user_table::SingleUser;
use super::m20261014_000004_create_boardgame_table::Boardgame;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserFavoriteGame::Table)
                    .if_not_exists()
                    .col(integer(UserFavoriteGame::Userid).primary_key())
                    .col(integer(UserFavoriteGame::Gameid))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_favorite_game_userid")
                            .from(UserFavoriteGame::Table, UserFavoriteGame::Userid)
                            .to(SingleUser::Table, SingleUser::Userid)
                            .on_delete(ForeignKeyAction::NoAction)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_favorite_game_gameid")
                            .from(UserFavoriteGame::Table, UserFavoriteGame::Gameid)
                            .to(Boardgame::Table, Boardgame::Gameid)
                            .on_delete(ForeignKeyAction::NoAction)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserFavoriteGame::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum UserFavoriteGame {
    Table,
    Userid,
    Gameid,
}
