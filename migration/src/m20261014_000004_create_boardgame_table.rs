use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Boardgame::Table)
                    .if_not_exists()
                    .col(pk_auto(Boardgame::Gameid))
                    .col(string(Boardgame::Title))
                    .col(text_null(Boardgame::Description))
                    .col(integer_null(Boardgame::MinPlayers))
                    .col(integer_null(Boardgame::MaxPlayers))
                    .col(double_null(Boardgame::AvgRating))
                    .col(double_null(Boardgame::Price))
                    .col(string_null(Boardgame::Url))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_boardgame_title")
                    .table(Boardgame::Table)
                    .col(Boardgame::Title)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Boardgame::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Boardgame {
    Table,
    Gameid,
    Title,
    Description,
    MinPlayers,
    MaxPlayers,
    AvgRating,
    Price,
    Url,
}
