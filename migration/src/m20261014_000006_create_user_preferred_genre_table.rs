use sea_orm_migration::{prelude::*, schema::*};

use super::m20261014_000001_create_single_user_table::SingleUser;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserPreferredGenre::Table)
                    .if_not_exists()
                    .col(integer(UserPreferredGenre::Userid).primary_key())
                    .col(integer(UserPreferredGenre::Genreid))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_preferred_genre_userid")
                            .from(UserPreferredGenre::Table, UserPreferredGenre::Userid)
                            .to(SingleUser::Table, SingleUser::Userid)
                            .on_delete(ForeignKeyAction::NoAction)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserPreferredGenre::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum UserPreferredGenre {
    Table,
    Userid,
    Genreid,
}
