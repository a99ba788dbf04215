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
                    .table(UserPreferredMechanic::Table)
                    .if_not_exists()
                    .col(integer(UserPreferredMechanic::Userid).primary_key())
                    .col(integer(UserPreferredMechanic::Mechanicid))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_preferred_mechanic_userid")
                            .from(UserPreferredMechanic::Table, UserPreferredMechanic::Userid)
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
            .drop_table(Table::drop().table(UserPreferredMechanic::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum UserPreferredMechanic {
    Table,
    Userid,
    Mechanicid,
}
