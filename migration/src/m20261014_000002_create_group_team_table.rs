use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GroupTeam::Table)
                    .if_not_exists()
                    .col(pk_auto(GroupTeam::Groupid))
                    .col(string(GroupTeam::GroupName))
                    .col(integer_null(GroupTeam::AgeLimit))
                    .col(double_null(GroupTeam::Budget))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GroupTeam::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GroupTeam {
    Table,
    Groupid,
    GroupName,
    AgeLimit,
    Budget,
}
