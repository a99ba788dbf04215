use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SingleUser::Table)
                    .if_not_exists()
                    .col(pk_auto(SingleUser::Userid))
                    .col(string(SingleUser::Name))
                    .col(integer_null(SingleUser::Age))
                    .col(double_null(SingleUser::Budget))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SingleUser::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SingleUser {
    Table,
    Userid,
    Name,
    Age,
    Budget,
}
