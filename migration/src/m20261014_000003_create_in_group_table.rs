use sea_orm_migration::{prelude::*, schema::*};

use super::m20261014_000001_create_single_user_table::SingleUser;
use super::m20261014_000002_create_group_team_table::GroupTeam;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(InGroup::Table)
                    .if_not_exists()
                    .col(integer(InGroup::Userid))
                    .col(integer(InGroup::Groupid))
                    .primary_key(
                        Index::create()
                            .name("pk_in_group")
                            .col(InGroup::Userid)
                            .col(InGroup::Groupid),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_in_group_userid")
                            .from(InGroup::Table, InGroup::Userid)
                            .to(SingleUser::Table, SingleUser::Userid)
                            .on_delete(ForeignKeyAction::NoAction)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_in_group_groupid")
                            .from(InGroup::Table, InGroup::Groupid)
                            .to(GroupTeam::Table, GroupTeam::Groupid)
                            .on_delete(ForeignKeyAction::NoAction)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(InGroup::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum InGroup {
    Table,
    Userid,
    Groupid,
}
