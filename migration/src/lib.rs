pub use sea_orm_migration::prelude::*;

mod m20261014_000001_create_single_user_table;
mod m20261014_000002_create_group_team_table;
mod m20261014_000003_create_in_group_table;
mod m20261014_000004_create_boardgame_table;
mod m20261014_000005_create_user_favorite_game_table;
mod m20261014_000006_create_user_preferred_genre_table;
mod m20261014_000007_create_user_preferred_mechanic_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261014_000001_create_single_user_table::Migration),
            Box::new(m20261014_000002_create_group_team_table::Migration),
            Box::new(m20261014_000003_create_in_group_table::Migration),
            Box::new(m20261014_000004_create_boardgame_table::Migration),
            Box::new(m20261014_000005_create_user_favorite_game_table::Migration),
            Box::new(m20261014_000006_create_user_preferred_genre_table::Migration),
            Box::new(m20261014_000007_create_user_preferred_mechanic_table::Migration),
        ]
    }
}
