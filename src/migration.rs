pub use sea_orm_migration::prelude::*;

mod m20240301_000001_create_wash_sessions;
mod m20240301_000002_create_scores;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    // Override the name of migration table to avoid conflicts
    fn migration_table_name() -> sea_orm::DynIden {
        Alias::new("wash_ledger_migrations").into_iden()
    }

    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240301_000001_create_wash_sessions::Migration),
            Box::new(m20240301_000002_create_scores::Migration),
        ]
    }
}
