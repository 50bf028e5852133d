pub use sea_orm_migration::prelude::*;

mod m20250301_120000_create_app_auth_schema;
mod m20250301_120500_create_users_collection;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_120000_create_app_auth_schema::Migration),
            Box::new(m20250301_120500_create_users_collection::Migration),
        ]
    }
}

/// Creates the collections' schema ahead of `Migrator::up`. The connection's search path
/// points at this schema, so the migrations table is created inside it.
pub async fn prepare_schema<C: ConnectionTrait>(db: &C) -> Result<(), DbErr> {
    db.execute_unprepared(&format!(
        "CREATE SCHEMA IF NOT EXISTS {};",
        entity::SCHEMA_NAME
    ))
    .await?;

    Ok(())
}
