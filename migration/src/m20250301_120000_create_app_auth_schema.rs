use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(&format!(
                "CREATE SCHEMA IF NOT EXISTS {};",
                entity::SCHEMA_NAME
            ))
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // CASCADE drops every collection in the schema
        manager
            .get_connection()
            .execute_unprepared(&format!(
                "DROP SCHEMA IF EXISTS {} CASCADE;",
                entity::SCHEMA_NAME
            ))
            .await?;

        Ok(())
    }
}
