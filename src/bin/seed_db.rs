use log::{error, info};
use migration::{Migrator, MigratorTrait};
use service::{config::Config, logging::Logger};

#[tokio::main]
async fn main() {
    let config = Config::new();
    if let Err(e) = Logger::init_logger(&config) {
        eprintln!("Failed to start logger: {e}");
    }

    if config.is_production() {
        error!("Refusing to seed demo user documents into a production database");
        std::process::exit(1);
    }

    info!("Seeding database [{}]...", config.database_url());

    let db = match service::init_database(&config).await {
        Ok(db) => db,
        Err(e) => {
            error!("Failed to establish database connection: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = migration::prepare_schema(&db).await {
        error!("Failed to create the {} schema: {e}", service::config::DATABASE_SCHEMA);
        std::process::exit(1);
    }

    if let Err(e) = Migrator::up(&db, None).await {
        error!("Failed to run migrations: {e}");
        std::process::exit(1);
    }

    if let Err(e) = entity_api::seed_database(&db).await {
        error!("Failed to seed user documents: {e}");
        std::process::exit(1);
    }

    info!("Seeding complete");
}
