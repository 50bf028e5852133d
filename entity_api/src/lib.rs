use log::info;
use sea_orm::ConnectionTrait;
use serde_json::json;

pub use entity::{users, Id};

pub mod error;
pub mod user;

/// Inserts a pair of demo user documents into the `users` collection.
pub async fn seed_database(db: &impl ConnectionTrait) -> Result<(), error::Error> {
    let documents = [
        json!({
            "username": "ada",
            "email": "ada@example.com",
            "display_name": "Ada Lovelace",
            "roles": ["admin"],
        }),
        json!({
            "username": "grace",
            "email": "grace@example.com",
            "display_name": "Grace Hopper",
            "roles": ["user"],
        }),
    ];

    for document in documents {
        let created = user::create(db, document).await?;
        info!("Seeded user document {}", created.id);
    }

    Ok(())
}
