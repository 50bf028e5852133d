use crate::error::Error;
use entity_api::user;
use sea_orm::ConnectionTrait;
use serde_json::Value as JsonValue;

/// Every document of the `users` collection, unfiltered.
///
/// No caller identity is checked: the server is an internal tool and access
/// control belongs to whatever fronts it.
pub async fn find_all_documents(db: &impl ConnectionTrait) -> Result<Vec<JsonValue>, Error> {
    Ok(user::find_all_documents(db).await?)
}
