use super::error::Error;
use chrono::Utc;
use entity::users::{ActiveModel, Column, Entity, Model};
use log::*;
use sea_orm::{entity::prelude::*, ConnectionTrait, QueryOrder, Set};
use serde_json::Value as JsonValue;

/// Stores `document` as a new record of the `users` collection.
pub async fn create(db: &impl ConnectionTrait, document: JsonValue) -> Result<Model, Error> {
    debug!("New user document to be inserted: {document}");

    let now = Utc::now();
    let user_active_model = ActiveModel {
        document: Set(document),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
        ..Default::default()
    };

    Ok(user_active_model.insert(db).await?)
}

/// Unfiltered, unpaginated read of the whole `users` collection, oldest first.
pub async fn find_all(db: &impl ConnectionTrait) -> Result<Vec<Model>, Error> {
    Ok(Entity::find()
        .order_by_asc(Column::CreatedAt)
        .all(db)
        .await?)
}

/// The stored documents of the `users` collection, verbatim.
pub async fn find_all_documents(db: &impl ConnectionTrait) -> Result<Vec<JsonValue>, Error> {
    let users = find_all(db).await?;
    debug!("Read {} user document(s)", users.len());

    Ok(users.into_iter().map(|user| user.document).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use entity::Id;
    use sea_orm::{DatabaseBackend, MockDatabase};
    use serde_json::json;

    fn user_model(document: JsonValue) -> Model {
        let now = Utc::now();
        Model {
            id: Id::new_v4(),
            document,
            created_at: now.into(),
            updated_at: now.into(),
        }
    }

    #[tokio::test]
    async fn find_all_documents_returns_every_stored_document_verbatim() -> Result<(), Error> {
        let alice = json!({"name": "Alice", "email": "alice@example.com", "roles": ["admin"]});
        let bob = json!({"name": "Bob", "email": "bob@example.com", "active": false});

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![user_model(alice.clone()), user_model(bob.clone())]])
            .into_connection();

        let documents = find_all_documents(&db).await?;

        assert_eq!(documents, vec![alice, bob]);
        Ok(())
    }

    #[tokio::test]
    async fn find_all_documents_of_an_empty_collection_is_empty() -> Result<(), Error> {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<Model>::new()])
            .into_connection();

        assert!(find_all_documents(&db).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn find_all_issues_a_single_unfiltered_select() -> Result<(), Error> {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<Model>::new()])
            .into_connection();

        find_all(&db).await?;

        let log = db.into_transaction_log();
        assert_eq!(log.len(), 1);
        let sql = &log[0].statements()[0].sql;
        assert!(sql.contains(r#"FROM "app_auth"."users""#));
        assert!(!sql.contains("WHERE"));
        assert!(!sql.contains("LIMIT"));
        Ok(())
    }

    #[tokio::test]
    async fn create_stores_the_document() -> Result<(), Error> {
        let document = json!({"name": "Carol"});
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[user_model(document.clone())]])
            .into_connection();

        let created = create(&db, document.clone()).await?;

        assert_eq!(created.document, document);
        Ok(())
    }
}
