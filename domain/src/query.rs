//! The closed set of queries the query endpoint understands.

use crate::error::Error;
use crate::user;
use log::*;
use serde_json::Value as JsonValue;
use service::Storage;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Query {
    /// All documents of the `users` collection as a JSON array.
    GetUserData,
}

impl Query {
    pub const ALL: [Query; 1] = [Query::GetUserData];

    pub fn name(&self) -> &'static str {
        match self {
            Query::GetUserData => "get_user_data",
        }
    }

    /// Resolves a requested query name. A missing name is treated like an unknown one.
    pub fn from_name(name: Option<&str>) -> Result<Self, Error> {
        name.ok_or_else(Error::unknown_query)?.parse()
    }

    /// Runs the query against the document store.
    ///
    /// Fails with a storage-unavailable error, without touching anything,
    /// while the store connection is not established.
    pub async fn execute(self, storage: &Storage) -> Result<JsonValue, Error> {
        let db = storage.connection().ok_or_else(|| {
            warn!("Query {self} requested before the document store is ready");
            Error::storage_unavailable()
        })?;

        debug!("Executing query {self}");

        match self {
            Query::GetUserData => Ok(JsonValue::Array(user::find_all_documents(db).await?)),
        }
    }
}

impl FromStr for Query {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|query| query.name() == name)
            .ok_or_else(Error::unknown_query)
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{DomainErrorKind, EntityErrorKind, ExternalErrorKind, InternalErrorKind};
    use chrono::Utc;
    use entity_api::{users, Id};
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, RuntimeErr};
    use serde_json::json;

    fn user_model(document: JsonValue) -> users::Model {
        let now = Utc::now();
        users::Model {
            id: Id::new_v4(),
            document,
            created_at: now.into(),
            updated_at: now.into(),
        }
    }

    #[test]
    fn get_user_data_is_recognized_by_name() {
        assert_eq!("get_user_data".parse::<Query>().unwrap(), Query::GetUserData);
        assert_eq!(Query::GetUserData.to_string(), "get_user_data");
    }

    #[test]
    fn unrecognized_names_are_rejected() {
        for name in ["delete_everything", "", "GET_USER_DATA", "get_user_data "] {
            let error = name.parse::<Query>().unwrap_err();
            assert_eq!(
                error.error_kind,
                DomainErrorKind::Internal(InternalErrorKind::UnknownQuery),
                "{name:?} should be rejected"
            );
        }
    }

    #[test]
    fn missing_name_is_an_unknown_query() {
        let error = Query::from_name(None).unwrap_err();
        assert_eq!(
            error.error_kind,
            DomainErrorKind::Internal(InternalErrorKind::UnknownQuery)
        );
    }

    #[tokio::test]
    async fn get_user_data_returns_the_stored_documents_as_an_array() {
        let alice = json!({"name": "Alice"});
        let bob = json!({"name": "Bob", "tags": [1, 2]});
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![user_model(alice.clone()), user_model(bob.clone())]])
            .into_connection();
        let storage = Storage::ready(db);

        let result = Query::GetUserData.execute(&storage).await.unwrap();

        assert_eq!(result, json!([alice, bob]));
    }

    #[tokio::test]
    async fn execute_without_a_connection_is_storage_unavailable() {
        let storage = Storage::new();

        let error = Query::GetUserData.execute(&storage).await.unwrap_err();

        assert_eq!(
            error.error_kind,
            DomainErrorKind::External(ExternalErrorKind::StorageUnavailable)
        );
    }

    #[tokio::test]
    async fn store_failures_surface_as_entity_errors() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Conn(RuntimeErr::Internal(
                "connection reset".to_string(),
            ))])
            .into_connection();
        let storage = Storage::ready(db);

        let error = Query::GetUserData.execute(&storage).await.unwrap_err();

        assert_eq!(
            error.error_kind,
            DomainErrorKind::Internal(InternalErrorKind::Entity(EntityErrorKind::DbTransaction))
        );
    }
}
