//! Error types for entity API
use std::error::Error as StdError;
use std::fmt;

use serde::Serialize;

use sea_orm::error::DbErr;

/// Errors while executing operations against the document collections.
/// The intent is to categorize errors into two major types:
///  * Errors related to data. Ex DbError::Json
///  * Errors related to interactions with the database itself. Ex DbError::Conn
#[derive(Debug, PartialEq)]
pub struct Error {
    // Underlying error emitted from seaORM internals
    pub source: Option<DbErr>,
    // Enum representing which category of error
    pub error_kind: EntityApiErrorKind,
}

#[derive(Debug, PartialEq, Serialize)]
pub enum EntityApiErrorKind {
    // Stored document could not be decoded
    InvalidDocument,
    // Errors related to interactions with the database itself. Ex DbError::Conn
    SystemError,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Entity API Error: {:?}", self)
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|e| e as &(dyn StdError + 'static))
    }
}

impl From<DbErr> for Error {
    fn from(err: DbErr) -> Self {
        let error_kind = match err {
            DbErr::Json(_) | DbErr::Type(_) => EntityApiErrorKind::InvalidDocument,
            _ => EntityApiErrorKind::SystemError,
        };

        Error {
            source: Some(err),
            error_kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connection_errors_are_system_errors() {
        let error: Error = DbErr::Conn(sea_orm::RuntimeErr::Internal("refused".to_string())).into();
        assert_eq!(error.error_kind, EntityApiErrorKind::SystemError);
        assert!(error.source.is_some());
    }

    #[test]
    fn collection_reads_have_no_not_found_case() {
        let error: Error = DbErr::RecordNotFound("users".to_string()).into();
        assert_eq!(error.error_kind, EntityApiErrorKind::SystemError);
    }

    #[test]
    fn undecodable_documents_are_invalid_document_errors() {
        let error: Error = DbErr::Json("expected value".to_string()).into();
        assert_eq!(error.error_kind, EntityApiErrorKind::InvalidDocument);
    }
}
