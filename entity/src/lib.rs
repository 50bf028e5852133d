use uuid::Uuid;

// Document collections
pub mod users;

/// Schema the collections live in.
pub const SCHEMA_NAME: &str = "app_auth";

/// A type alias that represents any Entity's internal id field data type.
/// Aliased so that it's easy to change the underlying type if necessary.
pub type Id = Uuid;
