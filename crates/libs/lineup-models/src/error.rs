//! Store error types.

use diesel::result::DatabaseErrorKind;

/// Store operation errors.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// No record with the requested key.
    #[error("Record not found")]
    NotFound,

    /// A unique field already holds this value.
    #[error("Record already exists")]
    Duplicate,

    /// The record points at, or is pointed at by, another record in a way
    /// the store refuses.
    #[error("Record reference rejected")]
    Reference,

    /// Database connection pool error.
    #[error(transparent)]
    R2D2(#[from] diesel::r2d2::PoolError),

    /// Diesel ORM operation error.
    #[error(transparent)]
    Diesel(diesel::result::Error),

    /// Schema migration failure.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// Missing environment configuration.
    #[error("Env Variable '{0}' missing")]
    MissingEnv(&'static str),

    /// A previous writer panicked while holding the in-memory store.
    #[error("Store lock poisoned")]
    Poisoned,
}

impl From<diesel::result::Error> for Error {
    fn from(value: diesel::result::Error) -> Self {
        match value {
            diesel::result::Error::NotFound => Self::NotFound,
            diesel::result::Error::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                Self::Duplicate
            }
            diesel::result::Error::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, _) => {
                Self::Reference
            }
            other => Self::Diesel(other),
        }
    }
}
