use models::service_area::ServiceAreaError;
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("database error: {0}")]
    Db(String),
    #[error("internal error: {0}")]
    Internal(String),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("{} not found", entity)) }

    /// Unique-constraint violations become `Conflict`; everything else stays opaque.
    pub fn from_db(e: DbErr) -> Self {
        match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => Self::Conflict("email already in use".into()),
            _ => Self::Db(e.to_string()),
        }
    }
}

impl From<ServiceAreaError> for ServiceError {
    fn from(e: ServiceAreaError) -> Self {
        match e {
            ServiceAreaError::OutOfRange(_) => Self::Validation(e.to_string()),
            ServiceAreaError::MissingCanonical(_) => Self::Internal(e.to_string()),
        }
    }
}
