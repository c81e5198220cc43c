use mereb_core::CoreError;
use mereb_db::DbError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// The three domain failure kinds a handler has to tell apart.
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    #[error("Persistence error: {message} {location}")]
    Persistence {
        message: String,
        location: ErrorLocation,
    },
}

impl ServiceError {
    /// Client-safe message, without location.
    pub fn message(&self) -> &str {
        match self {
            ServiceError::Validation { message, .. }
            | ServiceError::NotFound { message, .. }
            | ServiceError::Persistence { message, .. } => message,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ServiceError::NotFound { .. })
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, ServiceError::Validation { .. })
    }
}

impl From<CoreError> for ServiceError {
    #[track_caller]
    fn from(err: CoreError) -> Self {
        ServiceError::Validation {
            message: err.message().to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<DbError> for ServiceError {
    #[track_caller]
    fn from(err: DbError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        let message = err.client_message();

        if err.is_not_found() {
            ServiceError::NotFound { message, location }
        } else {
            ServiceError::Persistence { message, location }
        }
    }
}

pub type Result<T> = std::result::Result<T, ServiceError>;
