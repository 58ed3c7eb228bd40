use th_core::{CoreError, FIELD_PRIORITY, FieldViolation};
use th_db::DbError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation failed: {message}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    #[error(transparent)]
    Store(#[from] DbError),
}

impl AppError {
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Validation { field, .. } => field.as_deref(),
            Self::Store(_) => None,
        }
    }
}

impl From<FieldViolation> for AppError {
    #[track_caller]
    fn from(violation: FieldViolation) -> Self {
        Self::Validation {
            message: violation.message,
            field: Some(violation.field.to_string()),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<CoreError> for AppError {
    #[track_caller]
    fn from(err: CoreError) -> Self {
        let (message, field) = match err {
            CoreError::InvalidPriority { value, .. } => (
                format!("Priority must be one of Low, Medium, High (got '{}')", value),
                Some(FIELD_PRIORITY.to_string()),
            ),
            CoreError::InvalidPriorityCode { value, .. } => (
                format!("Unknown priority code {}", value),
                Some(FIELD_PRIORITY.to_string()),
            ),
        };

        Self::Validation {
            message,
            field,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
