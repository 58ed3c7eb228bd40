use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid ticket priority: {value} {location}")]
    InvalidPriority {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid stored ticket priority: {value} {location}")]
    InvalidPriorityCode { value: i64, location: ErrorLocation },
}

pub type Result<T> = StdResult<T, CoreError>;
