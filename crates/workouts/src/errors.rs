use thiserror::Error;

use crate::config::UNKNOWN_TRAINING;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum WorkoutError {
    /// The tag is not one of `RUN`, `WLK` or `SWM`. Holds the rejected tag.
    #[error("{}", UNKNOWN_TRAINING)]
    UnknownActivityType(String),

    #[error("{tag} expects {expected} arguments, got {actual}")]
    ArgumentCount {
        tag: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Invalid {field}: {value} is not a non-negative whole number")]
    InvalidArgument { field: &'static str, value: f64 },
}

impl WorkoutError {
    /// The rejected tag, for unknown activity errors.
    pub fn unknown_tag(&self) -> Option<&str> {
        match self {
            WorkoutError::UnknownActivityType(tag) => Some(tag.as_str()),
            _ => None,
        }
    }
}
