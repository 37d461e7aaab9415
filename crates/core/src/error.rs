use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// The day's remaining capacity cannot hold the requested party.
    ///
    /// `remaining` is reported as observed at check time. It is zero when the
    /// day is exactly full and negative when the day is already overbooked.
    #[error("Daily capacity reached: only {remaining} spots left")]
    CapacityExceeded { remaining: i64 },

    #[error("Internal error: {0}")]
    Internal(String),
}
