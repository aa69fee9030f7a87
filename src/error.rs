use thiserror::Error;

/// Errors produced by the entity stores and the orchestration layer
#[derive(Debug, Error)]
pub enum StoreError {
    /// No record with the requested id exists in the store
    #[error("{entity} with ID {id} not found")]
    NotFound { entity: &'static str, id: u64 },

    /// A creation field failed a presence or pattern check
    #[error("{field}: {message}")]
    Validation { field: String, message: String },

    /// Seed data could not be parsed
    #[error("failed to parse seed data: {0}")]
    Seed(#[from] serde_json::Error),

    /// Seed file could not be read
    #[error("failed to read seed file: {0}")]
    SeedIo(#[from] std::io::Error),
}

impl StoreError {
    /// Create a NotFound error for the given entity kind and id
    pub fn not_found(entity: &'static str, id: u64) -> Self {
        Self::NotFound { entity, id }
    }

    /// Create a field-scoped validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Returns true when the error is a missing-record failure
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
