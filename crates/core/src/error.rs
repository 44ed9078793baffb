use crate::form::FieldErrors;
use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    /// One or more form fields were rejected. Messages are user-facing.
    #[error("Invalid fields: {0}")]
    InvalidFields(FieldErrors),
}
