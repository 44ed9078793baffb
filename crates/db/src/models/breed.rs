//! Breed entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;
use vetsoft_core::types::{DbId, Timestamp};

/// A row from the `breeds` table, e.g. "Perro - Ovejero Aleman".
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Breed {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new breed. Names are unique.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateBreed {
    #[validate(length(min = 1, max = 50, message = "El nombre debe tener entre 1 y 50 caracteres"))]
    pub name: String,
}
