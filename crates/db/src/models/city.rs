//! City entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;
use vetsoft_core::types::{DbId, Timestamp};

/// A row from the `cities` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct City {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new city. Names are unique.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCity {
    #[validate(length(min = 1, max = 10, message = "El nombre debe tener entre 1 y 10 caracteres"))]
    pub name: String,
}
