//! Vet entity model.

use serde::Serialize;
use sqlx::FromRow;
use vetsoft_core::types::{DbId, Timestamp};
use vetsoft_core::vet::VetForm;

/// A row from the `vets` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Vet {
    pub id: DbId,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Vet {
    pub fn to_form(&self) -> VetForm {
        VetForm {
            name: Some(self.name.clone()),
            phone: Some(self.phone.clone()),
            email: Some(self.email.clone()),
        }
    }
}
