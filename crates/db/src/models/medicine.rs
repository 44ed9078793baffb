//! Medicine entity model.

use serde::Serialize;
use sqlx::FromRow;
use vetsoft_core::medicine::MedicineForm;
use vetsoft_core::types::{DbId, Timestamp};

/// A row from the `medicines` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Medicine {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub dose: f64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Medicine {
    pub fn to_form(&self) -> MedicineForm {
        MedicineForm {
            name: Some(self.name.clone()),
            description: Some(self.description.clone()),
            dose: Some(self.dose.to_string()),
        }
    }
}
