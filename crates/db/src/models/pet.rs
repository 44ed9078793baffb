//! Pet entity model.

use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;
use vetsoft_core::pet::{PetForm, BIRTHDAY_FORMAT};
use vetsoft_core::types::{DbId, Timestamp};

/// A row from the `pets` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Pet {
    pub id: DbId,
    pub name: String,
    pub breed_id: DbId,
    pub weight: f64,
    pub birthday: NaiveDate,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Pet {
    pub fn to_form(&self) -> PetForm {
        PetForm {
            name: Some(self.name.clone()),
            breed: Some(self.breed_id.to_string()),
            weight: Some(self.weight.to_string()),
            birthday: Some(self.birthday.format(BIRTHDAY_FORMAT).to_string()),
        }
    }
}
