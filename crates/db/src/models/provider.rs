//! Provider entity model.

use serde::Serialize;
use sqlx::FromRow;
use vetsoft_core::provider::ProviderForm;
use vetsoft_core::types::{DbId, Timestamp};

/// A row from the `providers` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Provider {
    pub id: DbId,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub floor_or_unit: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Provider {
    pub fn to_form(&self) -> ProviderForm {
        ProviderForm {
            name: Some(self.name.clone()),
            phone: Some(self.phone.clone()),
            email: Some(self.email.clone()),
            address: Some(self.address.clone()),
            floor_or_unit: Some(self.floor_or_unit.clone()),
        }
    }
}
