//! Client entity model.

use serde::Serialize;
use sqlx::FromRow;
use vetsoft_core::client::ClientForm;
use vetsoft_core::types::{DbId, Timestamp};

/// A row from the `clients` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Client {
    pub id: DbId,
    pub name: String,
    pub phone: i64,
    pub email: String,
    pub city_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Client {
    pub fn to_form(&self) -> ClientForm {
        ClientForm {
            name: Some(self.name.clone()),
            phone: Some(self.phone.to_string()),
            email: Some(self.email.clone()),
            city: Some(self.city_id.to_string()),
        }
    }
}
