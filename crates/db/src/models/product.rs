//! Product entity model.

use serde::Serialize;
use sqlx::FromRow;
use vetsoft_core::product::ProductForm;
use vetsoft_core::types::{DbId, Timestamp};

/// A row from the `products` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Product {
    pub id: DbId,
    pub name: String,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub kind: String,
    pub price: f64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Product {
    pub fn to_form(&self) -> ProductForm {
        ProductForm {
            name: Some(self.name.clone()),
            kind: Some(self.kind.clone()),
            price: Some(self.price.to_string()),
        }
    }
}
