//! Product form validation. Prices must be strictly positive.

use serde::Deserialize;

use crate::form::{self, form_value, FieldErrors};

pub const NAME_MAX_CHARS: usize = 75;
pub const KIND_MAX_CHARS: usize = 25;

pub const NAME_REQUIRED: &str = "Por favor ingrese un nombre";
pub const NAME_TOO_LONG: &str = "El nombre no puede superar los 75 caracteres";
pub const KIND_REQUIRED: &str = "Por favor ingrese un tipo";
pub const KIND_TOO_LONG: &str = "El tipo no puede superar los 25 caracteres";
pub const PRICE_REQUIRED: &str = "Por favor ingrese un precio";
pub const PRICE_NOT_POSITIVE: &str = "Los precios deben ser mayores que 0";
pub const PRICE_NOT_A_NUMBER: &str = "El precio debe ser un número válido";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ProductForm {
    #[serde(deserialize_with = "form_value")]
    pub name: Option<String>,
    #[serde(rename = "type", deserialize_with = "form_value")]
    pub kind: Option<String>,
    #[serde(deserialize_with = "form_value")]
    pub price: Option<String>,
}

/// A validated product, ready to persist.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductFields {
    pub name: String,
    pub kind: String,
    pub price: f64,
}

impl ProductForm {
    pub fn check(&self) -> Result<ProductFields, FieldErrors> {
        let mut errors = FieldErrors::new();

        let name = form::required(
            &mut errors,
            "name",
            &self.name,
            NAME_REQUIRED,
            form::bounded(NAME_MAX_CHARS, NAME_TOO_LONG),
        );
        let kind = form::required(
            &mut errors,
            "type",
            &self.kind,
            KIND_REQUIRED,
            form::bounded(KIND_MAX_CHARS, KIND_TOO_LONG),
        );
        let price = form::required(&mut errors, "price", &self.price, PRICE_REQUIRED, check_price);

        match (name, kind, price) {
            (Some(name), Some(kind), Some(price)) => Ok(ProductFields { name, kind, price }),
            _ => Err(errors),
        }
    }

    pub fn validate(&self) -> FieldErrors {
        self.check().err().unwrap_or_default()
    }

    pub fn merged_onto(&self, current: &ProductForm) -> ProductForm {
        ProductForm {
            name: form::merge(&self.name, &current.name),
            kind: form::merge(&self.kind, &current.kind),
            price: form::merge(&self.price, &current.price),
        }
    }
}

fn check_price(raw: &str) -> Result<f64, &'static str> {
    match form::parse_number(raw) {
        Some(price) if price > 0.0 => Ok(price),
        Some(_) => Err(PRICE_NOT_POSITIVE),
        None => Err(PRICE_NOT_A_NUMBER),
    }
}
