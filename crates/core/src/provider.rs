//! Provider form validation: every field is required, email needs an `@`.

use serde::Deserialize;

use crate::form::{self, form_value, FieldErrors};
use crate::vet;

pub const NAME_MAX_CHARS: usize = vet::NAME_MAX_CHARS;
pub const PHONE_MAX_CHARS: usize = vet::PHONE_MAX_CHARS;
pub const ADDRESS_MAX_CHARS: usize = 100;
pub const FLOOR_OR_UNIT_MAX_CHARS: usize = 100;

pub const NAME_REQUIRED: &str = "Por favor ingrese un nombre";
pub const NAME_TOO_LONG: &str = vet::NAME_TOO_LONG;
pub const PHONE_REQUIRED: &str = "Por favor ingrese un teléfono";
pub const PHONE_TOO_LONG: &str = vet::PHONE_TOO_LONG;
pub const EMAIL_REQUIRED: &str = "Por favor ingrese un email";
pub const EMAIL_INVALID: &str = vet::EMAIL_INVALID;
pub const ADDRESS_REQUIRED: &str = "Por favor ingrese una dirección";
pub const ADDRESS_TOO_LONG: &str = "La dirección no puede superar los 100 caracteres";
pub const FLOOR_OR_UNIT_REQUIRED: &str =
    "Por favor ingrese si es una casa o el numero de piso del departamento";
pub const FLOOR_OR_UNIT_TOO_LONG: &str =
    "El piso o departamento no puede superar los 100 caracteres";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ProviderForm {
    #[serde(deserialize_with = "form_value")]
    pub name: Option<String>,
    #[serde(deserialize_with = "form_value")]
    pub phone: Option<String>,
    #[serde(deserialize_with = "form_value")]
    pub email: Option<String>,
    #[serde(deserialize_with = "form_value")]
    pub address: Option<String>,
    /// "casa" for a house, otherwise the floor/apartment.
    #[serde(alias = "floor_apartament", deserialize_with = "form_value")]
    pub floor_or_unit: Option<String>,
}

/// A validated provider, ready to persist.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderFields {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub floor_or_unit: String,
}

impl ProviderForm {
    pub fn check(&self) -> Result<ProviderFields, FieldErrors> {
        let mut errors = FieldErrors::new();

        let name = form::required(
            &mut errors,
            "name",
            &self.name,
            NAME_REQUIRED,
            form::bounded(NAME_MAX_CHARS, NAME_TOO_LONG),
        );
        let phone = form::required(
            &mut errors,
            "phone",
            &self.phone,
            PHONE_REQUIRED,
            form::bounded(PHONE_MAX_CHARS, PHONE_TOO_LONG),
        );
        let email = form::required(
            &mut errors,
            "email",
            &self.email,
            EMAIL_REQUIRED,
            vet::check_email,
        );
        let address = form::required(
            &mut errors,
            "address",
            &self.address,
            ADDRESS_REQUIRED,
            form::bounded(ADDRESS_MAX_CHARS, ADDRESS_TOO_LONG),
        );
        let floor_or_unit = form::required(
            &mut errors,
            "floor_or_unit",
            &self.floor_or_unit,
            FLOOR_OR_UNIT_REQUIRED,
            form::bounded(FLOOR_OR_UNIT_MAX_CHARS, FLOOR_OR_UNIT_TOO_LONG),
        );

        match (name, phone, email, address, floor_or_unit) {
            (Some(name), Some(phone), Some(email), Some(address), Some(floor_or_unit)) => {
                Ok(ProviderFields {
                    name,
                    phone,
                    email,
                    address,
                    floor_or_unit,
                })
            }
            _ => Err(errors),
        }
    }

    pub fn validate(&self) -> FieldErrors {
        self.check().err().unwrap_or_default()
    }

    pub fn merged_onto(&self, current: &ProviderForm) -> ProviderForm {
        ProviderForm {
            name: form::merge(&self.name, &current.name),
            phone: form::merge(&self.phone, &current.phone),
            email: form::merge(&self.email, &current.email),
            address: form::merge(&self.address, &current.address),
            floor_or_unit: form::merge(&self.floor_or_unit, &current.floor_or_unit),
        }
    }
}
