//! Vet form validation: presence checks plus a loose email shape check.

use serde::Deserialize;

use crate::form::{self, form_value, FieldErrors};

pub const NAME_MAX_CHARS: usize = 100;
pub const PHONE_MAX_CHARS: usize = 15;

pub const NAME_REQUIRED: &str = "Por favor ingrese un nombre";
pub const NAME_TOO_LONG: &str = "El nombre no puede superar los 100 caracteres";
pub const PHONE_REQUIRED: &str = "Por favor ingrese un teléfono";
pub const PHONE_TOO_LONG: &str = "El teléfono no puede superar los 15 caracteres";
pub const EMAIL_REQUIRED: &str = "Por favor ingrese un email";
pub const EMAIL_INVALID: &str = "Por favor ingrese un email valido";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct VetForm {
    #[serde(deserialize_with = "form_value")]
    pub name: Option<String>,
    #[serde(deserialize_with = "form_value")]
    pub phone: Option<String>,
    #[serde(deserialize_with = "form_value")]
    pub email: Option<String>,
}

/// A validated vet, ready to persist.
#[derive(Debug, Clone, PartialEq)]
pub struct VetFields {
    pub name: String,
    pub phone: String,
    pub email: String,
}

impl VetForm {
    pub fn check(&self) -> Result<VetFields, FieldErrors> {
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
        let email = form::required(&mut errors, "email", &self.email, EMAIL_REQUIRED, check_email);

        match (name, phone, email) {
            (Some(name), Some(phone), Some(email)) => Ok(VetFields { name, phone, email }),
            _ => Err(errors),
        }
    }

    pub fn validate(&self) -> FieldErrors {
        self.check().err().unwrap_or_default()
    }

    pub fn merged_onto(&self, current: &VetForm) -> VetForm {
        VetForm {
            name: form::merge(&self.name, &current.name),
            phone: form::merge(&self.phone, &current.phone),
            email: form::merge(&self.email, &current.email),
        }
    }
}

/// Shared with providers: any address containing `@` is accepted.
pub(crate) fn check_email(raw: &str) -> Result<String, &'static str> {
    if raw.contains('@') {
        Ok(raw.to_string())
    } else {
        Err(EMAIL_INVALID)
    }
}
