//! Client form validation.
//!
//! Clients are the strictest entity: the name is restricted to letters
//! (including Spanish accented vowels), the phone must be an Argentine
//! number starting with country code `54`, the email must belong to the
//! clinic domain, and the city must reference an existing row.

use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

use crate::form::{self, form_value, FieldErrors};
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Every client email must end with this suffix.
pub const EMAIL_DOMAIN: &str = "@vetsoft.com";

pub const NAME_MAX_CHARS: usize = 100;

pub const NAME_REQUIRED: &str = "Por favor ingrese un nombre";
pub const NAME_INVALID: &str = "Por favor ingrese solo caracteres permitidos";
pub const NAME_TOO_LONG: &str = "El nombre no puede superar los 100 caracteres";
pub const PHONE_REQUIRED: &str = "Por favor ingrese un teléfono";
pub const PHONE_INVALID: &str = "El teléfono debe comenzar con '54' y ser un número";
pub const EMAIL_REQUIRED: &str = "Por favor ingrese un email";
pub const EMAIL_INVALID: &str = "Por favor ingrese un email valido";
pub const EMAIL_WRONG_DOMAIN: &str = "El email debe finalizar con \"@vetsoft.com\"";
pub const CITY_REQUIRED: &str = "Por favor seleccione una ciudad";
pub const CITY_NOT_FOUND: &str = "Esa ciudad no existe";

static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-zÁÉÍÓÚáéíóúÜü_ ]*$").expect("valid regex"));

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^54[0-9]+$").expect("valid regex"));

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Client form as submitted. Absent and empty fields are both "missing".
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ClientForm {
    #[serde(deserialize_with = "form_value")]
    pub name: Option<String>,
    #[serde(deserialize_with = "form_value")]
    pub phone: Option<String>,
    #[serde(deserialize_with = "form_value")]
    pub email: Option<String>,
    /// City id.
    #[serde(deserialize_with = "form_value")]
    pub city: Option<String>,
}

/// A validated client, ready to persist.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientFields {
    pub name: String,
    pub phone: i64,
    pub email: String,
    pub city_id: DbId,
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

impl ClientForm {
    /// The submitted city id, if it parses. Callers use it to look up
    /// whether the city exists before calling [`ClientForm::check`].
    pub fn city_id(&self) -> Option<DbId> {
        form::present(&self.city).and_then(form::parse_id)
    }

    /// Validate every field, returning the typed client or all field errors.
    ///
    /// `city_exists` is the answer to "does the row for [`Self::city_id`]
    /// exist?" and is ignored when no city id was submitted.
    pub fn check(&self, city_exists: bool) -> Result<ClientFields, FieldErrors> {
        let mut errors = FieldErrors::new();

        let name = form::required(&mut errors, "name", &self.name, NAME_REQUIRED, check_name);
        let phone = form::required(&mut errors, "phone", &self.phone, PHONE_REQUIRED, check_phone);
        let email = form::required(&mut errors, "email", &self.email, EMAIL_REQUIRED, check_email);
        let city_id = form::required(&mut errors, "city", &self.city, CITY_REQUIRED, |raw| {
            match form::parse_id(raw) {
                Some(id) if city_exists => Ok(id),
                _ => Err(CITY_NOT_FOUND),
            }
        });

        match (name, phone, email, city_id) {
            (Some(name), Some(phone), Some(email), Some(city_id)) => Ok(ClientFields {
                name,
                phone,
                email,
                city_id,
            }),
            _ => Err(errors),
        }
    }

    /// Field errors for this form; empty when valid.
    pub fn validate(&self, city_exists: bool) -> FieldErrors {
        self.check(city_exists).err().unwrap_or_default()
    }

    /// Overlay this (partial) form onto `current`: non-empty fields here win.
    pub fn merged_onto(&self, current: &ClientForm) -> ClientForm {
        ClientForm {
            name: form::merge(&self.name, &current.name),
            phone: form::merge(&self.phone, &current.phone),
            email: form::merge(&self.email, &current.email),
            city: form::merge(&self.city, &current.city),
        }
    }
}

fn check_name(raw: &str) -> Result<String, &'static str> {
    if !NAME_RE.is_match(raw) {
        return Err(NAME_INVALID);
    }
    form::bounded(NAME_MAX_CHARS, NAME_TOO_LONG)(raw)
}

/// The phone is stored as a 64-bit integer, so digits that overflow it are
/// rejected with the same message as non-digits.
fn check_phone(raw: &str) -> Result<i64, &'static str> {
    if !PHONE_RE.is_match(raw) {
        return Err(PHONE_INVALID);
    }
    raw.parse().map_err(|_| PHONE_INVALID)
}

fn check_email(raw: &str) -> Result<String, &'static str> {
    if !raw.contains('@') {
        Err(EMAIL_INVALID)
    } else if !raw.ends_with(EMAIL_DOMAIN) {
        Err(EMAIL_WRONG_DOMAIN)
    } else {
        Ok(raw.to_string())
    }
}
