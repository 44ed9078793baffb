//! Pet form validation.
//!
//! Birthdays are ISO calendar dates strictly before "today"; the caller
//! supplies today's date so validation stays deterministic.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use serde::Deserialize;

use crate::form::{self, form_value, FieldErrors};
use crate::types::DbId;

/// Accepted birthday format.
pub const BIRTHDAY_FORMAT: &str = "%Y-%m-%d";

pub const NAME_MAX_CHARS: usize = 100;

pub const NAME_REQUIRED: &str = "Por favor ingrese un nombre";
pub const NAME_TOO_LONG: &str = "El nombre no puede superar los 100 caracteres";
pub const BREED_REQUIRED: &str = "Por favor ingrese una raza";
pub const BREED_NOT_FOUND: &str = "Esa raza no existe";
pub const WEIGHT_REQUIRED: &str = "Por favor ingrese un peso";
pub const WEIGHT_NOT_POSITIVE: &str = "El peso debe ser mayor que 0";
pub const WEIGHT_NOT_A_NUMBER: &str = "El peso debe ser un número válido";
pub const BIRTHDAY_REQUIRED: &str = "Por favor ingrese una fecha";
pub const BIRTHDAY_INVALID: &str = "La fecha de nacimiento no es válida.";
pub const BIRTHDAY_NOT_PAST: &str = "La fecha de nacimiento debe ser anterior a la fecha actual.";

/// Four-digit year, no sign or padding. chrono alone would accept both.
static BIRTHDAY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}-[0-9]{1,2}-[0-9]{1,2}$").expect("valid regex"));

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PetForm {
    #[serde(deserialize_with = "form_value")]
    pub name: Option<String>,
    /// Breed id.
    #[serde(deserialize_with = "form_value")]
    pub breed: Option<String>,
    #[serde(deserialize_with = "form_value")]
    pub weight: Option<String>,
    /// `YYYY-MM-DD`.
    #[serde(deserialize_with = "form_value")]
    pub birthday: Option<String>,
}

/// A validated pet, ready to persist.
#[derive(Debug, Clone, PartialEq)]
pub struct PetFields {
    pub name: String,
    pub breed_id: DbId,
    pub weight: f64,
    pub birthday: NaiveDate,
}

impl PetForm {
    /// The submitted breed id, if it parses.
    pub fn breed_id(&self) -> Option<DbId> {
        form::present(&self.breed).and_then(form::parse_id)
    }

    /// Validate every field against `today`.
    ///
    /// `breed_exists` answers whether the row for [`Self::breed_id`] exists.
    pub fn check(&self, breed_exists: bool, today: NaiveDate) -> Result<PetFields, FieldErrors> {
        let mut errors = FieldErrors::new();

        let name = form::required(
            &mut errors,
            "name",
            &self.name,
            NAME_REQUIRED,
            form::bounded(NAME_MAX_CHARS, NAME_TOO_LONG),
        );
        let breed_id = form::required(&mut errors, "breed", &self.breed, BREED_REQUIRED, |raw| {
            match form::parse_id(raw) {
                Some(id) if breed_exists => Ok(id),
                _ => Err(BREED_NOT_FOUND),
            }
        });
        let weight = form::required(
            &mut errors,
            "weight",
            &self.weight,
            WEIGHT_REQUIRED,
            check_weight,
        );
        let birthday = form::required(
            &mut errors,
            "birthday",
            &self.birthday,
            BIRTHDAY_REQUIRED,
            |raw| check_birthday(raw, today),
        );

        match (name, breed_id, weight, birthday) {
            (Some(name), Some(breed_id), Some(weight), Some(birthday)) => Ok(PetFields {
                name,
                breed_id,
                weight,
                birthday,
            }),
            _ => Err(errors),
        }
    }

    pub fn validate(&self, breed_exists: bool, today: NaiveDate) -> FieldErrors {
        self.check(breed_exists, today).err().unwrap_or_default()
    }

    pub fn merged_onto(&self, current: &PetForm) -> PetForm {
        PetForm {
            name: form::merge(&self.name, &current.name),
            breed: form::merge(&self.breed, &current.breed),
            weight: form::merge(&self.weight, &current.weight),
            birthday: form::merge(&self.birthday, &current.birthday),
        }
    }
}

fn check_weight(raw: &str) -> Result<f64, &'static str> {
    match form::parse_number(raw) {
        Some(weight) if weight > 0.0 => Ok(weight),
        Some(_) => Err(WEIGHT_NOT_POSITIVE),
        None => Err(WEIGHT_NOT_A_NUMBER),
    }
}

fn check_birthday(raw: &str, today: NaiveDate) -> Result<NaiveDate, &'static str> {
    if !BIRTHDAY_RE.is_match(raw) {
        return Err(BIRTHDAY_INVALID);
    }
    let birthday = NaiveDate::parse_from_str(raw, BIRTHDAY_FORMAT).map_err(|_| BIRTHDAY_INVALID)?;
    if birthday >= today {
        return Err(BIRTHDAY_NOT_PAST);
    }
    Ok(birthday)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    fn form(weight: &str, birthday: &str) -> PetForm {
        PetForm {
            name: Some("Mascota".into()),
            breed: Some("1".into()),
            weight: Some(weight.into()),
            birthday: Some(birthday.into()),
        }
    }

    #[test]
    fn valid_pet() {
        let pet = form("5", "2024-05-20").check(true, today()).unwrap();
        assert_eq!(pet.breed_id, 1);
        assert_eq!(pet.weight, 5.0);
        assert_eq!(pet.birthday, NaiveDate::from_ymd_opt(2024, 5, 20).unwrap());
    }

    #[test]
    fn negative_weight() {
        assert_eq!(
            form("-5", "2024-05-20").validate(true, today()),
            FieldErrors::from([("weight", WEIGHT_NOT_POSITIVE)])
        );
    }

    #[test]
    fn non_numeric_weight() {
        assert_eq!(
            form("pesado", "2024-05-20").validate(true, today()).get("weight"),
            Some(WEIGHT_NOT_A_NUMBER)
        );
    }

    #[test]
    fn malformed_birthday() {
        assert_eq!(
            form("5", "2s024-05-20").validate(true, today()),
            FieldErrors::from([("birthday", BIRTHDAY_INVALID)])
        );
    }

    #[test]
    fn signed_or_padded_birthday_is_malformed() {
        for raw in ["+2024-01-01", " 2024-01-01", "2024-01-01 ", "20240-01-01", "-2024-01-01"] {
            assert_eq!(
                form("5", raw).validate(true, today()),
                FieldErrors::from([("birthday", BIRTHDAY_INVALID)]),
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn single_digit_month_and_day_are_accepted() {
        let pet = form("5", "2024-1-5").check(true, today()).unwrap();
        assert_eq!(pet.birthday, NaiveDate::from_ymd_opt(2024, 1, 5).unwrap());
    }

    #[test]
    fn name_longer_than_column_is_rejected() {
        let pet = PetForm {
            name: Some("m".repeat(NAME_MAX_CHARS + 1)),
            ..form("5", "2024-05-20")
        };
        assert_eq!(
            pet.validate(true, today()),
            FieldErrors::from([("name", NAME_TOO_LONG)])
        );
    }

    #[test]
    fn impossible_calendar_date() {
        assert_eq!(
            form("5", "2023-02-30").validate(true, today()).get("birthday"),
            Some(BIRTHDAY_INVALID)
        );
    }

    #[test]
    fn birthday_tomorrow_is_rejected() {
        let tomorrow = today().succ_opt().unwrap().format(BIRTHDAY_FORMAT).to_string();
        assert_eq!(
            form("5", &tomorrow).validate(true, today()),
            FieldErrors::from([("birthday", BIRTHDAY_NOT_PAST)])
        );
    }

    #[test]
    fn birthday_today_is_rejected() {
        assert_eq!(
            form("5", "2024-06-01").validate(true, today()).get("birthday"),
            Some(BIRTHDAY_NOT_PAST)
        );
    }

    #[test]
    fn unknown_breed() {
        assert_eq!(
            form("5", "2024-05-20").validate(false, today()),
            FieldErrors::from([("breed", BREED_NOT_FOUND)])
        );
    }

    #[test]
    fn empty_form_reports_every_field() {
        let errors = PetForm::default().validate(false, today());
        assert_eq!(
            errors,
            FieldErrors::from([
                ("name", NAME_REQUIRED),
                ("breed", BREED_REQUIRED),
                ("weight", WEIGHT_REQUIRED),
                ("birthday", BIRTHDAY_REQUIRED),
            ])
        );
    }

    #[test]
    fn merge_keeps_unsubmitted_fields() {
        let patch = PetForm {
            weight: Some("7.5".into()),
            ..PetForm::default()
        };
        let merged = patch.merged_onto(&form("5", "2024-05-20"));
        assert_eq!(merged.weight.as_deref(), Some("7.5"));
        assert_eq!(merged.birthday.as_deref(), Some("2024-05-20"));
        assert_eq!(merged.breed.as_deref(), Some("1"));
    }
}
