//! Medicine form validation.
//!
//! Medicine names are single tokens: no whitespace and no `ñ`, so they can be
//! matched against supplier catalogues. Doses are bounded to `[1, 10]`.

use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

use crate::form::{self, form_value, FieldErrors};

pub const MIN_DOSE: f64 = 1.0;
pub const MAX_DOSE: f64 = 10.0;
pub const NAME_MAX_CHARS: usize = 75;
pub const DESCRIPTION_MAX_CHARS: usize = 255;

pub const NAME_REQUIRED: &str = "Por favor ingrese un nombre";
pub const NAME_INVALID: &str = "Los nombres de medicamento no pueden contener ni ñ ni espacios";
pub const NAME_TOO_LONG: &str = "El nombre no puede superar los 75 caracteres";
pub const DESCRIPTION_REQUIRED: &str = "Por favor ingrese una descripción";
pub const DESCRIPTION_TOO_LONG: &str = "La descripción no puede superar los 255 caracteres";
pub const DOSE_REQUIRED: &str = "Por favor ingrese una dosis";
pub const DOSE_OUT_OF_RANGE: &str = "Las dosis deben estar entre 1 y 10";
pub const DOSE_NOT_A_NUMBER: &str = "La dosis debe ser un número válido";

static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\sñÑ]+$").expect("valid regex"));

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MedicineForm {
    #[serde(deserialize_with = "form_value")]
    pub name: Option<String>,
    #[serde(deserialize_with = "form_value")]
    pub description: Option<String>,
    #[serde(deserialize_with = "form_value")]
    pub dose: Option<String>,
}

/// A validated medicine, ready to persist.
#[derive(Debug, Clone, PartialEq)]
pub struct MedicineFields {
    pub name: String,
    pub description: String,
    pub dose: f64,
}

impl MedicineForm {
    pub fn check(&self) -> Result<MedicineFields, FieldErrors> {
        let mut errors = FieldErrors::new();

        let name = form::required(&mut errors, "name", &self.name, NAME_REQUIRED, check_name);
        let description = form::required(
            &mut errors,
            "description",
            &self.description,
            DESCRIPTION_REQUIRED,
            form::bounded(DESCRIPTION_MAX_CHARS, DESCRIPTION_TOO_LONG),
        );
        let dose = form::required(&mut errors, "dose", &self.dose, DOSE_REQUIRED, check_dose);

        match (name, description, dose) {
            (Some(name), Some(description), Some(dose)) => Ok(MedicineFields {
                name,
                description,
                dose,
            }),
            _ => Err(errors),
        }
    }

    pub fn validate(&self) -> FieldErrors {
        self.check().err().unwrap_or_default()
    }

    pub fn merged_onto(&self, current: &MedicineForm) -> MedicineForm {
        MedicineForm {
            name: form::merge(&self.name, &current.name),
            description: form::merge(&self.description, &current.description),
            dose: form::merge(&self.dose, &current.dose),
        }
    }
}

fn check_name(raw: &str) -> Result<String, &'static str> {
    if !NAME_RE.is_match(raw) {
        return Err(NAME_INVALID);
    }
    form::bounded(NAME_MAX_CHARS, NAME_TOO_LONG)(raw)
}

fn check_dose(raw: &str) -> Result<f64, &'static str> {
    match form::parse_number(raw) {
        Some(dose) if (MIN_DOSE..=MAX_DOSE).contains(&dose) => Ok(dose),
        Some(_) => Err(DOSE_OUT_OF_RANGE),
        None => Err(DOSE_NOT_A_NUMBER),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, dose: &str) -> MedicineForm {
        MedicineForm {
            name: Some(name.into()),
            description: Some("Descripción".into()),
            dose: Some(dose.into()),
        }
    }

    #[test]
    fn name_with_spaces() {
        assert_eq!(
            form("nombre con espacios", "1").validate(),
            FieldErrors::from([("name", NAME_INVALID)])
        );
    }

    #[test]
    fn name_with_enie() {
        assert_eq!(
            form("ñombre_con_ñ", "1").validate(),
            FieldErrors::from([("name", NAME_INVALID)])
        );
        assert_eq!(form("AÑIL", "1").validate().get("name"), Some(NAME_INVALID));
    }

    #[test]
    fn name_with_underscores_is_fine() {
        assert!(form("nombre_con_espacios", "1").validate().is_empty());
    }

    #[test]
    fn dose_below_range() {
        assert_eq!(
            form("Medicina_Invalida", "0.5").validate(),
            FieldErrors::from([("dose", DOSE_OUT_OF_RANGE)])
        );
    }

    #[test]
    fn dose_bounds_are_inclusive() {
        assert_eq!(form("m", "1").check().unwrap().dose, 1.0);
        assert_eq!(form("m", "10").check().unwrap().dose, 10.0);
        assert_eq!(form("m", "10.01").validate().get("dose"), Some(DOSE_OUT_OF_RANGE));
    }

    #[test]
    fn valid_dose() {
        let medicine = form("Medicina_Valida", "5").check().unwrap();
        assert_eq!(medicine.dose, 5.0);
    }

    #[test]
    fn non_numeric_dose() {
        assert_eq!(form("m", "mucho").validate().get("dose"), Some(DOSE_NOT_A_NUMBER));
    }

    #[test]
    fn over_long_description() {
        let medicine = MedicineForm {
            description: Some("d".repeat(DESCRIPTION_MAX_CHARS + 1)),
            ..form("Ibuprofeno", "2")
        };
        assert_eq!(
            medicine.validate(),
            FieldErrors::from([("description", DESCRIPTION_TOO_LONG)])
        );
    }

    #[test]
    fn over_long_name_is_checked_after_shape() {
        let long = "m".repeat(NAME_MAX_CHARS + 1);
        assert_eq!(form(&long, "2").validate().get("name"), Some(NAME_TOO_LONG));
        let spaced = format!("{long} x");
        assert_eq!(form(&spaced, "2").validate().get("name"), Some(NAME_INVALID));
    }

    #[test]
    fn empty_form_reports_every_field() {
        assert_eq!(
            MedicineForm::default().validate(),
            FieldErrors::from([
                ("name", NAME_REQUIRED),
                ("description", DESCRIPTION_REQUIRED),
                ("dose", DOSE_REQUIRED),
            ])
        );
    }
}
