use vetsoft_core::form::FieldErrors;
use vetsoft_core::{client, pet};

/// Foreign keys whose violation means a referenced row disappeared between
/// the existence check and the write: constraint, form field, message.
const FOREIGN_KEY_FIELDS: &[(&str, &str, &str)] = &[
    ("fk_clients_city", "city", client::CITY_NOT_FOUND),
    ("fk_pets_breed", "breed", pet::BREED_NOT_FOUND),
];

/// Outcome of a rejected validated write.
#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    /// The form failed validation; nothing was written.
    #[error("Invalid fields: {0}")]
    Invalid(FieldErrors),

    #[error(transparent)]
    Database(sqlx::Error),
}

impl From<FieldErrors> for SaveError {
    fn from(errors: FieldErrors) -> Self {
        SaveError::Invalid(errors)
    }
}

/// A foreign-key violation on a known form field becomes that field's
/// "does not exist" error; anything else stays a database error.
impl From<sqlx::Error> for SaveError {
    fn from(err: sqlx::Error) -> Self {
        let field = match &err {
            sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => db_err
                .constraint()
                .and_then(|name| FOREIGN_KEY_FIELDS.iter().find(|(fk, _, _)| *fk == name)),
            _ => None,
        };

        match field {
            Some((constraint, field, message)) => {
                tracing::debug!(constraint, field, "Referenced row vanished before write");
                SaveError::Invalid(FieldErrors::from([(*field, *message)]))
            }
            None => SaveError::Database(err),
        }
    }
}
