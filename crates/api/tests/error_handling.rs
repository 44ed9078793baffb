//! `AppError` to HTTP response mapping, checked without a server.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use validator::Validate;
use vetsoft_api::error::AppError;
use vetsoft_core::error::CoreError;
use vetsoft_core::form::FieldErrors;
use vetsoft_db::models::city::CreateCity;
use vetsoft_db::SaveError;

async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn not_found_error_returns_404() {
    let err = AppError::Core(CoreError::NotFound {
        entity: "Client",
        id: 42,
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Client with id 42 not found");
}

#[tokio::test]
async fn invalid_fields_return_400_with_field_map() {
    let fields = FieldErrors::from([
        ("price", "Los precios deben ser mayores que 0"),
        ("name", "Por favor ingrese un nombre"),
    ]);

    let (status, json) = error_to_response(AppError::Core(CoreError::InvalidFields(fields))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(
        json["fields"],
        serde_json::json!({
            "name": "Por favor ingrese un nombre",
            "price": "Los precios deben ser mayores que 0",
        })
    );
}

#[tokio::test]
async fn rejected_save_maps_to_field_errors() {
    let err = SaveError::Invalid(FieldErrors::from([("dose", "Las dosis deben estar entre 1 y 10")]));

    let (status, json) = error_to_response(AppError::from(err)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["fields"]["dose"], "Las dosis deben estar entre 1 y 10");
}

#[tokio::test]
async fn save_database_error_keeps_its_status() {
    let err = SaveError::Database(sqlx::Error::RowNotFound);

    let (status, json) = error_to_response(AppError::from(err)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
}

#[tokio::test]
async fn lookup_validation_errors_use_custom_message() {
    let errors = CreateCity {
        name: "Villa Elisa Norte".into(),
    }
    .validate()
    .unwrap_err();

    let (status, json) = error_to_response(AppError::from(errors)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        json["fields"]["name"],
        "El nombre debe tener entre 1 y 10 caracteres"
    );
}

#[tokio::test]
async fn internal_errors_are_sanitized() {
    for err in [
        AppError::Database(sqlx::Error::PoolTimedOut),
        AppError::Database(sqlx::Error::Protocol("password authentication failed".into())),
    ] {
        let (status, json) = error_to_response(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["code"], "INTERNAL_ERROR");
        assert_eq!(json["error"], "An internal error occurred");
    }
}
