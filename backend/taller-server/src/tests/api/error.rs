use crate::ApiError;
use crate::api::error::INTERNAL_ERROR_MESSAGE;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_not_found_returns_404_with_flat_error() {
    let (status, json) = body_json(ApiError::not_found("Usuario no encontrado")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json, serde_json::json!({ "error": "Usuario no encontrado" }));
}

#[tokio::test]
async fn test_validation_returns_400_with_message() {
    let (status, json) =
        body_json(ApiError::validation("El nombre es obligatorio", "nombre")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "El nombre es obligatorio");
    assert!(json.get("field").is_none());
}

#[tokio::test]
async fn test_internal_error_hides_cause() {
    let error = ApiError::Internal {
        message: "disk I/O error at /var/lib/taller.db".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], INTERNAL_ERROR_MESSAGE);
}

#[test]
fn test_sqlx_error_converts_to_internal() {
    let error: ApiError = sqlx::Error::PoolClosed.into();

    assert!(matches!(error, ApiError::Internal { .. }));
    assert_eq!(error.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[test]
fn test_db_error_converts_to_internal() {
    let db_error = taller_db::DbError::from(sqlx::Error::RowNotFound);

    let error = ApiError::from(db_error);

    assert!(matches!(error, ApiError::Internal { .. }));
}
