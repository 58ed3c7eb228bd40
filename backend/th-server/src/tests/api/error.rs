use crate::ApiError;

use th_app::AppError;
use th_db::DbError;

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
async fn test_not_found_returns_404_with_json_body() {
    let error = ApiError::NotFound {
        message: "Ticket 9 not found".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert_eq!(json["error"]["message"], "Ticket 9 not found");
    assert!(json["error"].get("field").is_none());
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field() {
    let error = ApiError::Validation {
        message: "Name cannot exceed 100 characters".into(),
        field: Some("name".into()),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "name");
}

#[tokio::test]
async fn test_constraint_error_returns_422() {
    let error = ApiError::Constraint {
        message: "CHECK constraint failed".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["error"]["code"], "CONSTRAINT_VIOLATION");
}

#[tokio::test]
async fn test_internal_error_returns_500() {
    let error = ApiError::Internal {
        message: "Database operation failed".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
}

#[test]
fn test_ticket_not_found_converts_to_not_found() {
    let db_err = DbError::TicketNotFound {
        id: 12,
        location: ErrorLocation::from(Location::caller()),
    };

    let api_err = ApiError::from(db_err);

    match api_err {
        ApiError::NotFound { message, .. } => assert!(message.contains("12")),
        _ => panic!("Expected NotFound error"),
    }
}

#[test]
fn test_sqlx_error_converts_to_internal_without_details() {
    let db_err = DbError::from(sqlx::Error::PoolTimedOut);

    let api_err = ApiError::from(db_err);

    match api_err {
        ApiError::Internal { message, .. } => {
            assert_eq!(message, "Database operation failed");
        }
        _ => panic!("Expected Internal error"),
    }
}

#[test]
fn test_app_validation_keeps_field() {
    let app_err = AppError::Validation {
        message: "Priority is required".into(),
        field: Some("priority".into()),
        location: ErrorLocation::from(Location::caller()),
    };

    let api_err = ApiError::from(app_err);

    match api_err {
        ApiError::Validation { message, field, .. } => {
            assert_eq!(message, "Priority is required");
            assert_eq!(field.as_deref(), Some("priority"));
        }
        _ => panic!("Expected Validation error"),
    }
}

#[test]
fn test_app_store_constraint_converts_to_constraint() {
    let app_err = AppError::Store(DbError::ConstraintViolation {
        message: "CHECK constraint failed".into(),
        location: ErrorLocation::from(Location::caller()),
    });

    let api_err = ApiError::from(app_err);

    assert!(matches!(api_err, ApiError::Constraint { .. }));
}
