use axum::response::IntoResponse;
use uuid::Uuid;

use memograph_api::error::ApiError;
use memograph_engine::EngineError;
use memograph_persist::StoreError;

#[tokio::test]
async fn test_not_found_maps_to_404() {
    let error: ApiError = EngineError::ThreadNotFound(Uuid::new_v4()).into();
    let response = error.into_response();
    assert_eq!(response.status(), axum::http::StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_validation_maps_to_400() {
    let error: ApiError = EngineError::Validation("window_size out of bounds".to_string()).into();
    let response = error.into_response();
    assert_eq!(response.status(), axum::http::StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_store_failure_maps_to_503() {
    let error: ApiError =
        EngineError::Store(StoreError::Connection("refused".to_string())).into();
    let response = error.into_response();
    assert_eq!(response.status(), axum::http::StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_internal_maps_to_500() {
    let error: ApiError =
        EngineError::Internal("embedding dimensionality mismatch".to_string()).into();
    let response = error.into_response();
    assert_eq!(
        response.status(),
        axum::http::StatusCode::INTERNAL_SERVER_ERROR
    );
}

#[tokio::test]
async fn test_bad_request_response() {
    let error = ApiError::BadRequest("Test error".to_string());
    let response = error.into_response();
    assert_eq!(response.status(), axum::http::StatusCode::BAD_REQUEST);
}
