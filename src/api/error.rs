use crate::application::ServiceError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::types::ErrorResponse;

/// API層のエラー型
///
/// アプリケーション層のエラーをラップし、HTTPレスポンスへのマッピングを提供する。
#[derive(Debug)]
pub struct ApiError(ServiceError);

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error, description) = match &self.0 {
            // 404 Not Found - リソースが存在しない（認可エラーを含む）
            ServiceError::UserNotFound => (
                StatusCode::NOT_FOUND,
                self.0.to_string(),
                "User not found.".to_string(),
            ),
            ServiceError::ItemNotFound => (
                StatusCode::NOT_FOUND,
                self.0.to_string(),
                "Item not found.".to_string(),
            ),
            ServiceError::BookingNotFound => (
                StatusCode::NOT_FOUND,
                self.0.to_string(),
                "Booking not found.".to_string(),
            ),
            ServiceError::RequestNotFound => (
                StatusCode::NOT_FOUND,
                self.0.to_string(),
                "Request not found.".to_string(),
            ),

            // 409 Conflict - メールアドレスの重複
            ServiceError::EmailConflict => (
                StatusCode::CONFLICT,
                self.0.to_string(),
                "A user with this email already exists.".to_string(),
            ),

            // 400 Bad Request - 呼び出し側のエラー
            ServiceError::InvalidDateRange => (
                StatusCode::BAD_REQUEST,
                self.0.to_string(),
                "Booking end must be after start.".to_string(),
            ),
            ServiceError::ItemUnavailable => (
                StatusCode::BAD_REQUEST,
                self.0.to_string(),
                "Item is not available.".to_string(),
            ),
            ServiceError::UnsupportedState => (
                StatusCode::BAD_REQUEST,
                self.0.to_string(),
                "The booking has already been decided.".to_string(),
            ),
            ServiceError::InvalidArgument(msg) => (
                StatusCode::BAD_REQUEST,
                msg.clone(),
                "Validation error.".to_string(),
            ),

            // 500 Internal Server Error - ストア障害
            // 詳細はログに記録し、クライアントには一般的なメッセージのみを返す
            ServiceError::StoreError(e) => {
                tracing::error!("store error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                    "An unexpected error occurred.".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse::new(error, description));
        (status, body).into_response()
    }
}
