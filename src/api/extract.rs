use crate::application::ServiceError;
use crate::domain::value_objects::UserId;
use axum::{extract::FromRequestParts, http::request::Parts};
use uuid::Uuid;

use super::error::ApiError;

/// 操作ユーザーIDを運ぶヘッダー名
///
/// 認証自体はスコープ外。リバースプロキシ等が検証済みのIDを
/// このヘッダーで引き渡す前提で、値をそのまま信頼する。
pub const USER_ID_HEADER: &str = "X-Sharer-User-Id";

/// X-Sharer-User-Id ヘッダーから操作ユーザーIDを取り出すエクストラクタ
#[derive(Debug, Clone, Copy)]
pub struct SharerUserId(pub UserId);

#[axum::async_trait]
impl<S> FromRequestParts<S> for SharerUserId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let header = parts.headers.get(USER_ID_HEADER).ok_or_else(|| {
            ApiError::from(ServiceError::InvalidArgument(format!(
                "{} header is required",
                USER_ID_HEADER
            )))
        })?;

        let value = header.to_str().map_err(|_| {
            ApiError::from(ServiceError::InvalidArgument(format!(
                "{} header is not valid text",
                USER_ID_HEADER
            )))
        })?;

        let uuid = Uuid::parse_str(value).map_err(|_| {
            ApiError::from(ServiceError::InvalidArgument(format!(
                "{} header is not a valid user id",
                USER_ID_HEADER
            )))
        })?;

        Ok(SharerUserId(UserId::from_uuid(uuid)))
    }
}
