use crate::application::request::{
    add_request as execute_add_request, get_all_requests as execute_get_all_requests,
    get_own_requests as execute_get_own_requests, get_request_by_id as execute_get_request_by_id,
};
use crate::domain::commands::CreateRequest;
use crate::domain::value_objects::RequestId;
use axum::{
    Json,
    extract::{Path, Query, State},
};
use std::sync::Arc;
use uuid::Uuid;

use super::AppState;
use super::super::{
    error::ApiError,
    extract::SharerUserId,
    types::{PageQuery, RequestCreateRequest, RequestResponse, RequestWithItemsResponse},
};

const DEFAULT_FROM: i32 = 0;
/// 他ユーザーのリクエスト一覧の既定サイズ
const DEFAULT_SIZE: i32 = 20;

/// POST /requests - アイテムリクエストを起票
pub async fn add_request(
    State(state): State<Arc<AppState>>,
    SharerUserId(user_id): SharerUserId,
    Json(req): Json<RequestCreateRequest>,
) -> Result<Json<RequestResponse>, ApiError> {
    let cmd = CreateRequest {
        requestor_id: user_id,
        description: req.description,
    };

    let request = execute_add_request(&state.service_deps, cmd).await?;

    Ok(Json(RequestResponse::from(request)))
}

/// GET /requests - 自分のリクエスト一覧（応答アイテム付き）
pub async fn get_requests(
    State(state): State<Arc<AppState>>,
    SharerUserId(user_id): SharerUserId,
) -> Result<Json<Vec<RequestWithItemsResponse>>, ApiError> {
    let requests = execute_get_own_requests(&state.service_deps, user_id).await?;

    Ok(Json(
        requests
            .into_iter()
            .map(RequestWithItemsResponse::from)
            .collect(),
    ))
}

/// GET /requests/all - 他ユーザーのリクエスト一覧（ページ指定）
pub async fn get_all_requests(
    State(state): State<Arc<AppState>>,
    SharerUserId(user_id): SharerUserId,
    Query(query): Query<PageQuery>,
) -> Result<Json<Vec<RequestWithItemsResponse>>, ApiError> {
    let requests = execute_get_all_requests(
        &state.service_deps,
        user_id,
        query.from.unwrap_or(DEFAULT_FROM),
        query.size.unwrap_or(DEFAULT_SIZE),
    )
    .await?;

    Ok(Json(
        requests
            .into_iter()
            .map(RequestWithItemsResponse::from)
            .collect(),
    ))
}

/// GET /requests/:id - リクエストを取得（応答アイテム付き）
pub async fn get_request_by_id(
    State(state): State<Arc<AppState>>,
    SharerUserId(user_id): SharerUserId,
    Path(request_id): Path<Uuid>,
) -> Result<Json<RequestWithItemsResponse>, ApiError> {
    let request = execute_get_request_by_id(
        &state.service_deps,
        user_id,
        RequestId::from_uuid(request_id),
    )
    .await?;

    Ok(Json(RequestWithItemsResponse::from(request)))
}
