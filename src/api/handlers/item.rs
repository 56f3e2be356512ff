use crate::application::item::{
    delete_item as execute_delete_item, get_item_by_id as execute_get_item_by_id,
    get_items_by_user as execute_get_items_by_user, post_comment as execute_post_comment,
    save_item as execute_save_item, search_items as execute_search_items,
    update_item as execute_update_item,
};
use crate::domain::commands::{CreateItem, PostComment, UpdateItem};
use crate::domain::item::ItemPatch;
use crate::domain::value_objects::{ItemId, RequestId};
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
    types::{
        CommentRequest, CommentResponse, ItemCreateRequest, ItemPatchRequest, ItemResponse,
        PageQuery, SearchQuery,
    },
};

const DEFAULT_FROM: i32 = 0;
const DEFAULT_SIZE: i32 = 10;

/// POST /items - アイテムを出品
///
/// 操作ユーザー（ヘッダー）が所有者になる。
pub async fn save_item(
    State(state): State<Arc<AppState>>,
    SharerUserId(user_id): SharerUserId,
    Json(req): Json<ItemCreateRequest>,
) -> Result<Json<ItemResponse>, ApiError> {
    tracing::info!("POST /items by user {:?}", user_id);

    let cmd = CreateItem {
        owner_id: user_id,
        name: req.name,
        description: req.description,
        available: req.available,
        request_id: req.request_id.map(RequestId::from_uuid),
    };

    let item = execute_save_item(&state.service_deps, cmd).await?;

    Ok(Json(ItemResponse::from(item)))
}

/// PATCH /items/:id - アイテムを部分更新
///
/// 所有者のみが実行できる。
pub async fn update_item(
    State(state): State<Arc<AppState>>,
    SharerUserId(user_id): SharerUserId,
    Path(item_id): Path<Uuid>,
    Json(req): Json<ItemPatchRequest>,
) -> Result<Json<ItemResponse>, ApiError> {
    let cmd = UpdateItem {
        acting_user_id: user_id,
        item_id: ItemId::from_uuid(item_id),
        patch: ItemPatch {
            name: req.name,
            description: req.description,
            available: req.available,
        },
    };

    let item = execute_update_item(&state.service_deps, cmd).await?;

    Ok(Json(ItemResponse::from(item)))
}

/// GET /items/:id - アイテム詳細を取得
///
/// コメント付き。所有者が参照した場合は直近/次回の予約も返す。
pub async fn get_item_by_id(
    State(state): State<Arc<AppState>>,
    SharerUserId(user_id): SharerUserId,
    Path(item_id): Path<Uuid>,
) -> Result<Json<ItemResponse>, ApiError> {
    let details =
        execute_get_item_by_id(&state.service_deps, user_id, ItemId::from_uuid(item_id)).await?;

    Ok(Json(ItemResponse::from(details)))
}

/// GET /items - 操作ユーザーのアイテム一覧（ページ指定）
pub async fn get_items_by_user(
    State(state): State<Arc<AppState>>,
    SharerUserId(user_id): SharerUserId,
    Query(query): Query<PageQuery>,
) -> Result<Json<Vec<ItemResponse>>, ApiError> {
    let details = execute_get_items_by_user(
        &state.service_deps,
        user_id,
        query.from.unwrap_or(DEFAULT_FROM),
        query.size.unwrap_or(DEFAULT_SIZE),
    )
    .await?;

    Ok(Json(details.into_iter().map(ItemResponse::from).collect()))
}

/// GET /items/search?text= - アイテムを検索（ページ指定）
///
/// 空の検索文字列は空の結果を返す。
pub async fn search_items(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<ItemResponse>>, ApiError> {
    let items = execute_search_items(
        &state.service_deps,
        query.text.as_deref().unwrap_or_default(),
        query.from.unwrap_or(DEFAULT_FROM),
        query.size.unwrap_or(DEFAULT_SIZE),
    )
    .await?;

    Ok(Json(items.into_iter().map(ItemResponse::from).collect()))
}

/// POST /items/:id/comment - コメントを投稿
///
/// 予約開始日時が到来した借り手のみが投稿できる。
pub async fn save_comment(
    State(state): State<Arc<AppState>>,
    SharerUserId(user_id): SharerUserId,
    Path(item_id): Path<Uuid>,
    Json(req): Json<CommentRequest>,
) -> Result<Json<CommentResponse>, ApiError> {
    let cmd = PostComment {
        author_id: user_id,
        item_id: ItemId::from_uuid(item_id),
        text: req.text.unwrap_or_default(),
    };

    let comment = execute_post_comment(&state.service_deps, cmd).await?;

    Ok(Json(CommentResponse::from(comment)))
}

/// DELETE /items/:id - アイテムを削除
pub async fn delete_item(
    State(state): State<Arc<AppState>>,
    SharerUserId(_user_id): SharerUserId,
    Path(item_id): Path<Uuid>,
) -> Result<(), ApiError> {
    execute_delete_item(&state.service_deps, ItemId::from_uuid(item_id)).await?;

    Ok(())
}
