use crate::domain::{
    self,
    commands::CreateRequest,
    item::Item,
    request::ItemRequest,
    value_objects::{Page, RequestId, UserId},
};
use crate::ports::*;
use chrono::Utc;

use super::super::ServiceDependencies;
use super::super::errors::{Result, ServiceError};

/// 応答アイテム付きのリクエストビュー
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestWithItems {
    pub request: ItemRequest,
    pub items: Vec<Item>,
}

/// アイテムリクエストを起票する
///
/// ビジネスルール：
/// - 起票者が存在すること
/// - 説明文は空白であってはならない
pub async fn add_request(deps: &ServiceDependencies, cmd: CreateRequest) -> Result<ItemRequest> {
    let requestor_exists = deps
        .user_store
        .exists(cmd.requestor_id)
        .await
        .map_err(ServiceError::StoreError)?;

    if !requestor_exists {
        return Err(ServiceError::UserNotFound);
    }

    let description = match cmd.description {
        Some(d) if !d.trim().is_empty() => d,
        _ => {
            return Err(ServiceError::InvalidArgument(
                "description must not be blank".to_string(),
            ));
        }
    };

    let request = domain::request::open_request(cmd.requestor_id, description, Utc::now());

    deps.request_store
        .save(request.clone())
        .await
        .map_err(ServiceError::StoreError)?;

    Ok(request)
}

/// 自分のリクエスト一覧を取得する（応答アイテム付き）
pub async fn get_own_requests(
    deps: &ServiceDependencies,
    requestor_id: UserId,
) -> Result<Vec<RequestWithItems>> {
    let requestor_exists = deps
        .user_store
        .exists(requestor_id)
        .await
        .map_err(ServiceError::StoreError)?;

    if !requestor_exists {
        return Err(ServiceError::UserNotFound);
    }

    let requests = deps
        .request_store
        .find_by_requestor_id(requestor_id)
        .await
        .map_err(ServiceError::StoreError)?;

    attach_items(deps, requests).await
}

/// 他ユーザーのリクエスト一覧を取得する（ページ指定、応答アイテム付き）
///
/// ページ指定は操作ユーザーの存在確認より先に検証する。
pub async fn get_all_requests(
    deps: &ServiceDependencies,
    acting_user_id: UserId,
    from: i32,
    size: i32,
) -> Result<Vec<RequestWithItems>> {
    let page = Page::from_query(from, size)
        .map_err(|_| ServiceError::InvalidArgument("Invalid pagination parameters".to_string()))?;

    let user_exists = deps
        .user_store
        .exists(acting_user_id)
        .await
        .map_err(ServiceError::StoreError)?;

    if !user_exists {
        return Err(ServiceError::UserNotFound);
    }

    let requests = deps
        .request_store
        .find_all_excluding(acting_user_id, page)
        .await
        .map_err(ServiceError::StoreError)?;

    attach_items(deps, requests).await
}

/// IDでリクエストを取得する（応答アイテム付き）
pub async fn get_request_by_id(
    deps: &ServiceDependencies,
    acting_user_id: UserId,
    request_id: RequestId,
) -> Result<RequestWithItems> {
    let user_exists = deps
        .user_store
        .exists(acting_user_id)
        .await
        .map_err(ServiceError::StoreError)?;

    if !user_exists {
        return Err(ServiceError::UserNotFound);
    }

    let request = deps
        .request_store
        .get_by_id(request_id)
        .await
        .map_err(ServiceError::StoreError)?
        .ok_or(ServiceError::RequestNotFound)?;

    let items = deps
        .item_store
        .find_by_request_id(request_id)
        .await
        .map_err(ServiceError::StoreError)?;

    Ok(RequestWithItems { request, items })
}

async fn attach_items(
    deps: &ServiceDependencies,
    requests: Vec<ItemRequest>,
) -> Result<Vec<RequestWithItems>> {
    let mut views = Vec::with_capacity(requests.len());
    for request in requests {
        let items = deps
            .item_store
            .find_by_request_id(request.request_id)
            .await
            .map_err(ServiceError::StoreError)?;
        views.push(RequestWithItems { request, items });
    }

    Ok(views)
}
