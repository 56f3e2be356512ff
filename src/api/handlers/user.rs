use crate::application::user::{
    delete_user as execute_delete_user, get_all_users as execute_get_all_users,
    get_user_by_id as execute_get_user_by_id, save_user as execute_save_user,
    update_user as execute_update_user,
};
use crate::domain::commands::{CreateUser, UpdateUser};
use crate::domain::user::UserPatch;
use crate::domain::value_objects::UserId;
use axum::{
    Json,
    extract::{Path, State},
};
use std::sync::Arc;
use uuid::Uuid;

use super::AppState;
use super::super::{
    error::ApiError,
    types::{UserRequest, UserResponse},
};

/// GET /users - 全ユーザーを取得
pub async fn get_all_users(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let users = execute_get_all_users(&state.service_deps).await?;

    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// POST /users - ユーザーを登録
pub async fn save_user(
    State(state): State<Arc<AppState>>,
    Json(req): Json<UserRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    tracing::info!("POST /users");

    let cmd = CreateUser {
        name: req.name,
        email: req.email,
    };

    let user = execute_save_user(&state.service_deps, cmd).await?;

    Ok(Json(UserResponse::from(user)))
}

/// GET /users/:id - ユーザーを取得
pub async fn get_user_by_id(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<UserResponse>, ApiError> {
    let user = execute_get_user_by_id(&state.service_deps, UserId::from_uuid(user_id)).await?;

    Ok(Json(UserResponse::from(user)))
}

/// PATCH /users/:id - ユーザーを部分更新
pub async fn update_user(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<Uuid>,
    Json(req): Json<UserRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    let cmd = UpdateUser {
        user_id: UserId::from_uuid(user_id),
        patch: UserPatch {
            name: req.name,
            email: req.email,
        },
    };

    let user = execute_update_user(&state.service_deps, cmd).await?;

    Ok(Json(UserResponse::from(user)))
}

/// DELETE /users/:id - ユーザーを削除
pub async fn delete_user(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<Uuid>,
) -> Result<(), ApiError> {
    execute_delete_user(&state.service_deps, UserId::from_uuid(user_id)).await?;

    Ok(())
}
