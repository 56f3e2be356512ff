use crate::domain::{
    self,
    commands::{CreateUser, UpdateUser},
    user::User,
    value_objects::UserId,
};
use crate::ports::*;

use super::super::ServiceDependencies;
use super::super::errors::{Result, ServiceError};

/// 全ユーザーを取得する
pub async fn get_all_users(deps: &ServiceDependencies) -> Result<Vec<User>> {
    deps.user_store
        .find_all()
        .await
        .map_err(ServiceError::StoreError)
}

/// ユーザーを登録する
///
/// ビジネスルール：
/// - 名前とメールアドレスは空白であってはならない
/// - メールアドレスは全ユーザーで一意
pub async fn save_user(deps: &ServiceDependencies, cmd: CreateUser) -> Result<User> {
    let name = require_non_blank(cmd.name, "name")?;
    let email = require_non_blank(cmd.email, "email")?;

    let existing = deps
        .user_store
        .find_by_email(&email)
        .await
        .map_err(ServiceError::StoreError)?;

    if existing.is_some() {
        return Err(ServiceError::EmailConflict);
    }

    let user = domain::user::register_user(name, email);

    deps.user_store
        .save(user.clone())
        .await
        .map_err(ServiceError::StoreError)?;

    tracing::info!("registered user {:?}", user.user_id);

    Ok(user)
}

/// ユーザーを部分更新する
///
/// None のフィールドは変更しない。メールアドレスを変更する場合は
/// 他ユーザーとの重複を確認する。
pub async fn update_user(deps: &ServiceDependencies, cmd: UpdateUser) -> Result<User> {
    let user = deps
        .user_store
        .get_by_id(cmd.user_id)
        .await
        .map_err(ServiceError::StoreError)?
        .ok_or(ServiceError::UserNotFound)?;

    if let Some(email) = cmd.patch.email.as_deref() {
        let holder = deps
            .user_store
            .find_by_email(email)
            .await
            .map_err(ServiceError::StoreError)?;

        if holder.is_some_and(|other| other.user_id != cmd.user_id) {
            return Err(ServiceError::EmailConflict);
        }
    }

    let updated = domain::user::apply_user_patch(&user, cmd.patch);

    deps.user_store
        .save(updated.clone())
        .await
        .map_err(ServiceError::StoreError)?;

    Ok(updated)
}

/// IDでユーザーを取得する
pub async fn get_user_by_id(deps: &ServiceDependencies, user_id: UserId) -> Result<User> {
    deps.user_store
        .get_by_id(user_id)
        .await
        .map_err(ServiceError::StoreError)?
        .ok_or(ServiceError::UserNotFound)
}

/// ユーザーを削除する
pub async fn delete_user(deps: &ServiceDependencies, user_id: UserId) -> Result<()> {
    let deleted = deps
        .user_store
        .delete(user_id)
        .await
        .map_err(ServiceError::StoreError)?;

    if !deleted {
        return Err(ServiceError::UserNotFound);
    }

    tracing::info!("deleted user {:?}", user_id);

    Ok(())
}

fn require_non_blank(value: Option<String>, field: &str) -> Result<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ServiceError::InvalidArgument(format!(
            "{} must not be blank",
            field
        ))),
    }
}
