#![allow(dead_code)]

use serde::{Deserialize, Serialize};

use super::UserId;

/// User集約 - マーケットプレイスの利用者
///
/// 出品者（owner）と借り手（booker）は同じUser型で表す。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub user_id: UserId,
    pub name: String,
    pub email: String,
}

/// ユーザーの部分更新
///
/// None のフィールドは変更しない。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
}

/// 純粋関数：ユーザーを登録する
pub fn register_user(name: String, email: String) -> User {
    User {
        user_id: UserId::new(),
        name,
        email,
    }
}

/// 純粋関数：部分更新を適用する
///
/// 副作用なし。新しいUserを返す。
pub fn apply_user_patch(user: &User, patch: UserPatch) -> User {
    User {
        user_id: user.user_id,
        name: patch.name.unwrap_or_else(|| user.name.clone()),
        email: patch.email.unwrap_or_else(|| user.email.clone()),
    }
}
