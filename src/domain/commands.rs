use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{
    BookingId, ItemId, RequestId, UserId,
    booking::BookingStatus,
    item::ItemPatch,
    user::UserPatch,
};

/// コマンド：予約を作成する
#[allow(dead_code)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateBooking {
    pub booker_id: UserId,
    pub item_id: ItemId,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    /// 未指定なら WAITING
    pub status: Option<BookingStatus>,
}

/// コマンド：予約を承認/却下する
#[allow(dead_code)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecideBooking {
    pub acting_user_id: UserId,
    pub booking_id: BookingId,
    pub approved: bool,
}

/// コマンド：ユーザーを登録する
#[allow(dead_code)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateUser {
    pub name: Option<String>,
    pub email: Option<String>,
}

/// コマンド：ユーザーを部分更新する
#[allow(dead_code)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateUser {
    pub user_id: UserId,
    pub patch: UserPatch,
}

/// コマンド：アイテムを出品する
#[allow(dead_code)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateItem {
    pub owner_id: UserId,
    pub name: Option<String>,
    pub description: Option<String>,
    pub available: Option<bool>,
    pub request_id: Option<RequestId>,
}

/// コマンド：アイテムを部分更新する
#[allow(dead_code)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateItem {
    pub acting_user_id: UserId,
    pub item_id: ItemId,
    pub patch: ItemPatch,
}

/// コマンド：コメントを投稿する
#[allow(dead_code)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostComment {
    pub author_id: UserId,
    pub item_id: ItemId,
    pub text: String,
}

/// コマンド：アイテムリクエストを起票する
#[allow(dead_code)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateRequest {
    pub requestor_id: UserId,
    pub description: Option<String>,
}
