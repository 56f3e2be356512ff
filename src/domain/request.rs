#![allow(dead_code)]

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{RequestId, UserId};

/// ItemRequest集約 - 「こういう物を借りたい」という要望
///
/// 出品者はリクエストに応えるアイテムを request_id 付きで登録できる。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRequest {
    pub request_id: RequestId,
    pub requestor_id: UserId,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

/// 純粋関数：リクエストを起票する
pub fn open_request(
    requestor_id: UserId,
    description: String,
    created_at: DateTime<Utc>,
) -> ItemRequest {
    ItemRequest {
        request_id: RequestId::new(),
        requestor_id,
        description,
        created_at,
    }
}
