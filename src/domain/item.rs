#![allow(dead_code)]

use serde::{Deserialize, Serialize};

use super::{ItemId, RequestId, UserId};

/// Item集約 - 貸し出しに出品された物
///
/// 所有者とリクエストへはIDのみで参照する。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub item_id: ItemId,
    pub owner_id: UserId,
    pub name: String,
    pub description: String,
    /// 現時点で予約を受け付けるか
    pub available: bool,
    /// このアイテムが応答したリクエスト
    pub request_id: Option<RequestId>,
}

/// アイテムの部分更新
///
/// None のフィールドは変更しない。所有者は変更できない。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub available: Option<bool>,
}

/// 純粋関数：アイテムを出品する
pub fn list_item(
    owner_id: UserId,
    name: String,
    description: String,
    available: bool,
    request_id: Option<RequestId>,
) -> Item {
    Item {
        item_id: ItemId::new(),
        owner_id,
        name,
        description,
        available,
        request_id,
    }
}

/// 純粋関数：部分更新を適用する
///
/// 副作用なし。新しいItemを返す。
pub fn apply_item_patch(item: &Item, patch: ItemPatch) -> Item {
    Item {
        item_id: item.item_id,
        owner_id: item.owner_id,
        name: patch.name.unwrap_or_else(|| item.name.clone()),
        description: patch.description.unwrap_or_else(|| item.description.clone()),
        available: patch.available.unwrap_or(item.available),
        request_id: item.request_id,
    }
}
