use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::application::item::{BookingRef, CommentView, ItemDetails};
use crate::application::request::RequestWithItems;
use crate::domain::booking::{Booking, BookingStatus};
use crate::domain::item::Item;
use crate::domain::request::ItemRequest;
use crate::domain::user::User;

// ============================================================================
// Users
// ============================================================================

/// ユーザー作成・更新リクエスト（PATCHでは欠けたフィールドは変更しない）
#[derive(Debug, Deserialize)]
pub struct UserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
}

/// ユーザーレスポンス
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.user_id.value(),
            name: user.name,
            email: user.email,
        }
    }
}

// ============================================================================
// Items
// ============================================================================

/// アイテム作成リクエスト
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemCreateRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub available: Option<bool>,
    pub request_id: Option<Uuid>,
}

/// アイテム部分更新リクエスト
#[derive(Debug, Deserialize)]
pub struct ItemPatchRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub available: Option<bool>,
}

/// 予約への短い参照（アイテム詳細の直近/次回予約）
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingShortResponse {
    pub id: Uuid,
    pub booker_id: Uuid,
}

impl From<&BookingRef> for BookingShortResponse {
    fn from(booking: &BookingRef) -> Self {
        Self {
            id: booking.booking_id.value(),
            booker_id: booking.booker_id.value(),
        }
    }
}

/// コメントレスポンス
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentResponse {
    pub id: Uuid,
    pub text: String,
    pub author_name: String,
    pub created: DateTime<Utc>,
}

impl From<CommentView> for CommentResponse {
    fn from(view: CommentView) -> Self {
        Self {
            id: view.comment_id.value(),
            text: view.text,
            author_name: view.author_name,
            created: view.created_at,
        }
    }
}

/// アイテムレスポンス
///
/// 直近/次回の予約は所有者として詳細を取得した場合のみ埋まる。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemResponse {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub available: bool,
    pub owner_id: Uuid,
    pub request_id: Option<Uuid>,
    pub comments: Vec<CommentResponse>,
    pub last_booking: Option<BookingShortResponse>,
    pub next_booking: Option<BookingShortResponse>,
}

impl From<Item> for ItemResponse {
    fn from(item: Item) -> Self {
        Self {
            id: item.item_id.value(),
            name: item.name,
            description: item.description,
            available: item.available,
            owner_id: item.owner_id.value(),
            request_id: item.request_id.map(|id| id.value()),
            comments: Vec::new(),
            last_booking: None,
            next_booking: None,
        }
    }
}

impl From<ItemDetails> for ItemResponse {
    fn from(details: ItemDetails) -> Self {
        let last_booking = details.last_booking.as_ref().map(BookingShortResponse::from);
        let next_booking = details.next_booking.as_ref().map(BookingShortResponse::from);

        let mut response = ItemResponse::from(details.item);
        response.comments = details
            .comments
            .into_iter()
            .map(CommentResponse::from)
            .collect();
        response.last_booking = last_booking;
        response.next_booking = next_booking;
        response
    }
}

/// コメント投稿リクエスト
#[derive(Debug, Deserialize)]
pub struct CommentRequest {
    pub text: Option<String>,
}

// ============================================================================
// Bookings
// ============================================================================

/// 予約作成リクエスト
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingCreateRequest {
    pub item_id: Uuid,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    /// 未指定なら WAITING
    pub status: Option<BookingStatus>,
}

/// 予約に含まれるアイテムの要約
#[derive(Debug, Serialize)]
pub struct BookingItemResponse {
    pub id: Uuid,
    pub name: String,
}

/// 予約に含まれる借り手の要約
#[derive(Debug, Serialize)]
pub struct BookingUserResponse {
    pub id: Uuid,
}

/// 予約レスポンス
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponse {
    pub id: Uuid,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub status: BookingStatus,
    pub booker_id: Uuid,
    pub item_id: Uuid,
    pub item: BookingItemResponse,
    pub booker: BookingUserResponse,
}

impl BookingResponse {
    /// アイテム名を添えて予約レスポンスを組み立てる
    pub fn from_booking(booking: &Booking, item_name: String) -> Self {
        Self {
            id: booking.booking_id.value(),
            start: booking.start,
            end: booking.end,
            status: booking.status,
            booker_id: booking.booker_id.value(),
            item_id: booking.item_id.value(),
            item: BookingItemResponse {
                id: booking.item_id.value(),
                name: item_name,
            },
            booker: BookingUserResponse {
                id: booking.booker_id.value(),
            },
        }
    }
}

/// 予約一覧のクエリパラメータ
#[derive(Debug, Deserialize)]
pub struct BookingListQuery {
    /// 状態フィルタ（既定は ALL）
    pub state: Option<String>,
    pub from: Option<i32>,
    pub size: Option<i32>,
}

/// 承認/却下のクエリパラメータ
#[derive(Debug, Deserialize)]
pub struct ApprovedQuery {
    pub approved: bool,
}

// ============================================================================
// Requests
// ============================================================================

/// アイテムリクエスト起票リクエスト
#[derive(Debug, Deserialize)]
pub struct RequestCreateRequest {
    pub description: Option<String>,
}

/// アイテムリクエストレスポンス
#[derive(Debug, Serialize)]
pub struct RequestResponse {
    pub id: Uuid,
    pub description: String,
    pub created: DateTime<Utc>,
}

impl From<ItemRequest> for RequestResponse {
    fn from(request: ItemRequest) -> Self {
        Self {
            id: request.request_id.value(),
            description: request.description,
            created: request.created_at,
        }
    }
}

/// 応答アイテム付きのアイテムリクエストレスポンス
#[derive(Debug, Serialize)]
pub struct RequestWithItemsResponse {
    pub id: Uuid,
    pub description: String,
    pub created: DateTime<Utc>,
    pub items: Vec<ItemResponse>,
}

impl From<RequestWithItems> for RequestWithItemsResponse {
    fn from(view: RequestWithItems) -> Self {
        Self {
            id: view.request.request_id.value(),
            description: view.request.description,
            created: view.request.created_at,
            items: view.items.into_iter().map(ItemResponse::from).collect(),
        }
    }
}

// ============================================================================
// Shared
// ============================================================================

/// ページ指定のクエリパラメータ
#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub from: Option<i32>,
    pub size: Option<i32>,
}

/// 検索のクエリパラメータ
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub text: Option<String>,
    pub from: Option<i32>,
    pub size: Option<i32>,
}

/// エラーレスポンス
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub description: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            description: description.into(),
        }
    }
}
