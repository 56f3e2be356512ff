use crate::domain::{
    self,
    booking::Booking,
    commands::{CreateItem, PostComment, UpdateItem},
    comment::Comment,
    item::Item,
    value_objects::{BookingId, CommentId, ItemId, Page, UserId},
};
use crate::ports::*;
use chrono::{DateTime, Utc};

use super::super::ServiceDependencies;
use super::super::errors::{Result, ServiceError};

/// 予約への短い参照（アイテム詳細の直近/次回予約表示用）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingRef {
    pub booking_id: BookingId,
    pub booker_id: UserId,
}

impl From<&Booking> for BookingRef {
    fn from(booking: &Booking) -> Self {
        Self {
            booking_id: booking.booking_id,
            booker_id: booking.booker_id,
        }
    }
}

/// 書き手の名前付きコメント
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentView {
    pub comment_id: CommentId,
    pub text: String,
    pub author_name: String,
    pub created_at: DateTime<Utc>,
}

/// アイテム詳細ビュー
///
/// 直近/次回の予約は所有者として参照した場合のみ埋まる。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemDetails {
    pub item: Item,
    pub comments: Vec<CommentView>,
    pub last_booking: Option<BookingRef>,
    pub next_booking: Option<BookingRef>,
}

/// アイテムを出品する
///
/// ビジネスルール：
/// - 所有者（操作ユーザー）が存在すること
/// - 名前と説明文は空白であってはならない
/// - 貸出可否フラグは必須
pub async fn save_item(deps: &ServiceDependencies, cmd: CreateItem) -> Result<Item> {
    let owner_exists = deps
        .user_store
        .exists(cmd.owner_id)
        .await
        .map_err(ServiceError::StoreError)?;

    if !owner_exists {
        return Err(ServiceError::UserNotFound);
    }

    let name = require_non_blank(cmd.name, "name")?;
    let description = require_non_blank(cmd.description, "description")?;
    let available = cmd
        .available
        .ok_or_else(|| ServiceError::InvalidArgument("available must be present".to_string()))?;

    let item = domain::item::list_item(cmd.owner_id, name, description, available, cmd.request_id);

    deps.item_store
        .save(item.clone())
        .await
        .map_err(ServiceError::StoreError)?;

    tracing::info!("listed item {:?} by owner {:?}", item.item_id, item.owner_id);

    Ok(item)
}

/// アイテムを部分更新する
///
/// ビジネスルール：
/// - アイテムが存在すること
/// - 操作ユーザーが所有者であること
///   （所有者以外の更新は ItemNotFound として報告する）
pub async fn update_item(deps: &ServiceDependencies, cmd: UpdateItem) -> Result<Item> {
    let item = deps
        .item_store
        .get_by_id(cmd.item_id)
        .await
        .map_err(ServiceError::StoreError)?
        .ok_or(ServiceError::ItemNotFound)?;

    if item.owner_id != cmd.acting_user_id {
        tracing::debug!(
            "user {:?} tried to update item {:?} they do not own",
            cmd.acting_user_id,
            cmd.item_id
        );
        return Err(ServiceError::ItemNotFound);
    }

    let updated = domain::item::apply_item_patch(&item, cmd.patch);

    deps.item_store
        .save(updated.clone())
        .await
        .map_err(ServiceError::StoreError)?;

    Ok(updated)
}

/// アイテム詳細を取得する
///
/// コメントは誰でも見られる。直近/次回の予約は所有者にのみ見せる。
pub async fn get_item_by_id(
    deps: &ServiceDependencies,
    acting_user_id: UserId,
    item_id: ItemId,
) -> Result<ItemDetails> {
    let item = deps
        .item_store
        .get_by_id(item_id)
        .await
        .map_err(ServiceError::StoreError)?
        .ok_or(ServiceError::ItemNotFound)?;

    let comments = load_comments(deps, item_id).await?;

    let (last_booking, next_booking) = if item.owner_id == acting_user_id {
        load_adjacent_bookings(deps, item_id).await?
    } else {
        (None, None)
    };

    Ok(ItemDetails {
        item,
        comments,
        last_booking,
        next_booking,
    })
}

/// 所有者のアイテム一覧を取得する（ページ指定）
///
/// 各アイテムに直近/次回の予約を付ける。
pub async fn get_items_by_user(
    deps: &ServiceDependencies,
    owner_id: UserId,
    from: i32,
    size: i32,
) -> Result<Vec<ItemDetails>> {
    let page = Page::from_query(from, size)
        .map_err(|_| ServiceError::InvalidArgument("Invalid pagination parameters".to_string()))?;

    let owner_exists = deps
        .user_store
        .exists(owner_id)
        .await
        .map_err(ServiceError::StoreError)?;

    if !owner_exists {
        return Err(ServiceError::UserNotFound);
    }

    let items = deps
        .item_store
        .find_by_owner_id(owner_id, page)
        .await
        .map_err(ServiceError::StoreError)?;

    let mut details = Vec::with_capacity(items.len());
    for item in items {
        let (last_booking, next_booking) = load_adjacent_bookings(deps, item.item_id).await?;
        details.push(ItemDetails {
            item,
            comments: Vec::new(),
            last_booking,
            next_booking,
        });
    }

    Ok(details)
}

/// アイテムを検索する（ページ指定）
///
/// 空の検索文字列は空の結果を返す（ページ指定の検証より先）。
pub async fn search_items(
    deps: &ServiceDependencies,
    text: &str,
    from: i32,
    size: i32,
) -> Result<Vec<Item>> {
    if text.is_empty() {
        return Ok(Vec::new());
    }

    let page = Page::from_query(from, size)
        .map_err(|_| ServiceError::InvalidArgument("Invalid pagination parameters".to_string()))?;

    deps.item_store
        .search(text, page)
        .await
        .map_err(ServiceError::StoreError)
}

/// コメントを投稿する
///
/// ビジネスルール（検証順）：
/// 1. 本文が空でないこと
/// 2. 書き手が存在すること
/// 3. アイテムが存在すること
/// 4. 書き手がそのアイテムの借り手で、予約開始日時が到来しており、
///    予約が REJECTED でないこと（満たさない場合は ItemUnavailable）
pub async fn post_comment(deps: &ServiceDependencies, cmd: PostComment) -> Result<CommentView> {
    if cmd.text.is_empty() {
        return Err(ServiceError::InvalidArgument(
            "Comment text must not be empty".to_string(),
        ));
    }

    let author = deps
        .user_store
        .get_by_id(cmd.author_id)
        .await
        .map_err(ServiceError::StoreError)?
        .ok_or(ServiceError::UserNotFound)?;

    let item = deps
        .item_store
        .get_by_id(cmd.item_id)
        .await
        .map_err(ServiceError::StoreError)?
        .ok_or(ServiceError::ItemNotFound)?;

    let bookings = deps
        .booking_store
        .find_for_item(item.item_id)
        .await
        .map_err(ServiceError::StoreError)?;

    let now = Utc::now();
    if !domain::comment::can_comment(&bookings, cmd.author_id, now) {
        return Err(ServiceError::ItemUnavailable);
    }

    let comment = domain::comment::write_comment(cmd.item_id, cmd.author_id, &cmd.text, now)
        .map_err(|_: domain::WriteCommentError| {
            ServiceError::InvalidArgument("Comment text must not be empty".to_string())
        })?;

    deps.comment_store
        .save(comment.clone())
        .await
        .map_err(ServiceError::StoreError)?;

    Ok(CommentView {
        comment_id: comment.comment_id,
        text: comment.text,
        author_name: author.name,
        created_at: comment.created_at,
    })
}

/// アイテムを削除する
pub async fn delete_item(deps: &ServiceDependencies, item_id: ItemId) -> Result<()> {
    let deleted = deps
        .item_store
        .delete(item_id)
        .await
        .map_err(ServiceError::StoreError)?;

    if !deleted {
        return Err(ServiceError::ItemNotFound);
    }

    tracing::info!("deleted item {:?}", item_id);

    Ok(())
}

/// アイテムのコメントを書き手の名前付きで読み込む
async fn load_comments(deps: &ServiceDependencies, item_id: ItemId) -> Result<Vec<CommentView>> {
    let comments = deps
        .comment_store
        .find_by_item_id(item_id)
        .await
        .map_err(ServiceError::StoreError)?;

    let mut views = Vec::with_capacity(comments.len());
    for comment in comments {
        views.push(to_comment_view(deps, comment).await?);
    }

    Ok(views)
}

async fn to_comment_view(deps: &ServiceDependencies, comment: Comment) -> Result<CommentView> {
    let author_name = deps
        .user_store
        .get_by_id(comment.author_id)
        .await
        .map_err(ServiceError::StoreError)?
        .map(|user| user.name)
        .unwrap_or_default();

    Ok(CommentView {
        comment_id: comment.comment_id,
        text: comment.text,
        author_name,
        created_at: comment.created_at,
    })
}

/// 直近と次回の予約を読み込む（REJECTED は除く）
async fn load_adjacent_bookings(
    deps: &ServiceDependencies,
    item_id: ItemId,
) -> Result<(Option<BookingRef>, Option<BookingRef>)> {
    let now = Utc::now();

    let last = deps
        .booking_store
        .find_last_for_item(item_id, now)
        .await
        .map_err(ServiceError::StoreError)?;

    let next = deps
        .booking_store
        .find_next_for_item(item_id, now)
        .await
        .map_err(ServiceError::StoreError)?;

    Ok((
        last.as_ref().map(BookingRef::from),
        next.as_ref().map(BookingRef::from),
    ))
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
