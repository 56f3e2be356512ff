use chrono::{Duration, Utc};
use rusty_sharing_ddd::adapters::memory::MemoryBackend;
use rusty_sharing_ddd::application::item::{
    delete_item, get_item_by_id, get_items_by_user, post_comment, save_item, search_items,
    update_item,
};
use rusty_sharing_ddd::application::{ServiceDependencies, ServiceError};
use rusty_sharing_ddd::domain::booking::{Booking, BookingStatus};
use rusty_sharing_ddd::domain::commands::{CreateItem, PostComment, UpdateItem};
use rusty_sharing_ddd::domain::item::ItemPatch;
use rusty_sharing_ddd::domain::user::{self, User};
use rusty_sharing_ddd::domain::value_objects::{BookingId, ItemId, UserId};
use rusty_sharing_ddd::ports::{BookingStore, ItemStore, UserStore};
use std::sync::Arc;

// ============================================================================
// テスト用セットアップ
// ============================================================================

fn make_deps() -> ServiceDependencies {
    let backend = Arc::new(MemoryBackend::new());

    ServiceDependencies {
        user_store: backend.clone(),
        item_store: backend.clone(),
        booking_store: backend.clone(),
        comment_store: backend.clone(),
        request_store: backend,
    }
}

async fn seed_user(deps: &ServiceDependencies, name: &str, email: &str) -> User {
    let user = user::register_user(name.to_string(), email.to_string());
    deps.user_store.save(user.clone()).await.unwrap();
    user
}

fn item_cmd(owner_id: UserId, name: &str, description: &str) -> CreateItem {
    CreateItem {
        owner_id,
        name: Some(name.to_string()),
        description: Some(description.to_string()),
        available: Some(true),
        request_id: None,
    }
}

async fn seed_booking(
    deps: &ServiceDependencies,
    item_id: ItemId,
    booker_id: UserId,
    start_offset_hours: i64,
    status: BookingStatus,
) -> Booking {
    let now = Utc::now();
    let booking = Booking {
        booking_id: BookingId::new(),
        item_id,
        booker_id,
        start: now + Duration::hours(start_offset_hours),
        end: now + Duration::hours(start_offset_hours + 2),
        status,
    };
    deps.booking_store.save(booking.clone()).await.unwrap();
    booking
}

// ============================================================================
// save_item / update_item
// ============================================================================

#[tokio::test]
async fn test_save_item_persists_with_owner() {
    let deps = make_deps();
    let owner = seed_user(&deps, "owner", "owner@example.com").await;

    let item = save_item(&deps, item_cmd(owner.user_id, "drill", "cordless drill"))
        .await
        .unwrap();

    assert_eq!(item.owner_id, owner.user_id);
    assert!(item.available);

    let stored = deps.item_store.get_by_id(item.item_id).await.unwrap();
    assert_eq!(stored, Some(item));
}

#[tokio::test]
async fn test_save_item_fails_for_unknown_owner() {
    let deps = make_deps();

    let result = save_item(&deps, item_cmd(UserId::new(), "drill", "cordless drill")).await;

    assert!(matches!(result.unwrap_err(), ServiceError::UserNotFound));
}

#[tokio::test]
async fn test_save_item_validates_fields() {
    let deps = make_deps();
    let owner = seed_user(&deps, "owner", "owner@example.com").await;

    // 空白の名前
    let mut cmd = item_cmd(owner.user_id, " ", "cordless drill");
    let result = save_item(&deps, cmd).await;
    assert!(matches!(
        result.unwrap_err(),
        ServiceError::InvalidArgument(_)
    ));

    // 説明文なし
    cmd = item_cmd(owner.user_id, "drill", "desc");
    cmd.description = None;
    let result = save_item(&deps, cmd).await;
    assert!(matches!(
        result.unwrap_err(),
        ServiceError::InvalidArgument(_)
    ));

    // 貸出可否なし
    cmd = item_cmd(owner.user_id, "drill", "cordless drill");
    cmd.available = None;
    let result = save_item(&deps, cmd).await;
    assert!(matches!(
        result.unwrap_err(),
        ServiceError::InvalidArgument(_)
    ));
}

#[tokio::test]
async fn test_update_item_merges_patch() {
    let deps = make_deps();
    let owner = seed_user(&deps, "owner", "owner@example.com").await;
    let item = save_item(&deps, item_cmd(owner.user_id, "drill", "cordless drill"))
        .await
        .unwrap();

    let updated = update_item(
        &deps,
        UpdateItem {
            acting_user_id: owner.user_id,
            item_id: item.item_id,
            patch: ItemPatch {
                name: None,
                description: None,
                available: Some(false),
            },
        },
    )
    .await
    .unwrap();

    assert_eq!(updated.name, "drill");
    assert!(!updated.available);
}

#[tokio::test]
async fn test_update_item_by_non_owner_fails_as_not_found() {
    let deps = make_deps();
    let owner = seed_user(&deps, "owner", "owner@example.com").await;
    let stranger = seed_user(&deps, "stranger", "stranger@example.com").await;
    let item = save_item(&deps, item_cmd(owner.user_id, "drill", "cordless drill"))
        .await
        .unwrap();

    let result = update_item(
        &deps,
        UpdateItem {
            acting_user_id: stranger.user_id,
            item_id: item.item_id,
            patch: ItemPatch {
                name: Some("stolen drill".to_string()),
                description: None,
                available: None,
            },
        },
    )
    .await;

    assert!(matches!(result.unwrap_err(), ServiceError::ItemNotFound));
}

// ============================================================================
// get_item_by_id / get_items_by_user
// ============================================================================

#[tokio::test]
async fn test_get_item_shows_adjacent_bookings_to_owner_only() {
    let deps = make_deps();
    let owner = seed_user(&deps, "owner", "owner@example.com").await;
    let booker = seed_user(&deps, "booker", "booker@example.com").await;
    let item = save_item(&deps, item_cmd(owner.user_id, "drill", "cordless drill"))
        .await
        .unwrap();

    let last = seed_booking(&deps, item.item_id, booker.user_id, -3, BookingStatus::Approved).await;
    let next = seed_booking(&deps, item.item_id, booker.user_id, 3, BookingStatus::Waiting).await;
    // REJECTED は直近/次回に含まれない
    seed_booking(&deps, item.item_id, booker.user_id, -1, BookingStatus::Rejected).await;
    seed_booking(&deps, item.item_id, booker.user_id, 1, BookingStatus::Rejected).await;

    // 所有者には直近/次回が見える
    let details = get_item_by_id(&deps, owner.user_id, item.item_id).await.unwrap();
    assert_eq!(
        details.last_booking.as_ref().map(|b| b.booking_id),
        Some(last.booking_id)
    );
    assert_eq!(
        details.next_booking.as_ref().map(|b| b.booking_id),
        Some(next.booking_id)
    );

    // 第三者には見えない
    let details = get_item_by_id(&deps, booker.user_id, item.item_id).await.unwrap();
    assert!(details.last_booking.is_none());
    assert!(details.next_booking.is_none());
}

#[tokio::test]
async fn test_get_item_fails_for_unknown_item() {
    let deps = make_deps();
    let user = seed_user(&deps, "user", "user@example.com").await;

    let result = get_item_by_id(&deps, user.user_id, ItemId::new()).await;

    assert!(matches!(result.unwrap_err(), ServiceError::ItemNotFound));
}

#[tokio::test]
async fn test_get_items_by_user_returns_only_owned_items() {
    let deps = make_deps();
    let owner = seed_user(&deps, "owner", "owner@example.com").await;
    let other = seed_user(&deps, "other", "other@example.com").await;
    let item = save_item(&deps, item_cmd(owner.user_id, "drill", "cordless drill"))
        .await
        .unwrap();
    save_item(&deps, item_cmd(other.user_id, "tent", "two person tent"))
        .await
        .unwrap();

    let details = get_items_by_user(&deps, owner.user_id, 0, 10).await.unwrap();

    assert_eq!(details.len(), 1);
    assert_eq!(details[0].item.item_id, item.item_id);
}

#[tokio::test]
async fn test_delete_item_removes_item() {
    let deps = make_deps();
    let owner = seed_user(&deps, "owner", "owner@example.com").await;
    let item = save_item(&deps, item_cmd(owner.user_id, "drill", "cordless drill"))
        .await
        .unwrap();

    delete_item(&deps, item.item_id).await.unwrap();

    let result = get_item_by_id(&deps, owner.user_id, item.item_id).await;
    assert!(matches!(result.unwrap_err(), ServiceError::ItemNotFound));

    // 既に消えているアイテムの削除も ItemNotFound
    let result = delete_item(&deps, item.item_id).await;
    assert!(matches!(result.unwrap_err(), ServiceError::ItemNotFound));
}

#[tokio::test]
async fn test_get_items_by_user_validates_pagination() {
    let deps = make_deps();
    let owner = seed_user(&deps, "owner", "owner@example.com").await;

    let result = get_items_by_user(&deps, owner.user_id, -1, 10).await;

    assert!(matches!(
        result.unwrap_err(),
        ServiceError::InvalidArgument(_)
    ));
}

// ============================================================================
// search_items
// ============================================================================

#[tokio::test]
async fn test_search_matches_name_and_description_case_insensitively() {
    let deps = make_deps();
    let owner = seed_user(&deps, "owner", "owner@example.com").await;
    let drill = save_item(&deps, item_cmd(owner.user_id, "Cordless Drill", "power tool"))
        .await
        .unwrap();
    let tent = save_item(&deps, item_cmd(owner.user_id, "tent", "DRILL holes included"))
        .await
        .unwrap();
    save_item(&deps, item_cmd(owner.user_id, "ladder", "aluminium ladder"))
        .await
        .unwrap();

    let found = search_items(&deps, "drill", 0, 10).await.unwrap();
    let mut ids: Vec<_> = found.iter().map(|i| i.item_id).collect();
    ids.sort_by_key(|id| id.value());

    let mut expected = vec![drill.item_id, tent.item_id];
    expected.sort_by_key(|id| id.value());
    assert_eq!(ids, expected);
}

#[tokio::test]
async fn test_search_skips_unavailable_items() {
    let deps = make_deps();
    let owner = seed_user(&deps, "owner", "owner@example.com").await;
    let mut cmd = item_cmd(owner.user_id, "drill", "cordless drill");
    cmd.available = Some(false);
    save_item(&deps, cmd).await.unwrap();

    let found = search_items(&deps, "drill", 0, 10).await.unwrap();

    assert!(found.is_empty());
}

#[tokio::test]
async fn test_search_with_empty_text_returns_empty_before_validation() {
    let deps = make_deps();

    // 空の検索文字列はページ指定が不正でも空の結果を返す
    let found = search_items(&deps, "", -1, -1).await.unwrap();

    assert!(found.is_empty());
}

#[tokio::test]
async fn test_search_validates_pagination() {
    let deps = make_deps();

    let result = search_items(&deps, "drill", -1, -1).await;

    assert!(matches!(
        result.unwrap_err(),
        ServiceError::InvalidArgument(_)
    ));
}

// ============================================================================
// post_comment
// ============================================================================

#[tokio::test]
async fn test_post_comment_by_renter_with_started_booking() {
    let deps = make_deps();
    let owner = seed_user(&deps, "owner", "owner@example.com").await;
    let renter = seed_user(&deps, "renter", "renter@example.com").await;
    let item = save_item(&deps, item_cmd(owner.user_id, "drill", "cordless drill"))
        .await
        .unwrap();
    seed_booking(&deps, item.item_id, renter.user_id, -2, BookingStatus::Approved).await;

    let comment = post_comment(
        &deps,
        PostComment {
            author_id: renter.user_id,
            item_id: item.item_id,
            text: "works great".to_string(),
        },
    )
    .await
    .unwrap();

    assert_eq!(comment.text, "works great");
    assert_eq!(comment.author_name, "renter");

    // アイテム詳細のコメントに現れる
    let details = get_item_by_id(&deps, owner.user_id, item.item_id).await.unwrap();
    assert_eq!(details.comments.len(), 1);
    assert_eq!(details.comments[0].comment_id, comment.comment_id);
}

#[tokio::test]
async fn test_post_comment_with_empty_text_fails() {
    let deps = make_deps();
    let owner = seed_user(&deps, "owner", "owner@example.com").await;
    let renter = seed_user(&deps, "renter", "renter@example.com").await;
    let item = save_item(&deps, item_cmd(owner.user_id, "drill", "cordless drill"))
        .await
        .unwrap();
    seed_booking(&deps, item.item_id, renter.user_id, -2, BookingStatus::Approved).await;

    let result = post_comment(
        &deps,
        PostComment {
            author_id: renter.user_id,
            item_id: item.item_id,
            text: String::new(),
        },
    )
    .await;

    assert!(matches!(
        result.unwrap_err(),
        ServiceError::InvalidArgument(_)
    ));
}

#[tokio::test]
async fn test_post_comment_without_eligible_booking_fails() {
    let deps = make_deps();
    let owner = seed_user(&deps, "owner", "owner@example.com").await;
    let renter = seed_user(&deps, "renter", "renter@example.com").await;
    let stranger = seed_user(&deps, "stranger", "stranger@example.com").await;
    let item = save_item(&deps, item_cmd(owner.user_id, "drill", "cordless drill"))
        .await
        .unwrap();

    // 予約なしの第三者
    let result = post_comment(
        &deps,
        PostComment {
            author_id: stranger.user_id,
            item_id: item.item_id,
            text: "never used it".to_string(),
        },
    )
    .await;
    assert!(matches!(
        result.unwrap_err(),
        ServiceError::ItemUnavailable
    ));

    // 開始前の予約しか持たない借り手
    seed_booking(&deps, item.item_id, renter.user_id, 2, BookingStatus::Approved).await;
    let result = post_comment(
        &deps,
        PostComment {
            author_id: renter.user_id,
            item_id: item.item_id,
            text: "not yet".to_string(),
        },
    )
    .await;
    assert!(matches!(
        result.unwrap_err(),
        ServiceError::ItemUnavailable
    ));
}

#[tokio::test]
async fn test_post_comment_with_rejected_booking_fails() {
    let deps = make_deps();
    let owner = seed_user(&deps, "owner", "owner@example.com").await;
    let renter = seed_user(&deps, "renter", "renter@example.com").await;
    let item = save_item(&deps, item_cmd(owner.user_id, "drill", "cordless drill"))
        .await
        .unwrap();
    seed_booking(&deps, item.item_id, renter.user_id, -2, BookingStatus::Rejected).await;

    let result = post_comment(
        &deps,
        PostComment {
            author_id: renter.user_id,
            item_id: item.item_id,
            text: "rejected".to_string(),
        },
    )
    .await;

    assert!(matches!(
        result.unwrap_err(),
        ServiceError::ItemUnavailable
    ));
}
