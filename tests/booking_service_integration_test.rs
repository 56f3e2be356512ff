use chrono::{DateTime, Duration, Utc};
use rusty_sharing_ddd::adapters::memory::MemoryBackend;
use rusty_sharing_ddd::application::booking::{
    create_booking, decide_booking, get_booking_for_participant, list_bookings_for_booker,
    list_bookings_for_owner,
};
use rusty_sharing_ddd::application::{ServiceDependencies, ServiceError};
use rusty_sharing_ddd::domain::booking::{Booking, BookingStatus};
use rusty_sharing_ddd::domain::commands::{CreateBooking, DecideBooking};
use rusty_sharing_ddd::domain::item::{self, Item};
use rusty_sharing_ddd::domain::user::{self, User};
use rusty_sharing_ddd::domain::value_objects::{BookingId, ItemId, UserId};
use rusty_sharing_ddd::ports::{BookingStore, ItemStore, UserStore};
use std::sync::Arc;

// ============================================================================
// テスト用セットアップ
// ============================================================================

/// インメモリアダプタで依存関係を組み立てる
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

async fn seed_item(deps: &ServiceDependencies, owner_id: UserId, available: bool) -> Item {
    let item = item::list_item(
        owner_id,
        "cordless drill".to_string(),
        "a well used cordless drill".to_string(),
        available,
        None,
    );
    deps.item_store.save(item.clone()).await.unwrap();
    item
}

/// ストアに直接予約を置く（過去日時の予約を用意するため）
async fn seed_booking(
    deps: &ServiceDependencies,
    item_id: ItemId,
    booker_id: UserId,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    status: BookingStatus,
) -> Booking {
    let booking = Booking {
        booking_id: BookingId::new(),
        item_id,
        booker_id,
        start,
        end,
        status,
    };
    deps.booking_store.save(booking.clone()).await.unwrap();
    booking
}

fn create_cmd(booker_id: UserId, item_id: ItemId) -> CreateBooking {
    let now = Utc::now();
    CreateBooking {
        booker_id,
        item_id,
        start: now + Duration::hours(1),
        end: now + Duration::days(1),
        status: None,
    }
}

// ============================================================================
// create_booking
// ============================================================================

#[tokio::test]
async fn test_create_booking_defaults_to_waiting() {
    let deps = make_deps();
    let owner = seed_user(&deps, "owner", "owner@example.com").await;
    let booker = seed_user(&deps, "booker", "booker@example.com").await;
    let item = seed_item(&deps, owner.user_id, true).await;

    let booking = create_booking(&deps, create_cmd(booker.user_id, item.item_id))
        .await
        .unwrap();

    assert_eq!(booking.status, BookingStatus::Waiting);
    assert_eq!(booking.booker_id, booker.user_id);
    assert_eq!(booking.item_id, item.item_id);

    // 保存されていることの確認
    let stored = deps
        .booking_store
        .get_by_id(booking.booking_id)
        .await
        .unwrap();
    assert_eq!(stored, Some(booking));
}

#[tokio::test]
async fn test_create_booking_keeps_explicit_status() {
    let deps = make_deps();
    let owner = seed_user(&deps, "owner", "owner@example.com").await;
    let booker = seed_user(&deps, "booker", "booker@example.com").await;
    let item = seed_item(&deps, owner.user_id, true).await;

    let mut cmd = create_cmd(booker.user_id, item.item_id);
    cmd.status = Some(BookingStatus::Canceled);

    let booking = create_booking(&deps, cmd).await.unwrap();

    assert_eq!(booking.status, BookingStatus::Canceled);
}

#[tokio::test]
async fn test_create_booking_fails_for_unknown_booker() {
    let deps = make_deps();
    let owner = seed_user(&deps, "owner", "owner@example.com").await;
    let item = seed_item(&deps, owner.user_id, true).await;

    let result = create_booking(&deps, create_cmd(UserId::new(), item.item_id)).await;

    assert!(matches!(result.unwrap_err(), ServiceError::UserNotFound));
}

#[tokio::test]
async fn test_create_booking_fails_for_unknown_item() {
    let deps = make_deps();
    let booker = seed_user(&deps, "booker", "booker@example.com").await;

    let result = create_booking(&deps, create_cmd(booker.user_id, ItemId::new())).await;

    assert!(matches!(result.unwrap_err(), ServiceError::ItemNotFound));
}

#[tokio::test]
async fn test_create_booking_fails_when_end_not_after_start() {
    let deps = make_deps();
    let owner = seed_user(&deps, "owner", "owner@example.com").await;
    let booker = seed_user(&deps, "booker", "booker@example.com").await;
    let item = seed_item(&deps, owner.user_id, true).await;
    let now = Utc::now();

    // end == start
    let mut cmd = create_cmd(booker.user_id, item.item_id);
    cmd.start = now + Duration::hours(1);
    cmd.end = now + Duration::hours(1);
    let result = create_booking(&deps, cmd).await;
    assert!(matches!(result.unwrap_err(), ServiceError::InvalidDateRange));

    // end < start
    let mut cmd = create_cmd(booker.user_id, item.item_id);
    cmd.start = now + Duration::hours(2);
    cmd.end = now + Duration::hours(1);
    let result = create_booking(&deps, cmd).await;
    assert!(matches!(result.unwrap_err(), ServiceError::InvalidDateRange));
}

#[tokio::test]
async fn test_create_booking_fails_for_own_item_as_not_found() {
    // 自分のアイテムの予約は ItemNotFound として報告される
    let deps = make_deps();
    let owner = seed_user(&deps, "owner", "owner@example.com").await;
    let item = seed_item(&deps, owner.user_id, true).await;

    let result = create_booking(&deps, create_cmd(owner.user_id, item.item_id)).await;

    assert!(matches!(result.unwrap_err(), ServiceError::ItemNotFound));
}

#[tokio::test]
async fn test_create_booking_fails_for_unavailable_item() {
    let deps = make_deps();
    let owner = seed_user(&deps, "owner", "owner@example.com").await;
    let booker = seed_user(&deps, "booker", "booker@example.com").await;
    let item = seed_item(&deps, owner.user_id, false).await;

    let result = create_booking(&deps, create_cmd(booker.user_id, item.item_id)).await;

    assert!(matches!(result.unwrap_err(), ServiceError::ItemUnavailable));
}

// ============================================================================
// decide_booking
// ============================================================================

#[tokio::test]
async fn test_decide_booking_approves_waiting_booking() {
    let deps = make_deps();
    let owner = seed_user(&deps, "owner", "owner@example.com").await;
    let booker = seed_user(&deps, "booker", "booker@example.com").await;
    let item = seed_item(&deps, owner.user_id, true).await;
    let booking = create_booking(&deps, create_cmd(booker.user_id, item.item_id))
        .await
        .unwrap();

    let decided = decide_booking(
        &deps,
        DecideBooking {
            acting_user_id: owner.user_id,
            booking_id: booking.booking_id,
            approved: true,
        },
    )
    .await
    .unwrap();

    assert_eq!(decided.status, BookingStatus::Approved);

    // 保存されたステータスの確認
    let stored = deps
        .booking_store
        .get_by_id(booking.booking_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.status, BookingStatus::Approved);
}

#[tokio::test]
async fn test_decide_booking_fails_on_second_decision() {
    let deps = make_deps();
    let owner = seed_user(&deps, "owner", "owner@example.com").await;
    let booker = seed_user(&deps, "booker", "booker@example.com").await;
    let item = seed_item(&deps, owner.user_id, true).await;
    let booking = create_booking(&deps, create_cmd(booker.user_id, item.item_id))
        .await
        .unwrap();

    decide_booking(
        &deps,
        DecideBooking {
            acting_user_id: owner.user_id,
            booking_id: booking.booking_id,
            approved: true,
        },
    )
    .await
    .unwrap();

    // 承認済み予約の再判定は値にかかわらず失敗する
    for approved in [true, false] {
        let result = decide_booking(
            &deps,
            DecideBooking {
                acting_user_id: owner.user_id,
                booking_id: booking.booking_id,
                approved,
            },
        )
        .await;

        assert!(matches!(
            result.unwrap_err(),
            ServiceError::UnsupportedState
        ));
    }
}

#[tokio::test]
async fn test_decide_booking_allows_redeciding_rejected_booking() {
    // ガードは APPROVED のみ。REJECTED の再判定は通る。
    let deps = make_deps();
    let owner = seed_user(&deps, "owner", "owner@example.com").await;
    let booker = seed_user(&deps, "booker", "booker@example.com").await;
    let item = seed_item(&deps, owner.user_id, true).await;
    let booking = create_booking(&deps, create_cmd(booker.user_id, item.item_id))
        .await
        .unwrap();

    let rejected = decide_booking(
        &deps,
        DecideBooking {
            acting_user_id: owner.user_id,
            booking_id: booking.booking_id,
            approved: false,
        },
    )
    .await
    .unwrap();
    assert_eq!(rejected.status, BookingStatus::Rejected);

    let approved = decide_booking(
        &deps,
        DecideBooking {
            acting_user_id: owner.user_id,
            booking_id: booking.booking_id,
            approved: true,
        },
    )
    .await
    .unwrap();
    assert_eq!(approved.status, BookingStatus::Approved);
}

#[tokio::test]
async fn test_decide_booking_by_non_owner_fails_as_not_found() {
    let deps = make_deps();
    let owner = seed_user(&deps, "owner", "owner@example.com").await;
    let booker = seed_user(&deps, "booker", "booker@example.com").await;
    let stranger = seed_user(&deps, "stranger", "stranger@example.com").await;
    let item = seed_item(&deps, owner.user_id, true).await;
    let booking = create_booking(&deps, create_cmd(booker.user_id, item.item_id))
        .await
        .unwrap();

    // 借り手でも第三者でも、所有者以外は BookingNotFound
    for user_id in [booker.user_id, stranger.user_id] {
        let result = decide_booking(
            &deps,
            DecideBooking {
                acting_user_id: user_id,
                booking_id: booking.booking_id,
                approved: true,
            },
        )
        .await;

        assert!(matches!(
            result.unwrap_err(),
            ServiceError::BookingNotFound
        ));
    }
}

#[tokio::test]
async fn test_decide_booking_fails_for_unknown_user_or_booking() {
    let deps = make_deps();
    let owner = seed_user(&deps, "owner", "owner@example.com").await;

    let result = decide_booking(
        &deps,
        DecideBooking {
            acting_user_id: UserId::new(),
            booking_id: BookingId::new(),
            approved: true,
        },
    )
    .await;
    assert!(matches!(result.unwrap_err(), ServiceError::UserNotFound));

    let result = decide_booking(
        &deps,
        DecideBooking {
            acting_user_id: owner.user_id,
            booking_id: BookingId::new(),
            approved: true,
        },
    )
    .await;
    assert!(matches!(
        result.unwrap_err(),
        ServiceError::BookingNotFound
    ));
}

// ============================================================================
// get_booking_for_participant
// ============================================================================

#[tokio::test]
async fn test_get_booking_succeeds_for_booker_and_owner() {
    let deps = make_deps();
    let owner = seed_user(&deps, "owner", "owner@example.com").await;
    let booker = seed_user(&deps, "booker", "booker@example.com").await;
    let item = seed_item(&deps, owner.user_id, true).await;
    let booking = create_booking(&deps, create_cmd(booker.user_id, item.item_id))
        .await
        .unwrap();

    for user_id in [booker.user_id, owner.user_id] {
        let found = get_booking_for_participant(&deps, user_id, booking.booking_id)
            .await
            .unwrap();
        assert_eq!(found.booking_id, booking.booking_id);
    }
}

#[tokio::test]
async fn test_get_booking_fails_for_third_party_as_not_found() {
    let deps = make_deps();
    let owner = seed_user(&deps, "owner", "owner@example.com").await;
    let booker = seed_user(&deps, "booker", "booker@example.com").await;
    let stranger = seed_user(&deps, "stranger", "stranger@example.com").await;
    let item = seed_item(&deps, owner.user_id, true).await;
    let booking = create_booking(&deps, create_cmd(booker.user_id, item.item_id))
        .await
        .unwrap();

    let result = get_booking_for_participant(&deps, stranger.user_id, booking.booking_id).await;

    assert!(matches!(
        result.unwrap_err(),
        ServiceError::BookingNotFound
    ));
}

#[tokio::test]
async fn test_get_booking_fails_when_item_became_unavailable() {
    // 参照時点のアイテム貸出可否を確認する
    let deps = make_deps();
    let owner = seed_user(&deps, "owner", "owner@example.com").await;
    let booker = seed_user(&deps, "booker", "booker@example.com").await;
    let item = seed_item(&deps, owner.user_id, true).await;
    let booking = create_booking(&deps, create_cmd(booker.user_id, item.item_id))
        .await
        .unwrap();

    // 予約後にアイテムを貸出不可へ変更
    let unavailable = Item {
        available: false,
        ..item
    };
    deps.item_store.save(unavailable).await.unwrap();

    let result = get_booking_for_participant(&deps, booker.user_id, booking.booking_id).await;

    assert!(matches!(
        result.unwrap_err(),
        ServiceError::ItemUnavailable
    ));
}

// ============================================================================
// list_bookings_for_booker / list_bookings_for_owner
// ============================================================================

/// PAST/CURRENT/FUTURE それぞれ1件ずつの予約を用意する
async fn seed_temporal_bookings(
    deps: &ServiceDependencies,
    item_id: ItemId,
    booker_id: UserId,
) -> (Booking, Booking, Booking) {
    let now = Utc::now();

    let past = seed_booking(
        deps,
        item_id,
        booker_id,
        now - Duration::days(2),
        now - Duration::days(1),
        BookingStatus::Approved,
    )
    .await;
    let current = seed_booking(
        deps,
        item_id,
        booker_id,
        now - Duration::hours(1),
        now + Duration::hours(1),
        BookingStatus::Approved,
    )
    .await;
    let future = seed_booking(
        deps,
        item_id,
        booker_id,
        now + Duration::days(1),
        now + Duration::days(2),
        BookingStatus::Waiting,
    )
    .await;

    (past, current, future)
}

#[tokio::test]
async fn test_list_for_booker_temporal_filters() {
    let deps = make_deps();
    let owner = seed_user(&deps, "owner", "owner@example.com").await;
    let booker = seed_user(&deps, "booker", "booker@example.com").await;
    let item = seed_item(&deps, owner.user_id, true).await;
    let (past, current, future) = seed_temporal_bookings(&deps, item.item_id, booker.user_id).await;

    let found = list_bookings_for_booker(&deps, booker.user_id, "PAST", 0, 10)
        .await
        .unwrap();
    assert_eq!(
        found.iter().map(|b| b.booking_id).collect::<Vec<_>>(),
        vec![past.booking_id]
    );

    let found = list_bookings_for_booker(&deps, booker.user_id, "CURRENT", 0, 10)
        .await
        .unwrap();
    assert_eq!(
        found.iter().map(|b| b.booking_id).collect::<Vec<_>>(),
        vec![current.booking_id]
    );

    let found = list_bookings_for_booker(&deps, booker.user_id, "FUTURE", 0, 10)
        .await
        .unwrap();
    assert_eq!(
        found.iter().map(|b| b.booking_id).collect::<Vec<_>>(),
        vec![future.booking_id]
    );
}

#[tokio::test]
async fn test_list_for_booker_all_is_ordered_by_start_desc() {
    let deps = make_deps();
    let owner = seed_user(&deps, "owner", "owner@example.com").await;
    let booker = seed_user(&deps, "booker", "booker@example.com").await;
    let item = seed_item(&deps, owner.user_id, true).await;
    let (past, current, future) = seed_temporal_bookings(&deps, item.item_id, booker.user_id).await;

    let found = list_bookings_for_booker(&deps, booker.user_id, "all", 0, 10)
        .await
        .unwrap();

    // 開始日時の降順：future, current, past
    assert_eq!(
        found.iter().map(|b| b.booking_id).collect::<Vec<_>>(),
        vec![future.booking_id, current.booking_id, past.booking_id]
    );
}

#[tokio::test]
async fn test_list_for_booker_status_filters() {
    let deps = make_deps();
    let owner = seed_user(&deps, "owner", "owner@example.com").await;
    let booker = seed_user(&deps, "booker", "booker@example.com").await;
    let item = seed_item(&deps, owner.user_id, true).await;
    let now = Utc::now();

    let waiting = seed_booking(
        &deps,
        item.item_id,
        booker.user_id,
        now + Duration::hours(1),
        now + Duration::hours(2),
        BookingStatus::Waiting,
    )
    .await;
    let rejected = seed_booking(
        &deps,
        item.item_id,
        booker.user_id,
        now + Duration::hours(3),
        now + Duration::hours(4),
        BookingStatus::Rejected,
    )
    .await;

    let found = list_bookings_for_booker(&deps, booker.user_id, "waiting", 0, 10)
        .await
        .unwrap();
    assert_eq!(
        found.iter().map(|b| b.booking_id).collect::<Vec<_>>(),
        vec![waiting.booking_id]
    );

    let found = list_bookings_for_booker(&deps, booker.user_id, "REJECTED", 0, 10)
        .await
        .unwrap();
    assert_eq!(
        found.iter().map(|b| b.booking_id).collect::<Vec<_>>(),
        vec![rejected.booking_id]
    );
}

#[tokio::test]
async fn test_list_for_booker_scopes_to_booker() {
    let deps = make_deps();
    let owner = seed_user(&deps, "owner", "owner@example.com").await;
    let booker = seed_user(&deps, "booker", "booker@example.com").await;
    let other = seed_user(&deps, "other", "other@example.com").await;
    let item = seed_item(&deps, owner.user_id, true).await;
    let now = Utc::now();

    let own = seed_booking(
        &deps,
        item.item_id,
        booker.user_id,
        now + Duration::hours(1),
        now + Duration::hours(2),
        BookingStatus::Waiting,
    )
    .await;
    seed_booking(
        &deps,
        item.item_id,
        other.user_id,
        now + Duration::hours(3),
        now + Duration::hours(4),
        BookingStatus::Waiting,
    )
    .await;

    let found = list_bookings_for_booker(&deps, booker.user_id, "ALL", 0, 10)
        .await
        .unwrap();

    assert_eq!(
        found.iter().map(|b| b.booking_id).collect::<Vec<_>>(),
        vec![own.booking_id]
    );
}

#[tokio::test]
async fn test_list_with_unknown_state_fails_regardless_of_pagination() {
    let deps = make_deps();
    let booker = seed_user(&deps, "booker", "booker@example.com").await;

    // ページ指定が不正でもフィルタトークンの検証が先
    for (from, size) in [(0, 10), (-5, -5)] {
        let result =
            list_bookings_for_booker(&deps, booker.user_id, "SOMETIMES", from, size).await;

        match result.unwrap_err() {
            ServiceError::InvalidArgument(msg) => {
                assert_eq!(msg, "Unknown state: SOMETIMES");
            }
            other => panic!("expected InvalidArgument, got {:?}", other),
        }
    }
}

#[tokio::test]
async fn test_list_with_invalid_pagination_fails() {
    let deps = make_deps();
    let booker = seed_user(&deps, "booker", "booker@example.com").await;

    for (from, size) in [(-1, 10), (0, 0), (3, -2)] {
        let result = list_bookings_for_booker(&deps, booker.user_id, "ALL", from, size).await;

        assert!(matches!(
            result.unwrap_err(),
            ServiceError::InvalidArgument(_)
        ));
    }
}

#[tokio::test]
async fn test_list_for_unknown_user_fails() {
    let deps = make_deps();

    let result = list_bookings_for_booker(&deps, UserId::new(), "ALL", 0, 10).await;
    assert!(matches!(result.unwrap_err(), ServiceError::UserNotFound));

    let result = list_bookings_for_owner(&deps, UserId::new(), "ALL", 0, 10).await;
    assert!(matches!(result.unwrap_err(), ServiceError::UserNotFound));
}

#[tokio::test]
async fn test_list_returns_empty_when_nothing_matches() {
    let deps = make_deps();
    let booker = seed_user(&deps, "booker", "booker@example.com").await;

    let found = list_bookings_for_booker(&deps, booker.user_id, "ALL", 0, 10)
        .await
        .unwrap();

    assert!(found.is_empty());
}

#[tokio::test]
async fn test_list_pagination_limits_and_offsets() {
    let deps = make_deps();
    let owner = seed_user(&deps, "owner", "owner@example.com").await;
    let booker = seed_user(&deps, "booker", "booker@example.com").await;
    let item = seed_item(&deps, owner.user_id, true).await;
    let now = Utc::now();

    // 開始日時をずらして4件（降順：b3, b2, b1, b0）
    let mut ids = Vec::new();
    for hours in 1..=4 {
        let booking = seed_booking(
            &deps,
            item.item_id,
            booker.user_id,
            now + Duration::hours(hours),
            now + Duration::hours(hours + 1),
            BookingStatus::Waiting,
        )
        .await;
        ids.push(booking.booking_id);
    }

    let page1 = list_bookings_for_booker(&deps, booker.user_id, "ALL", 0, 2)
        .await
        .unwrap();
    assert_eq!(
        page1.iter().map(|b| b.booking_id).collect::<Vec<_>>(),
        vec![ids[3], ids[2]]
    );

    let page2 = list_bookings_for_booker(&deps, booker.user_id, "ALL", 2, 2)
        .await
        .unwrap();
    assert_eq!(
        page2.iter().map(|b| b.booking_id).collect::<Vec<_>>(),
        vec![ids[1], ids[0]]
    );
}

#[tokio::test]
async fn test_list_for_owner_spans_all_owned_items() {
    let deps = make_deps();
    let owner = seed_user(&deps, "owner", "owner@example.com").await;
    let other_owner = seed_user(&deps, "other", "other@example.com").await;
    let booker = seed_user(&deps, "booker", "booker@example.com").await;
    let item_a = seed_item(&deps, owner.user_id, true).await;
    let item_b = seed_item(&deps, owner.user_id, true).await;
    let foreign_item = seed_item(&deps, other_owner.user_id, true).await;
    let now = Utc::now();

    let on_a = seed_booking(
        &deps,
        item_a.item_id,
        booker.user_id,
        now + Duration::hours(2),
        now + Duration::hours(3),
        BookingStatus::Waiting,
    )
    .await;
    let on_b = seed_booking(
        &deps,
        item_b.item_id,
        booker.user_id,
        now + Duration::hours(1),
        now + Duration::hours(2),
        BookingStatus::Waiting,
    )
    .await;
    seed_booking(
        &deps,
        foreign_item.item_id,
        booker.user_id,
        now + Duration::hours(1),
        now + Duration::hours(2),
        BookingStatus::Waiting,
    )
    .await;

    let found = list_bookings_for_owner(&deps, owner.user_id, "ALL", 0, 10)
        .await
        .unwrap();

    assert_eq!(
        found.iter().map(|b| b.booking_id).collect::<Vec<_>>(),
        vec![on_a.booking_id, on_b.booking_id]
    );
}

// ============================================================================
// ライフサイクル全体のシナリオ
// ============================================================================

#[tokio::test]
async fn test_full_booking_lifecycle() {
    let deps = make_deps();
    let booker = seed_user(&deps, "renter", "renter@example.com").await;
    let owner = seed_user(&deps, "owner", "owner@example.com").await;
    let item = seed_item(&deps, owner.user_id, true).await;
    let now = Utc::now();

    // 作成：start=now+1h, end=now+1d, WAITING
    let booking = create_booking(
        &deps,
        CreateBooking {
            booker_id: booker.user_id,
            item_id: item.item_id,
            start: now + Duration::hours(1),
            end: now + Duration::days(1),
            status: None,
        },
    )
    .await
    .unwrap();
    assert_eq!(booking.status, BookingStatus::Waiting);

    // 所有者の ALL と WAITING の両方に現れる
    let all = list_bookings_for_owner(&deps, owner.user_id, "ALL", 0, 10)
        .await
        .unwrap();
    assert_eq!(
        all.iter().map(|b| b.booking_id).collect::<Vec<_>>(),
        vec![booking.booking_id]
    );

    let waiting = list_bookings_for_owner(&deps, owner.user_id, "WAITING", 0, 10)
        .await
        .unwrap();
    assert_eq!(
        waiting.iter().map(|b| b.booking_id).collect::<Vec<_>>(),
        vec![booking.booking_id]
    );

    // 所有者が承認
    let approved = decide_booking(
        &deps,
        DecideBooking {
            acting_user_id: owner.user_id,
            booking_id: booking.booking_id,
            approved: true,
        },
    )
    .await
    .unwrap();
    assert_eq!(approved.status, BookingStatus::Approved);

    // 以後の判定は失敗する
    let result = decide_booking(
        &deps,
        DecideBooking {
            acting_user_id: owner.user_id,
            booking_id: booking.booking_id,
            approved: false,
        },
    )
    .await;
    assert!(matches!(
        result.unwrap_err(),
        ServiceError::UnsupportedState
    ));
}
