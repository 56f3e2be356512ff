use crate::domain::{
    self,
    booking::{Booking, StateFilter},
    commands::{CreateBooking, DecideBooking},
    value_objects::{BookingId, Page, UserId},
};
use crate::ports::*;
use std::str::FromStr;

use super::super::ServiceDependencies;
use super::super::errors::{Result, ServiceError};

/// 予約を作成する
///
/// ビジネスルール（検証順）：
/// 1. 借り手が存在すること
/// 2. アイテムが存在すること
/// 3. 終了日時が開始日時より後であること
/// 4. 借り手がアイテムの所有者でないこと
///    （自分のアイテムの予約は ItemNotFound として報告する）
/// 5. アイテムが貸出可能であること
///
/// すべての検証を通過した場合のみ保存する。部分的な書き込みはない。
///
/// # 引数
/// * `deps` - サービスの依存関係
/// * `cmd` - 予約作成コマンド
///
/// # 戻り値
/// 保存された予約。ステータス未指定なら WAITING になる。
pub async fn create_booking(deps: &ServiceDependencies, cmd: CreateBooking) -> Result<Booking> {
    // 1. 借り手の存在確認
    let booker_exists = deps
        .user_store
        .exists(cmd.booker_id)
        .await
        .map_err(ServiceError::StoreError)?;

    if !booker_exists {
        return Err(ServiceError::UserNotFound);
    }

    // 2. アイテムの存在確認
    let item = deps
        .item_store
        .get_by_id(cmd.item_id)
        .await
        .map_err(ServiceError::StoreError)?
        .ok_or(ServiceError::ItemNotFound)?;

    // 3. 日付範囲の検証（ドメイン層の純粋関数）
    let booking = domain::booking::plan_booking(
        cmd.item_id,
        cmd.booker_id,
        cmd.start,
        cmd.end,
        cmd.status,
    )
    .map_err(|_: domain::PlanBookingError| ServiceError::InvalidDateRange)?;

    // 4. 自分のアイテムは予約できない
    if item.owner_id == cmd.booker_id {
        tracing::debug!("self-booking attempt rejected for item {:?}", cmd.item_id);
        return Err(ServiceError::ItemNotFound);
    }

    // 5. 貸出可否の確認
    if !item.available {
        tracing::debug!("item {:?} is not available for booking", cmd.item_id);
        return Err(ServiceError::ItemUnavailable);
    }

    deps.booking_store
        .save(booking.clone())
        .await
        .map_err(ServiceError::StoreError)?;

    tracing::info!(
        "booking {:?} is waiting for a decision by the owner of item {:?}",
        booking.booking_id,
        booking.item_id
    );

    Ok(booking)
}

/// 予約を承認または却下する
///
/// ビジネスルール（検証順）：
/// 1. 操作ユーザーが存在すること
/// 2. 予約が存在すること
/// 3. 予約が承認済みでないこと（再判定は UnsupportedState）
/// 4. 操作ユーザーがアイテムの所有者であること
///    （所有者以外の判定は BookingNotFound として報告する）
///
/// 状態機械：WAITING -> {APPROVED, REJECTED}。APPROVED は終端。
pub async fn decide_booking(deps: &ServiceDependencies, cmd: DecideBooking) -> Result<Booking> {
    // 1. 操作ユーザーの存在確認
    let user_exists = deps
        .user_store
        .exists(cmd.acting_user_id)
        .await
        .map_err(ServiceError::StoreError)?;

    if !user_exists {
        return Err(ServiceError::UserNotFound);
    }

    // 2. 予約の取得
    let booking = deps
        .booking_store
        .get_by_id(cmd.booking_id)
        .await
        .map_err(ServiceError::StoreError)?
        .ok_or(ServiceError::BookingNotFound)?;

    // 3. 状態遷移（ドメイン層の純粋関数、承認済みガードを含む）
    let decided = domain::booking::decide_booking(&booking, cmd.approved)
        .map_err(|_: domain::DecideBookingError| ServiceError::UnsupportedState)?;

    // 4. 所有者のみが判定できる
    let item = deps
        .item_store
        .get_by_id(booking.item_id)
        .await
        .map_err(ServiceError::StoreError)?
        .ok_or(ServiceError::ItemNotFound)?;

    if item.owner_id != cmd.acting_user_id {
        tracing::debug!(
            "user {:?} is not the owner of item {:?}",
            cmd.acting_user_id,
            item.item_id
        );
        return Err(ServiceError::BookingNotFound);
    }

    deps.booking_store
        .save(decided.clone())
        .await
        .map_err(ServiceError::StoreError)?;

    Ok(decided)
}

/// 予約を当事者として取得する
///
/// ビジネスルール（検証順）：
/// 1. 操作ユーザーが存在すること
/// 2. 予約が存在すること
/// 3. 操作ユーザーがアイテムの所有者または借り手であること
///    （第三者の参照は BookingNotFound として報告する）
/// 4. アイテムが現時点で貸出可能であること
pub async fn get_booking_for_participant(
    deps: &ServiceDependencies,
    acting_user_id: UserId,
    booking_id: BookingId,
) -> Result<Booking> {
    // 1. 操作ユーザーの存在確認
    let user_exists = deps
        .user_store
        .exists(acting_user_id)
        .await
        .map_err(ServiceError::StoreError)?;

    if !user_exists {
        return Err(ServiceError::UserNotFound);
    }

    // 2. 予約の取得
    let booking = deps
        .booking_store
        .get_by_id(booking_id)
        .await
        .map_err(ServiceError::StoreError)?
        .ok_or(ServiceError::BookingNotFound)?;

    let item = deps
        .item_store
        .get_by_id(booking.item_id)
        .await
        .map_err(ServiceError::StoreError)?
        .ok_or(ServiceError::ItemNotFound)?;

    // 3. 当事者（所有者または借り手）のみが参照できる
    if item.owner_id != acting_user_id && booking.booker_id != acting_user_id {
        return Err(ServiceError::BookingNotFound);
    }

    // 4. アイテムの現在の貸出可否
    if !item.available {
        return Err(ServiceError::ItemUnavailable);
    }

    Ok(booking)
}

/// 借り手の予約一覧を取得する
///
/// state はフィルタトークン（ALL/PAST/FUTURE/CURRENT/WAITING/REJECTED、
/// 大文字小文字区別なし）。時間判定は呼び出し時点の now に対して行う。
/// 不明なトークンはページ指定に関わらず InvalidArgument で失敗する。
pub async fn list_bookings_for_booker(
    deps: &ServiceDependencies,
    booker_id: UserId,
    state: &str,
    from: i32,
    size: i32,
) -> Result<Vec<Booking>> {
    let (filter, page) = parse_listing_params(state, from, size)?;

    let booker_exists = deps
        .user_store
        .exists(booker_id)
        .await
        .map_err(ServiceError::StoreError)?;

    if !booker_exists {
        return Err(ServiceError::UserNotFound);
    }

    let now = chrono::Utc::now();
    deps.booking_store
        .find_for_booker(booker_id, filter, now, page)
        .await
        .map_err(ServiceError::StoreError)
}

/// 所有者のアイテムに対する予約一覧を取得する
///
/// フィルタの意味は `list_bookings_for_booker` と同じ。
pub async fn list_bookings_for_owner(
    deps: &ServiceDependencies,
    owner_id: UserId,
    state: &str,
    from: i32,
    size: i32,
) -> Result<Vec<Booking>> {
    let (filter, page) = parse_listing_params(state, from, size)?;

    let owner_exists = deps
        .user_store
        .exists(owner_id)
        .await
        .map_err(ServiceError::StoreError)?;

    if !owner_exists {
        return Err(ServiceError::UserNotFound);
    }

    let now = chrono::Utc::now();
    deps.booking_store
        .find_for_owner(owner_id, filter, now, page)
        .await
        .map_err(ServiceError::StoreError)
}

/// 一覧取得の共通パラメータ検証
///
/// フィルタトークンをページ指定より先に検証する。
fn parse_listing_params(state: &str, from: i32, size: i32) -> Result<(StateFilter, Page)> {
    let filter = StateFilter::from_str(state).map_err(ServiceError::InvalidArgument)?;

    let page = Page::from_query(from, size)
        .map_err(|_| ServiceError::InvalidArgument("Invalid pagination parameters".to_string()))?;

    Ok((filter, page))
}
