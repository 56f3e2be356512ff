#![allow(dead_code)]

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{BookingId, DecideBookingError, ItemId, PlanBookingError, UserId};

/// 予約ステータス
///
/// ライフサイクル：WAITING で作成され、アイテムの所有者によって
/// APPROVED か REJECTED に一度だけ遷移する。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BookingStatus {
    /// 所有者の判定待ち
    Waiting,
    /// 承認済み（終端状態）
    Approved,
    /// 却下
    Rejected,
    /// 取り消し
    Canceled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Waiting => "WAITING",
            BookingStatus::Approved => "APPROVED",
            BookingStatus::Rejected => "REJECTED",
            BookingStatus::Canceled => "CANCELED",
        }
    }
}

impl std::str::FromStr for BookingStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "WAITING" => Ok(BookingStatus::Waiting),
            "APPROVED" => Ok(BookingStatus::Approved),
            "REJECTED" => Ok(BookingStatus::Rejected),
            "CANCELED" => Ok(BookingStatus::Canceled),
            _ => Err(format!("Invalid booking status: {}", s)),
        }
    }
}

/// 一覧取得の状態フィルタ
///
/// 時間軸（PAST/FUTURE/CURRENT）とステータス（WAITING/REJECTED）の
/// どちらかで予約を絞り込む。トークンは大文字小文字を区別しない。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateFilter {
    All,
    Past,
    Future,
    Current,
    Waiting,
    Rejected,
}

impl StateFilter {
    /// 呼び出し時点の now に対して予約がフィルタに合致するか
    pub fn matches(&self, booking: &Booking, now: DateTime<Utc>) -> bool {
        match self {
            StateFilter::All => true,
            StateFilter::Past => booking.end < now,
            StateFilter::Future => booking.start > now,
            StateFilter::Current => booking.start <= now && now <= booking.end,
            StateFilter::Waiting => booking.status == BookingStatus::Waiting,
            StateFilter::Rejected => booking.status == BookingStatus::Rejected,
        }
    }

    /// 結果を開始日時の降順に並べるフィルタか
    ///
    /// WAITING / REJECTED は並び順を契約しない（ストア定義順）。
    pub fn sorts_by_start_desc(&self) -> bool {
        !matches!(self, StateFilter::Waiting | StateFilter::Rejected)
    }
}

impl std::str::FromStr for StateFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "ALL" => Ok(StateFilter::All),
            "PAST" => Ok(StateFilter::Past),
            "FUTURE" => Ok(StateFilter::Future),
            "CURRENT" => Ok(StateFilter::Current),
            "WAITING" => Ok(StateFilter::Waiting),
            "REJECTED" => Ok(StateFilter::Rejected),
            _ => Err(format!("Unknown state: {}", s)),
        }
    }
}

/// Booking集約 - 1つのアイテムに対する1件の時間帯予約
///
/// 他の集約へはIDのみで参照する。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub booking_id: BookingId,
    pub item_id: ItemId,
    pub booker_id: UserId,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub status: BookingStatus,
}

/// 純粋関数：予約を組み立てる
///
/// ビジネスルール：
/// - 終了日時は開始日時より厳密に後
/// - ステータス未指定なら WAITING
///
/// 副作用なし。新しいBookingを返す。所有者・貸出可否の確認は
/// ストア参照が必要なためアプリケーション層が行う。
pub fn plan_booking(
    item_id: ItemId,
    booker_id: UserId,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    status: Option<BookingStatus>,
) -> Result<Booking, PlanBookingError> {
    if end <= start {
        return Err(PlanBookingError::EndNotAfterStart);
    }

    Ok(Booking {
        booking_id: BookingId::new(),
        item_id,
        booker_id,
        start,
        end,
        status: status.unwrap_or(BookingStatus::Waiting),
    })
}

/// 純粋関数：予約を承認または却下する
///
/// ビジネスルール：
/// - 既に APPROVED の予約は再判定できない
///   （REJECTED の再判定はガードしない。挙動はストア定義のまま）
///
/// 副作用なし。新しいBookingを返す。
pub fn decide_booking(booking: &Booking, approved: bool) -> Result<Booking, DecideBookingError> {
    if booking.status == BookingStatus::Approved {
        return Err(DecideBookingError::AlreadyApproved);
    }

    let status = if approved {
        BookingStatus::Approved
    } else {
        BookingStatus::Rejected
    };

    Ok(Booking {
        status,
        ..booking.clone()
    })
}
