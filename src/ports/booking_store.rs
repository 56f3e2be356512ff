use crate::domain::booking::{Booking, StateFilter};
use crate::domain::value_objects::{BookingId, ItemId, Page, UserId};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[allow(dead_code)]
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 予約ストアポート
///
/// フィルタの時間判定はすべて呼び出し側が渡した now を基準にする。
/// ALL/PAST/FUTURE/CURRENT は開始日時の降順で返す。
/// WAITING/REJECTED の並び順は契約しない（ストア定義順）。
#[allow(dead_code)]
#[async_trait]
pub trait BookingStore: Send + Sync {
    /// 予約を保存する（upsert）
    async fn save(&self, booking: Booking) -> Result<()>;

    /// IDで予約を取得する
    async fn get_by_id(&self, booking_id: BookingId) -> Result<Option<Booking>>;

    /// 借り手の予約をフィルタして取得する（ページ指定）
    async fn find_for_booker(
        &self,
        booker_id: UserId,
        filter: StateFilter,
        now: DateTime<Utc>,
        page: Page,
    ) -> Result<Vec<Booking>>;

    /// 所有者のアイテムに対する予約をフィルタして取得する（ページ指定）
    async fn find_for_owner(
        &self,
        owner_id: UserId,
        filter: StateFilter,
        now: DateTime<Utc>,
        page: Page,
    ) -> Result<Vec<Booking>>;

    /// アイテムの全予約を取得する
    ///
    /// コメント資格（借りたことがあるか）の確認に使用される。
    async fn find_for_item(&self, item_id: ItemId) -> Result<Vec<Booking>>;

    /// アイテムの直近の予約を取得する
    ///
    /// 開始日時が now より前で最も遅いもの。REJECTED は除く。
    async fn find_last_for_item(
        &self,
        item_id: ItemId,
        now: DateTime<Utc>,
    ) -> Result<Option<Booking>>;

    /// アイテムの次の予約を取得する
    ///
    /// 開始日時が now より後で最も早いもの。REJECTED は除く。
    async fn find_next_for_item(
        &self,
        item_id: ItemId,
        now: DateTime<Utc>,
    ) -> Result<Option<Booking>>;
}
