use crate::domain::booking::{Booking, BookingStatus, StateFilter};
use crate::domain::value_objects::{BookingId, ItemId, Page, UserId};
use crate::ports::booking_store::{BookingStore as BookingStoreTrait, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row, postgres::PgRow};
use std::str::FromStr;

const SELECT_COLUMNS: &str = "b.id, b.item_id, b.booker_id, b.start_date, b.end_date, b.status";

/// PostgreSQLの行データをBookingに変換する
///
/// status はTEXTカラムから復元する。不正な値はエラーとして扱う。
fn map_row_to_booking(row: &PgRow) -> Result<Booking> {
    let status_str: &str = row.get("status");
    let status = BookingStatus::from_str(status_str).map_err(|e| {
        Box::new(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
            as Box<dyn std::error::Error + Send + Sync>
    })?;

    Ok(Booking {
        booking_id: BookingId::from_uuid(row.get("id")),
        item_id: ItemId::from_uuid(row.get("item_id")),
        booker_id: UserId::from_uuid(row.get("booker_id")),
        start: row.get("start_date"),
        end: row.get("end_date"),
        status,
    })
}

/// フィルタごとのWHERE句の追加条件とORDER BY句
///
/// 追加条件は $2 を参照する（時間フィルタなら now、ステータスフィルタなら
/// ステータス値）。ALL は追加条件を持たない。
/// WAITING/REJECTED は並び順を契約しないためORDER BYを付けない。
fn filter_clauses(filter: StateFilter) -> (Option<&'static str>, &'static str) {
    match filter {
        StateFilter::All => (None, "ORDER BY b.start_date DESC"),
        StateFilter::Past => (Some("AND b.end_date < $2"), "ORDER BY b.start_date DESC"),
        StateFilter::Future => (Some("AND b.start_date > $2"), "ORDER BY b.start_date DESC"),
        StateFilter::Current => (
            Some("AND b.start_date <= $2 AND b.end_date >= $2"),
            "ORDER BY b.start_date DESC",
        ),
        StateFilter::Waiting | StateFilter::Rejected => (Some("AND b.status = $2"), ""),
    }
}

/// BookingStoreのPostgreSQL実装
#[allow(dead_code)]
pub struct BookingStore {
    pool: PgPool,
}

#[allow(dead_code)]
impl BookingStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// 借り手/所有者共通のフィルタ付き一覧クエリ
    ///
    /// scope_condition は $1 を借り手IDまたは所有者IDとして使う。
    async fn find_filtered(
        &self,
        scope_condition: &str,
        scope_id: UserId,
        filter: StateFilter,
        now: DateTime<Utc>,
        page: Page,
    ) -> Result<Vec<Booking>> {
        let (filter_condition, order_by) = filter_clauses(filter);

        // ALL はフィルタ用の $2 を持たないため LIMIT/OFFSET の番号がずれる
        let sql = match filter_condition {
            Some(condition) => format!(
                r#"
                SELECT {SELECT_COLUMNS}
                FROM bookings b
                JOIN items i ON i.id = b.item_id
                WHERE {scope_condition} {condition}
                {order_by}
                LIMIT $3 OFFSET $4
                "#
            ),
            None => format!(
                r#"
                SELECT {SELECT_COLUMNS}
                FROM bookings b
                JOIN items i ON i.id = b.item_id
                WHERE {scope_condition}
                {order_by}
                LIMIT $2 OFFSET $3
                "#
            ),
        };

        let query = sqlx::query(&sql).bind(scope_id.value());

        let query = match filter {
            StateFilter::All => query,
            StateFilter::Past | StateFilter::Future | StateFilter::Current => query.bind(now),
            StateFilter::Waiting => query.bind(BookingStatus::Waiting.as_str()),
            StateFilter::Rejected => query.bind(BookingStatus::Rejected.as_str()),
        };

        let rows = query
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(map_row_to_booking).collect()
    }
}

#[async_trait]
impl BookingStoreTrait for BookingStore {
    /// 予約を保存する（upsert）
    async fn save(&self, booking: Booking) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO bookings (id, item_id, booker_id, start_date, end_date, status)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (id)
            DO UPDATE SET
                item_id = EXCLUDED.item_id,
                booker_id = EXCLUDED.booker_id,
                start_date = EXCLUDED.start_date,
                end_date = EXCLUDED.end_date,
                status = EXCLUDED.status
            "#,
        )
        .bind(booking.booking_id.value())
        .bind(booking.item_id.value())
        .bind(booking.booker_id.value())
        .bind(booking.start)
        .bind(booking.end)
        .bind(booking.status.as_str())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn get_by_id(&self, booking_id: BookingId) -> Result<Option<Booking>> {
        let row = sqlx::query(
            r#"
            SELECT b.id, b.item_id, b.booker_id, b.start_date, b.end_date, b.status
            FROM bookings b
            WHERE b.id = $1
            "#,
        )
        .bind(booking_id.value())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(map_row_to_booking).transpose()
    }

    async fn find_for_booker(
        &self,
        booker_id: UserId,
        filter: StateFilter,
        now: DateTime<Utc>,
        page: Page,
    ) -> Result<Vec<Booking>> {
        self.find_filtered("b.booker_id = $1", booker_id, filter, now, page)
            .await
    }

    async fn find_for_owner(
        &self,
        owner_id: UserId,
        filter: StateFilter,
        now: DateTime<Utc>,
        page: Page,
    ) -> Result<Vec<Booking>> {
        self.find_filtered("i.owner_id = $1", owner_id, filter, now, page)
            .await
    }

    async fn find_for_item(&self, item_id: ItemId) -> Result<Vec<Booking>> {
        let rows = sqlx::query(
            r#"
            SELECT b.id, b.item_id, b.booker_id, b.start_date, b.end_date, b.status
            FROM bookings b
            WHERE b.item_id = $1
            "#,
        )
        .bind(item_id.value())
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_row_to_booking).collect()
    }

    /// 直近の予約（start < now、REJECTED以外、開始日時の降順で先頭）
    async fn find_last_for_item(
        &self,
        item_id: ItemId,
        now: DateTime<Utc>,
    ) -> Result<Option<Booking>> {
        let row = sqlx::query(
            r#"
            SELECT b.id, b.item_id, b.booker_id, b.start_date, b.end_date, b.status
            FROM bookings b
            WHERE b.item_id = $1
              AND b.start_date < $2
              AND b.status <> 'REJECTED'
            ORDER BY b.start_date DESC
            LIMIT 1
            "#,
        )
        .bind(item_id.value())
        .bind(now)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(map_row_to_booking).transpose()
    }

    /// 次の予約（start > now、REJECTED以外、開始日時の昇順で先頭）
    async fn find_next_for_item(
        &self,
        item_id: ItemId,
        now: DateTime<Utc>,
    ) -> Result<Option<Booking>> {
        let row = sqlx::query(
            r#"
            SELECT b.id, b.item_id, b.booker_id, b.start_date, b.end_date, b.status
            FROM bookings b
            WHERE b.item_id = $1
              AND b.start_date > $2
              AND b.status <> 'REJECTED'
            ORDER BY b.start_date ASC
            LIMIT 1
            "#,
        )
        .bind(item_id.value())
        .bind(now)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(map_row_to_booking).transpose()
    }
}
