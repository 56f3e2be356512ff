use crate::application::booking::{
    create_booking as execute_create_booking, decide_booking as execute_decide_booking,
    get_booking_for_participant, list_bookings_for_booker as execute_list_for_booker,
    list_bookings_for_owner as execute_list_for_owner,
};
use crate::application::{ServiceDependencies, ServiceError};
use crate::domain::booking::Booking;
use crate::domain::commands::{CreateBooking, DecideBooking};
use crate::domain::value_objects::{BookingId, ItemId};
use crate::ports::ItemStore;
use axum::{
    Json,
    extract::{Path, Query, State},
};
use std::sync::Arc;
use uuid::Uuid;

use super::AppState;
use super::super::{
    error::ApiError,
    extract::SharerUserId,
    types::{ApprovedQuery, BookingCreateRequest, BookingListQuery, BookingResponse},
};

/// 一覧クエリの既定値：state=ALL, from=0, size=10
const DEFAULT_STATE: &str = "ALL";
const DEFAULT_FROM: i32 = 0;
const DEFAULT_SIZE: i32 = 10;

/// POST /bookings - 予約を作成
///
/// 操作ユーザー（ヘッダー）が借り手になる。
///
/// 強制されるビジネスルール:
/// - 借り手とアイテムが存在すること
/// - 終了日時が開始日時より後であること
/// - 自分のアイテムは予約できないこと
/// - アイテムが貸出可能であること
pub async fn save_booking(
    State(state): State<Arc<AppState>>,
    SharerUserId(user_id): SharerUserId,
    Json(req): Json<BookingCreateRequest>,
) -> Result<Json<BookingResponse>, ApiError> {
    tracing::info!("POST /bookings by user {:?}", user_id);

    let cmd = CreateBooking {
        booker_id: user_id,
        item_id: ItemId::from_uuid(req.item_id),
        start: req.start,
        end: req.end,
        status: req.status,
    };

    let booking = execute_create_booking(&state.service_deps, cmd).await?;
    let response = to_booking_response(&state.service_deps, &booking).await?;

    Ok(Json(response))
}

/// PATCH /bookings/:id?approved= - 予約を承認/却下
///
/// アイテムの所有者のみが実行できる。
pub async fn decide_booking(
    State(state): State<Arc<AppState>>,
    SharerUserId(user_id): SharerUserId,
    Path(booking_id): Path<Uuid>,
    Query(query): Query<ApprovedQuery>,
) -> Result<Json<BookingResponse>, ApiError> {
    let cmd = DecideBooking {
        acting_user_id: user_id,
        booking_id: BookingId::from_uuid(booking_id),
        approved: query.approved,
    };

    let booking = execute_decide_booking(&state.service_deps, cmd).await?;
    let response = to_booking_response(&state.service_deps, &booking).await?;

    Ok(Json(response))
}

/// GET /bookings/:id - 予約を当事者として取得
///
/// アイテムの所有者または借り手のみが参照できる。
pub async fn get_booking(
    State(state): State<Arc<AppState>>,
    SharerUserId(user_id): SharerUserId,
    Path(booking_id): Path<Uuid>,
) -> Result<Json<BookingResponse>, ApiError> {
    let booking = get_booking_for_participant(
        &state.service_deps,
        user_id,
        BookingId::from_uuid(booking_id),
    )
    .await?;
    let response = to_booking_response(&state.service_deps, &booking).await?;

    Ok(Json(response))
}

/// GET /bookings - 借り手としての予約一覧
///
/// クエリパラメータ:
/// - state: 状態フィルタ（既定は ALL）
/// - from / size: ページ指定（既定は 0 / 10）
pub async fn list_bookings_for_booker(
    State(state): State<Arc<AppState>>,
    SharerUserId(user_id): SharerUserId,
    Query(query): Query<BookingListQuery>,
) -> Result<Json<Vec<BookingResponse>>, ApiError> {
    let bookings = execute_list_for_booker(
        &state.service_deps,
        user_id,
        query.state.as_deref().unwrap_or(DEFAULT_STATE),
        query.from.unwrap_or(DEFAULT_FROM),
        query.size.unwrap_or(DEFAULT_SIZE),
    )
    .await?;

    to_booking_responses(&state.service_deps, bookings).await
}

/// GET /bookings/owner - 所有者としての予約一覧
///
/// 操作ユーザーが所有する全アイテムへの予約を返す。
pub async fn list_bookings_for_owner(
    State(state): State<Arc<AppState>>,
    SharerUserId(user_id): SharerUserId,
    Query(query): Query<BookingListQuery>,
) -> Result<Json<Vec<BookingResponse>>, ApiError> {
    let bookings = execute_list_for_owner(
        &state.service_deps,
        user_id,
        query.state.as_deref().unwrap_or(DEFAULT_STATE),
        query.from.unwrap_or(DEFAULT_FROM),
        query.size.unwrap_or(DEFAULT_SIZE),
    )
    .await?;

    to_booking_responses(&state.service_deps, bookings).await
}

/// 予約レスポンスの組み立て（アイテム名の解決を含む）
async fn to_booking_response(
    deps: &ServiceDependencies,
    booking: &Booking,
) -> Result<BookingResponse, ApiError> {
    let item = deps
        .item_store
        .get_by_id(booking.item_id)
        .await
        .map_err(|e| ApiError::from(ServiceError::StoreError(e)))?
        .ok_or_else(|| ApiError::from(ServiceError::ItemNotFound))?;

    Ok(BookingResponse::from_booking(booking, item.name))
}

async fn to_booking_responses(
    deps: &ServiceDependencies,
    bookings: Vec<Booking>,
) -> Result<Json<Vec<BookingResponse>>, ApiError> {
    let mut responses = Vec::with_capacity(bookings.len());
    for booking in &bookings {
        responses.push(to_booking_response(deps, booking).await?);
    }

    Ok(Json(responses))
}
