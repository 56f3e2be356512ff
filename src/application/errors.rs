use thiserror::Error;

/// アプリケーション層のエラー
///
/// HTTPステータスへの変換はAPI層の責務。ここでは種別のみを表す。
/// 認可エラーを意図的に「見つからない」として報告する箇所がある：
/// 自分のアイテムへの予約は ItemNotFound、所有者以外の判定と
/// 当事者以外の参照は BookingNotFound になる（存在を漏らさないため）。
#[derive(Debug, Error)]
pub enum ServiceError {
    /// ユーザーが存在しない
    #[error("User not found")]
    UserNotFound,

    /// アイテムが存在しない（または操作ユーザーに権限がない）
    #[error("Item not found")]
    ItemNotFound,

    /// 予約が存在しない（または操作ユーザーが当事者でない）
    #[error("Booking not found")]
    BookingNotFound,

    /// アイテムリクエストが存在しない
    #[error("Request not found")]
    RequestNotFound,

    /// メールアドレスが既に使われている
    #[error("Email already in use")]
    EmailConflict,

    /// 終了日時が開始日時より後になっていない
    #[error("Incorrect booking date range")]
    InvalidDateRange,

    /// アイテムが貸出不可
    #[error("Item is not available")]
    ItemUnavailable,

    /// 状態機械が禁止する遷移（承認済み予約の再判定）
    #[error("Unknown state: UNSUPPORTED_STATUS")]
    UnsupportedState,

    /// 呼び出し側の引数エラー（不明なフィルタ、不正なページ指定など）
    #[error("{0}")]
    InvalidArgument(String),

    /// ストアのエラー
    #[error("Store error")]
    StoreError(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// アプリケーション層の Result型
pub type Result<T> = std::result::Result<T, ServiceError>;
