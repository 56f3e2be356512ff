#![allow(dead_code)]

/// 予約作成のエラー
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanBookingError {
    /// 終了日時が開始日時より後になっていない
    EndNotAfterStart,
}

/// 予約承認/却下のエラー
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecideBookingError {
    /// 既に承認済みの予約は再判定できない
    AlreadyApproved,
}

/// コメント投稿のエラー
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteCommentError {
    /// 本文が空
    EmptyText,
}
