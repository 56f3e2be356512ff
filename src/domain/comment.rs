#![allow(dead_code)]

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{
    CommentId, ItemId, UserId, WriteCommentError,
    booking::{Booking, BookingStatus},
};

/// Comment集約 - 借り手がアイテムに残すコメント
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub comment_id: CommentId,
    pub item_id: ItemId,
    pub author_id: UserId,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

/// 純粋関数：コメントを書く
///
/// ビジネスルール：
/// - 本文は空であってはならない
///
/// 副作用なし。新しいCommentを返す。
pub fn write_comment(
    item_id: ItemId,
    author_id: UserId,
    text: &str,
    created_at: DateTime<Utc>,
) -> Result<Comment, WriteCommentError> {
    if text.is_empty() {
        return Err(WriteCommentError::EmptyText);
    }

    Ok(Comment {
        comment_id: CommentId::new(),
        item_id,
        author_id,
        text: text.to_string(),
        created_at,
    })
}

/// 純粋関数：コメント資格の判定
///
/// ビジネスルール：
/// - 書き手がそのアイテムの借り手であること
/// - 予約の開始日時が到来していること（start <= now）
/// - 予約が REJECTED でないこと
pub fn can_comment(bookings: &[Booking], author_id: UserId, now: DateTime<Utc>) -> bool {
    bookings.iter().any(|booking| {
        booking.booker_id == author_id
            && booking.start <= now
            && booking.status != BookingStatus::Rejected
    })
}
