use crate::ports::{BookingStore, CommentStore, ItemStore, RequestStore, UserStore};
use std::sync::Arc;

/// サービスの依存関係
///
/// 関数型DDDの原則に従い、データ構造として定義。
/// 振る舞い（メソッド）は持たず、各サービス関数に明示的に渡す。
/// ストアはすべてポート（トレイト）越しに参照する。
#[derive(Clone)]
pub struct ServiceDependencies {
    pub user_store: Arc<dyn UserStore>,
    pub item_store: Arc<dyn ItemStore>,
    pub booking_store: Arc<dyn BookingStore>,
    pub comment_store: Arc<dyn CommentStore>,
    pub request_store: Arc<dyn RequestStore>,
}
