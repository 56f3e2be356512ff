use crate::domain::request::ItemRequest;
use crate::domain::value_objects::{Page, RequestId, UserId};
use async_trait::async_trait;

#[allow(dead_code)]
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// アイテムリクエストストアポート
#[allow(dead_code)]
#[async_trait]
pub trait RequestStore: Send + Sync {
    /// リクエストを保存する
    async fn save(&self, request: ItemRequest) -> Result<()>;

    /// IDでリクエストを取得する
    async fn get_by_id(&self, request_id: RequestId) -> Result<Option<ItemRequest>>;

    /// 起票者のリクエストを取得する
    async fn find_by_requestor_id(&self, requestor_id: UserId) -> Result<Vec<ItemRequest>>;

    /// 起票者以外のリクエストを取得する（ページ指定）
    ///
    /// 他ユーザーの要望を眺めて出品につなげる画面で使用される。
    /// 起票日時の降順で返す。
    async fn find_all_excluding(&self, requestor_id: UserId, page: Page)
    -> Result<Vec<ItemRequest>>;
}
