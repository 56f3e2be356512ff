use crate::domain::item::Item;
use crate::domain::value_objects::{ItemId, Page, RequestId, UserId};
use async_trait::async_trait;

#[allow(dead_code)]
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// アイテムストアポート
#[allow(dead_code)]
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// アイテムを保存する（upsert）
    async fn save(&self, item: Item) -> Result<()>;

    /// IDでアイテムを取得する
    async fn get_by_id(&self, item_id: ItemId) -> Result<Option<Item>>;

    /// アイテムが存在するか確認する
    async fn exists(&self, item_id: ItemId) -> Result<bool>;

    /// 所有者のアイテムを取得する（ページ指定）
    async fn find_by_owner_id(&self, owner_id: UserId, page: Page) -> Result<Vec<Item>>;

    /// 名前・説明文でアイテムを検索する（ページ指定）
    ///
    /// 大文字小文字を区別せず、貸出可能なアイテムのみを返す。
    async fn search(&self, text: &str, page: Page) -> Result<Vec<Item>>;

    /// リクエストに応答したアイテムを取得する
    async fn find_by_request_id(&self, request_id: RequestId) -> Result<Vec<Item>>;

    /// アイテムを削除する
    ///
    /// 削除できた場合は true、存在しなかった場合は false を返す。
    async fn delete(&self, item_id: ItemId) -> Result<bool>;
}
