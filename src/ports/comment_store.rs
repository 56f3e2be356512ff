use crate::domain::comment::Comment;
use crate::domain::value_objects::ItemId;
use async_trait::async_trait;

#[allow(dead_code)]
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// コメントストアポート
#[allow(dead_code)]
#[async_trait]
pub trait CommentStore: Send + Sync {
    /// コメントを保存する
    async fn save(&self, comment: Comment) -> Result<()>;

    /// アイテムの全コメントを取得する
    async fn find_by_item_id(&self, item_id: ItemId) -> Result<Vec<Comment>>;
}
