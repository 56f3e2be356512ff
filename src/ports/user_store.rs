use crate::domain::user::User;
use crate::domain::value_objects::UserId;
use async_trait::async_trait;

#[allow(dead_code)]
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// ユーザーストアポート
///
/// ユーザーはIDで参照される。予約コンテキストは存在確認にしか使わない。
#[allow(dead_code)]
#[async_trait]
pub trait UserStore: Send + Sync {
    /// ユーザーを保存する（upsert）
    async fn save(&self, user: User) -> Result<()>;

    /// IDでユーザーを取得する
    async fn get_by_id(&self, user_id: UserId) -> Result<Option<User>>;

    /// ユーザーが存在するか確認する
    ///
    /// 各操作の操作ユーザーバリデーションに使用される。
    async fn exists(&self, user_id: UserId) -> Result<bool>;

    /// メールアドレスでユーザーを検索する
    ///
    /// メールアドレスの一意性確認に使用される。
    async fn find_by_email(&self, email: &str) -> Result<Option<User>>;

    /// 全ユーザーを取得する
    async fn find_all(&self) -> Result<Vec<User>>;

    /// ユーザーを削除する
    ///
    /// 削除できた場合は true、存在しなかった場合は false を返す。
    async fn delete(&self, user_id: UserId) -> Result<bool>;
}
