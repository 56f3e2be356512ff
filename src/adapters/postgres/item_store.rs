use crate::domain::item::Item;
use crate::domain::value_objects::{ItemId, Page, RequestId, UserId};
use crate::ports::item_store::{ItemStore as ItemStoreTrait, Result};
use async_trait::async_trait;
use sqlx::{PgPool, Row, postgres::PgRow};
use uuid::Uuid;

fn map_row_to_item(row: &PgRow) -> Item {
    let request_id: Option<Uuid> = row.get("request_id");

    Item {
        item_id: ItemId::from_uuid(row.get("id")),
        owner_id: UserId::from_uuid(row.get("owner_id")),
        name: row.get("name"),
        description: row.get("description"),
        available: row.get("is_available"),
        request_id: request_id.map(RequestId::from_uuid),
    }
}

/// ItemStoreのPostgreSQL実装
#[allow(dead_code)]
pub struct ItemStore {
    pool: PgPool,
}

#[allow(dead_code)]
impl ItemStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ItemStoreTrait for ItemStore {
    /// アイテムを保存する（upsert）
    async fn save(&self, item: Item) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO items (id, name, description, owner_id, is_available, request_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (id)
            DO UPDATE SET
                name = EXCLUDED.name,
                description = EXCLUDED.description,
                owner_id = EXCLUDED.owner_id,
                is_available = EXCLUDED.is_available,
                request_id = EXCLUDED.request_id
            "#,
        )
        .bind(item.item_id.value())
        .bind(&item.name)
        .bind(&item.description)
        .bind(item.owner_id.value())
        .bind(item.available)
        .bind(item.request_id.map(|id| id.value()))
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn get_by_id(&self, item_id: ItemId) -> Result<Option<Item>> {
        let row = sqlx::query(
            r#"
            SELECT id, name, description, owner_id, is_available, request_id
            FROM items
            WHERE id = $1
            "#,
        )
        .bind(item_id.value())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(map_row_to_item))
    }

    async fn exists(&self, item_id: ItemId) -> Result<bool> {
        let row = sqlx::query("SELECT EXISTS (SELECT 1 FROM items WHERE id = $1) AS found")
            .bind(item_id.value())
            .fetch_one(&self.pool)
            .await?;

        Ok(row.get("found"))
    }

    async fn find_by_owner_id(&self, owner_id: UserId, page: Page) -> Result<Vec<Item>> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, description, owner_id, is_available, request_id
            FROM items
            WHERE owner_id = $1
            ORDER BY name
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(owner_id.value())
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(map_row_to_item).collect())
    }

    /// 名前・説明文の部分一致検索（貸出可能なアイテムのみ）
    async fn search(&self, text: &str, page: Page) -> Result<Vec<Item>> {
        let pattern = format!("%{}%", text);

        let rows = sqlx::query(
            r#"
            SELECT id, name, description, owner_id, is_available, request_id
            FROM items
            WHERE is_available
              AND (name ILIKE $1 OR description ILIKE $1)
            ORDER BY name
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(&pattern)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(map_row_to_item).collect())
    }

    async fn find_by_request_id(&self, request_id: RequestId) -> Result<Vec<Item>> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, description, owner_id, is_available, request_id
            FROM items
            WHERE request_id = $1
            "#,
        )
        .bind(request_id.value())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(map_row_to_item).collect())
    }

    async fn delete(&self, item_id: ItemId) -> Result<bool> {
        let result = sqlx::query("DELETE FROM items WHERE id = $1")
            .bind(item_id.value())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
