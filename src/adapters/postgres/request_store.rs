use crate::domain::request::ItemRequest;
use crate::domain::value_objects::{Page, RequestId, UserId};
use crate::ports::request_store::{RequestStore as RequestStoreTrait, Result};
use async_trait::async_trait;
use sqlx::{PgPool, Row, postgres::PgRow};

fn map_row_to_request(row: &PgRow) -> ItemRequest {
    ItemRequest {
        request_id: RequestId::from_uuid(row.get("id")),
        requestor_id: UserId::from_uuid(row.get("requestor_id")),
        description: row.get("description"),
        created_at: row.get("created_at"),
    }
}

/// RequestStoreのPostgreSQL実装
#[allow(dead_code)]
pub struct RequestStore {
    pool: PgPool,
}

#[allow(dead_code)]
impl RequestStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RequestStoreTrait for RequestStore {
    async fn save(&self, request: ItemRequest) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO requests (id, requestor_id, description, created_at)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (id)
            DO UPDATE SET
                description = EXCLUDED.description
            "#,
        )
        .bind(request.request_id.value())
        .bind(request.requestor_id.value())
        .bind(&request.description)
        .bind(request.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn get_by_id(&self, request_id: RequestId) -> Result<Option<ItemRequest>> {
        let row = sqlx::query(
            r#"
            SELECT id, requestor_id, description, created_at
            FROM requests
            WHERE id = $1
            "#,
        )
        .bind(request_id.value())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(map_row_to_request))
    }

    async fn find_by_requestor_id(&self, requestor_id: UserId) -> Result<Vec<ItemRequest>> {
        let rows = sqlx::query(
            r#"
            SELECT id, requestor_id, description, created_at
            FROM requests
            WHERE requestor_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(requestor_id.value())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(map_row_to_request).collect())
    }

    async fn find_all_excluding(
        &self,
        requestor_id: UserId,
        page: Page,
    ) -> Result<Vec<ItemRequest>> {
        let rows = sqlx::query(
            r#"
            SELECT id, requestor_id, description, created_at
            FROM requests
            WHERE requestor_id <> $1
            ORDER BY created_at DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(requestor_id.value())
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(map_row_to_request).collect())
    }
}
