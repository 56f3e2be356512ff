use crate::domain::comment::Comment;
use crate::domain::value_objects::{CommentId, ItemId, UserId};
use crate::ports::comment_store::{CommentStore as CommentStoreTrait, Result};
use async_trait::async_trait;
use sqlx::{PgPool, Row, postgres::PgRow};

fn map_row_to_comment(row: &PgRow) -> Comment {
    Comment {
        comment_id: CommentId::from_uuid(row.get("id")),
        item_id: ItemId::from_uuid(row.get("item_id")),
        author_id: UserId::from_uuid(row.get("author_id")),
        text: row.get("text"),
        created_at: row.get("created_at"),
    }
}

/// CommentStoreのPostgreSQL実装
#[allow(dead_code)]
pub struct CommentStore {
    pool: PgPool,
}

#[allow(dead_code)]
impl CommentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentStoreTrait for CommentStore {
    async fn save(&self, comment: Comment) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO comments (id, item_id, author_id, text, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(comment.comment_id.value())
        .bind(comment.item_id.value())
        .bind(comment.author_id.value())
        .bind(&comment.text)
        .bind(comment.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_item_id(&self, item_id: ItemId) -> Result<Vec<Comment>> {
        let rows = sqlx::query(
            r#"
            SELECT id, item_id, author_id, text, created_at
            FROM comments
            WHERE item_id = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(item_id.value())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(map_row_to_comment).collect())
    }
}
