use crate::domain::user::User;
use crate::domain::value_objects::UserId;
use crate::ports::user_store::{Result, UserStore as UserStoreTrait};
use async_trait::async_trait;
use sqlx::{PgPool, Row, postgres::PgRow};

fn map_row_to_user(row: &PgRow) -> User {
    User {
        user_id: UserId::from_uuid(row.get("id")),
        name: row.get("name"),
        email: row.get("email"),
    }
}

/// UserStoreのPostgreSQL実装
#[allow(dead_code)]
pub struct UserStore {
    pool: PgPool,
}

#[allow(dead_code)]
impl UserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStoreTrait for UserStore {
    /// ユーザーを保存する（upsert）
    async fn save(&self, user: User) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO users (id, name, email)
            VALUES ($1, $2, $3)
            ON CONFLICT (id)
            DO UPDATE SET
                name = EXCLUDED.name,
                email = EXCLUDED.email
            "#,
        )
        .bind(user.user_id.value())
        .bind(&user.name)
        .bind(&user.email)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn get_by_id(&self, user_id: UserId) -> Result<Option<User>> {
        let row = sqlx::query("SELECT id, name, email FROM users WHERE id = $1")
            .bind(user_id.value())
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.as_ref().map(map_row_to_user))
    }

    async fn exists(&self, user_id: UserId) -> Result<bool> {
        let row = sqlx::query("SELECT EXISTS (SELECT 1 FROM users WHERE id = $1) AS found")
            .bind(user_id.value())
            .fetch_one(&self.pool)
            .await?;

        Ok(row.get("found"))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let row = sqlx::query("SELECT id, name, email FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.as_ref().map(map_row_to_user))
    }

    async fn find_all(&self) -> Result<Vec<User>> {
        let rows = sqlx::query("SELECT id, name, email FROM users ORDER BY name")
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.iter().map(map_row_to_user).collect())
    }

    async fn delete(&self, user_id: UserId) -> Result<bool> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(user_id.value())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
