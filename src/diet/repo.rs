use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

/// Diet entry record. Every query on this table is scoped to the owning user.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DietEntry {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub is_diet: bool,
    pub user_id: Uuid,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

impl DietEntry {
    pub async fn list_by_user(db: &PgPool, user_id: Uuid) -> anyhow::Result<Vec<DietEntry>> {
        let rows = sqlx::query_as::<_, DietEntry>(
            r#"
            SELECT id, name, description, is_diet, user_id, created_at, updated_at
            FROM diets
            WHERE user_id = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(db)
        .await?;
        Ok(rows)
    }

    pub async fn find_owned(
        db: &PgPool,
        user_id: Uuid,
        entry_id: Uuid,
    ) -> anyhow::Result<Option<DietEntry>> {
        let row = sqlx::query_as::<_, DietEntry>(
            r#"
            SELECT id, name, description, is_diet, user_id, created_at, updated_at
            FROM diets
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(entry_id)
        .bind(user_id)
        .fetch_optional(db)
        .await?;
        Ok(row)
    }

    pub async fn create(
        db: &PgPool,
        id: Uuid,
        user_id: Uuid,
        name: &str,
        description: &str,
        is_diet: bool,
    ) -> anyhow::Result<DietEntry> {
        let row = sqlx::query_as::<_, DietEntry>(
            r#"
            INSERT INTO diets (id, name, description, is_diet, user_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, description, is_diet, user_id, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(description)
        .bind(is_diet)
        .bind(user_id)
        .fetch_one(db)
        .await?;
        Ok(row)
    }

    /// Updates an owned entry, returning the fresh row or None when the id
    /// does not match an entry of this user.
    pub async fn update_owned(
        db: &PgPool,
        user_id: Uuid,
        entry_id: Uuid,
        name: &str,
        description: &str,
        is_diet: bool,
    ) -> anyhow::Result<Option<DietEntry>> {
        let row = sqlx::query_as::<_, DietEntry>(
            r#"
            UPDATE diets
            SET name = $3, description = $4, is_diet = $5, updated_at = now()
            WHERE id = $1 AND user_id = $2
            RETURNING id, name, description, is_diet, user_id, created_at, updated_at
            "#,
        )
        .bind(entry_id)
        .bind(user_id)
        .bind(name)
        .bind(description)
        .bind(is_diet)
        .fetch_optional(db)
        .await?;
        Ok(row)
    }

    /// Returns the number of rows removed (0 or 1).
    pub async fn delete_owned(db: &PgPool, user_id: Uuid, entry_id: Uuid) -> anyhow::Result<u64> {
        let result = sqlx::query(r#"DELETE FROM diets WHERE id = $1 AND user_id = $2"#)
            .bind(entry_id)
            .bind(user_id)
            .execute(db)
            .await?;
        Ok(result.rows_affected())
    }

    /// Compliance flags of a user's entries in creation order, as consumed by
    /// the metrics computation.
    pub async fn diet_flags_by_user(db: &PgPool, user_id: Uuid) -> anyhow::Result<Vec<bool>> {
        let flags = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT is_diet
            FROM diets
            WHERE user_id = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(db)
        .await?;
        Ok(flags)
    }
}
