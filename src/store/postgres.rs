use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;

use super::{EntryStore, StoreResult};
use crate::models::{Entry, EntryPatch, NewEntry, NewUser, User};

/// Postgres-backed store. The `date` column is a plain DATE, so the canonical
/// `YYYY-MM-DD` value is what gets compared and indexed; range queries are an
/// inclusive BETWEEN on that column.
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EntryStore for PgStore {
    async fn get_user(&self, id: i32) -> StoreResult<Option<User>> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    async fn get_user_by_username(&self, username: &str) -> StoreResult<Option<User>> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE username = $1")
            .bind(username)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    async fn create_user(&self, user: NewUser) -> StoreResult<User> {
        let user = sqlx::query_as::<_, User>(
            "INSERT INTO users (username, password) VALUES ($1, $2) RETURNING *",
        )
        .bind(&user.username)
        .bind(&user.password)
        .fetch_one(&self.pool)
        .await?;
        Ok(user)
    }

    async fn get_entry(&self, id: i32) -> StoreResult<Option<Entry>> {
        let entry = sqlx::query_as::<_, Entry>("SELECT * FROM entries WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(entry)
    }

    async fn entries_by_user(&self, user_id: i32) -> StoreResult<Vec<Entry>> {
        let entries = sqlx::query_as::<_, Entry>(
            r#"
            SELECT * FROM entries
            WHERE user_id = $1
            ORDER BY date DESC, id ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(entries)
    }

    async fn entries_by_date(&self, user_id: i32, date: NaiveDate) -> StoreResult<Vec<Entry>> {
        let entries = sqlx::query_as::<_, Entry>(
            r#"
            SELECT * FROM entries
            WHERE user_id = $1 AND date = $2
            ORDER BY date DESC, id ASC
            "#,
        )
        .bind(user_id)
        .bind(date)
        .fetch_all(&self.pool)
        .await?;
        Ok(entries)
    }

    async fn entries_in_range(
        &self,
        user_id: i32,
        start: NaiveDate,
        end: NaiveDate,
    ) -> StoreResult<Vec<Entry>> {
        let entries = sqlx::query_as::<_, Entry>(
            r#"
            SELECT * FROM entries
            WHERE user_id = $1 AND date BETWEEN $2 AND $3
            ORDER BY date DESC, id ASC
            "#,
        )
        .bind(user_id)
        .bind(start)
        .bind(end)
        .fetch_all(&self.pool)
        .await?;
        Ok(entries)
    }

    async fn create_entry(&self, entry: NewEntry) -> StoreResult<Entry> {
        let entry = sqlx::query_as::<_, Entry>(
            r#"
            INSERT INTO entries
                (user_id, date, emotion, anxiety_level, "trigger", description,
                 mind, body, emotions, behaviors, strategies_used)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING *
            "#,
        )
        .bind(entry.user_id)
        .bind(entry.date)
        .bind(entry.emotion)
        .bind(entry.anxiety_level)
        .bind(entry.trigger)
        .bind(&entry.description)
        .bind(&entry.mind)
        .bind(&entry.body)
        .bind(&entry.emotions)
        .bind(&entry.behaviors)
        .bind(&entry.strategies_used)
        .fetch_one(&self.pool)
        .await?;
        Ok(entry)
    }

    async fn update_entry(&self, id: i32, patch: EntryPatch) -> StoreResult<Option<Entry>> {
        let entry = sqlx::query_as::<_, Entry>(
            r#"
            UPDATE entries SET
                user_id = COALESCE($2, user_id),
                date = COALESCE($3, date),
                emotion = COALESCE($4, emotion),
                anxiety_level = COALESCE($5, anxiety_level),
                "trigger" = COALESCE($6, "trigger"),
                description = COALESCE($7, description),
                mind = COALESCE($8, mind),
                body = COALESCE($9, body),
                emotions = COALESCE($10, emotions),
                behaviors = COALESCE($11, behaviors),
                strategies_used = COALESCE($12, strategies_used)
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(patch.user_id)
        .bind(patch.date)
        .bind(patch.emotion)
        .bind(patch.anxiety_level)
        .bind(patch.trigger)
        .bind(&patch.description)
        .bind(&patch.mind)
        .bind(&patch.body)
        .bind(&patch.emotions)
        .bind(&patch.behaviors)
        .bind(&patch.strategies_used)
        .fetch_optional(&self.pool)
        .await?;
        Ok(entry)
    }

    async fn delete_entry(&self, id: i32) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM entries WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> StoreResult<()> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await?;
        Ok(())
    }
}
