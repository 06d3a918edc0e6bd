//! Entry/User persistence. Two backends implement the same contract: a
//! map-backed store for single-process deployments and a Postgres store.
//! Which one backs the process is a deployment-time choice made in `main`.
//!
//! Absence is a normal outcome here, never an error: lookups return `Option`,
//! deletes return whether a row existed. `StoreError` is reserved for real
//! storage faults and propagates to the caller untouched.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::models::{Entry, EntryPatch, NewEntry, NewUser, User};

mod memory;
mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

#[async_trait]
pub trait EntryStore: Send + Sync {
    async fn get_user(&self, id: i32) -> StoreResult<Option<User>>;
    async fn get_user_by_username(&self, username: &str) -> StoreResult<Option<User>>;
    async fn create_user(&self, user: NewUser) -> StoreResult<User>;

    async fn get_entry(&self, id: i32) -> StoreResult<Option<Entry>>;

    /// All entries owned by `user_id`, newest date first.
    async fn entries_by_user(&self, user_id: i32) -> StoreResult<Vec<Entry>>;

    /// Entries whose canonical date equals `date`. Usually 0 or 1 rows, but
    /// the store does not forbid several entries on one day.
    async fn entries_by_date(&self, user_id: i32, date: NaiveDate) -> StoreResult<Vec<Entry>>;

    /// Entries with `start <= date <= end`, newest date first.
    async fn entries_in_range(
        &self,
        user_id: i32,
        start: NaiveDate,
        end: NaiveDate,
    ) -> StoreResult<Vec<Entry>>;

    async fn create_entry(&self, entry: NewEntry) -> StoreResult<Entry>;

    /// Merge the supplied fields onto an existing entry. `id` and
    /// `created_at` never change. `None` when the id is unknown.
    async fn update_entry(&self, id: i32, patch: EntryPatch) -> StoreResult<Option<Entry>>;

    /// `false` when there was nothing to remove.
    async fn delete_entry(&self, id: i32) -> StoreResult<bool>;

    /// Readiness probe for the /readyz endpoint.
    async fn ping(&self) -> StoreResult<()>;
}
