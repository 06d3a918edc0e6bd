use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use tokio::sync::RwLock;

use super::{EntryStore, StoreResult};
use crate::models::{Entry, EntryPatch, NewEntry, NewUser, User};

/// Map-backed store. Ordering is computed at query time; ids are handed out
/// from monotonically increasing counters starting at 1.
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

struct Inner {
    users: HashMap<i32, User>,
    entries: HashMap<i32, Entry>,
    next_user_id: i32,
    next_entry_id: i32,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                users: HashMap::new(),
                entries: HashMap::new(),
                next_user_id: 1,
                next_entry_id: 1,
            }),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Newest date first; equal dates fall back to ascending id so both backends
/// order identically.
fn sort_newest_first(entries: &mut [Entry]) {
    entries.sort_by(|a, b| b.date.cmp(&a.date).then(a.id.cmp(&b.id)));
}

#[async_trait]
impl EntryStore for MemoryStore {
    async fn get_user(&self, id: i32) -> StoreResult<Option<User>> {
        Ok(self.inner.read().await.users.get(&id).cloned())
    }

    async fn get_user_by_username(&self, username: &str) -> StoreResult<Option<User>> {
        let inner = self.inner.read().await;
        Ok(inner.users.values().find(|u| u.username == username).cloned())
    }

    async fn create_user(&self, user: NewUser) -> StoreResult<User> {
        let mut inner = self.inner.write().await;
        let id = inner.next_user_id;
        inner.next_user_id += 1;
        let user = User {
            id,
            username: user.username,
            password: user.password,
        };
        inner.users.insert(id, user.clone());
        Ok(user)
    }

    async fn get_entry(&self, id: i32) -> StoreResult<Option<Entry>> {
        Ok(self.inner.read().await.entries.get(&id).cloned())
    }

    async fn entries_by_user(&self, user_id: i32) -> StoreResult<Vec<Entry>> {
        let inner = self.inner.read().await;
        let mut entries: Vec<Entry> = inner
            .entries
            .values()
            .filter(|e| e.user_id == user_id)
            .cloned()
            .collect();
        sort_newest_first(&mut entries);
        Ok(entries)
    }

    async fn entries_by_date(&self, user_id: i32, date: NaiveDate) -> StoreResult<Vec<Entry>> {
        let inner = self.inner.read().await;
        let mut entries: Vec<Entry> = inner
            .entries
            .values()
            .filter(|e| e.user_id == user_id && e.date == date)
            .cloned()
            .collect();
        sort_newest_first(&mut entries);
        Ok(entries)
    }

    async fn entries_in_range(
        &self,
        user_id: i32,
        start: NaiveDate,
        end: NaiveDate,
    ) -> StoreResult<Vec<Entry>> {
        let inner = self.inner.read().await;
        let mut entries: Vec<Entry> = inner
            .entries
            .values()
            .filter(|e| e.user_id == user_id && e.date >= start && e.date <= end)
            .cloned()
            .collect();
        sort_newest_first(&mut entries);
        Ok(entries)
    }

    async fn create_entry(&self, entry: NewEntry) -> StoreResult<Entry> {
        let mut inner = self.inner.write().await;
        let id = inner.next_entry_id;
        inner.next_entry_id += 1;
        let entry = Entry {
            id,
            user_id: entry.user_id,
            date: entry.date,
            emotion: entry.emotion,
            anxiety_level: entry.anxiety_level,
            trigger: entry.trigger,
            description: entry.description,
            mind: entry.mind,
            body: entry.body,
            emotions: entry.emotions,
            behaviors: entry.behaviors,
            strategies_used: entry.strategies_used,
            created_at: Utc::now(),
        };
        inner.entries.insert(id, entry.clone());
        Ok(entry)
    }

    async fn update_entry(&self, id: i32, patch: EntryPatch) -> StoreResult<Option<Entry>> {
        let mut inner = self.inner.write().await;
        let Some(entry) = inner.entries.get_mut(&id) else {
            return Ok(None);
        };
        if let Some(user_id) = patch.user_id {
            entry.user_id = user_id;
        }
        if let Some(date) = patch.date {
            entry.date = date;
        }
        if let Some(emotion) = patch.emotion {
            entry.emotion = emotion;
        }
        if let Some(anxiety_level) = patch.anxiety_level {
            entry.anxiety_level = anxiety_level;
        }
        if let Some(trigger) = patch.trigger {
            entry.trigger = trigger;
        }
        if let Some(description) = patch.description {
            entry.description = description;
        }
        if let Some(mind) = patch.mind {
            entry.mind = mind;
        }
        if let Some(body) = patch.body {
            entry.body = body;
        }
        if let Some(emotions) = patch.emotions {
            entry.emotions = emotions;
        }
        if let Some(behaviors) = patch.behaviors {
            entry.behaviors = behaviors;
        }
        if let Some(strategies_used) = patch.strategies_used {
            entry.strategies_used = Some(strategies_used);
        }
        Ok(Some(entry.clone()))
    }

    async fn delete_entry(&self, id: i32) -> StoreResult<bool> {
        Ok(self.inner.write().await.entries.remove(&id).is_some())
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }
}
