use chrono::Utc;
use models::{User, UserInput};
use tracing::debug;

use crate::storage::memory_store::MemoryStore;

#[derive(Default)]
pub struct UserStore {
    store: MemoryStore<User>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a user stamped with the current time.
    pub async fn add(&self, input: UserInput) -> u64 {
        let created_at = Utc::now();
        let id = self
            .store
            .insert_with(|id| User { id, name: input.name, created_at })
            .await;
        debug!(user_id = id, "user added");
        id
    }

    pub async fn get_all(&self) -> Vec<User> {
        self.store.list().await
    }

    pub async fn delete(&self, id: u64) -> bool {
        let removed = self.store.remove(id).await;
        debug!(user_id = id, removed, "user delete");
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn add_stamps_creation_time() {
        let store = UserStore::new();
        let before = Utc::now();
        let id = store.add(UserInput { name: "ada".into() }).await;
        let after = Utc::now();

        let users = store.get_all().await;
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].id, id);
        assert_eq!(users[0].name, "ada");
        assert!(users[0].created_at >= before && users[0].created_at <= after);
    }

    #[tokio::test]
    async fn delete_removes_permanently() {
        let store = UserStore::new();
        let id = store.add(UserInput { name: "ada".into() }).await;
        assert!(store.delete(id).await);
        assert!(!store.delete(id).await);
        assert!(store.get_all().await.is_empty());
        assert_eq!(store.add(UserInput { name: "bob".into() }).await, id + 1);
    }
}
