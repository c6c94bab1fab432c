use models::{Note, NoteInput};
use tracing::debug;

use crate::storage::memory_store::MemoryStore;

#[derive(Default)]
pub struct NoteStore {
    store: MemoryStore<Note>,
}

impl NoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn add(&self, input: NoteInput) -> u64 {
        let id = self
            .store
            .insert_with(|id| Note { id, content: input.content })
            .await;
        debug!(note_id = id, "note added");
        id
    }

    pub async fn get_all(&self) -> Vec<Note> {
        self.store.list().await
    }

    /// Replace the content of an existing note. The ID never changes.
    pub async fn update(&self, id: u64, input: NoteInput) -> bool {
        let updated = self
            .store
            .update_with(id, |note| note.content = input.content)
            .await;
        debug!(note_id = id, updated, "note update");
        updated
    }

    pub async fn delete(&self, id: u64) -> bool {
        let removed = self.store.remove(id).await;
        debug!(note_id = id, removed, "note delete");
        removed
    }
}
