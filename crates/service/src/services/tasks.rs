use std::sync::Arc;

use models::{Task, TaskInput, TaskStatus};
use tracing::{debug, info, warn};

use crate::services::task_runner::TaskRunner;
use crate::storage::memory_store::MemoryStore;

/// Result of [`TaskStore::execute`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecuteOutcome {
    /// The action succeeded and the task is now `completed`.
    Completed,
    /// No task with that ID existed when execution was requested.
    NotFound,
    /// The action failed; the status was left untouched.
    Failed,
    /// The action succeeded but the task was deleted before the status could
    /// be committed.
    DeletedDuringExecution,
}

pub struct TaskStore {
    store: MemoryStore<Task>,
    runner: Arc<dyn TaskRunner>,
}

impl TaskStore {
    pub fn new(runner: Arc<dyn TaskRunner>) -> Self {
        Self { store: MemoryStore::new(), runner }
    }

    /// Insert a task in the `pending` state.
    pub async fn add(&self, input: TaskInput) -> u64 {
        let id = self
            .store
            .insert_with(|id| Task { id, name: input.name, status: TaskStatus::Pending })
            .await;
        debug!(task_id = id, "task added");
        id
    }

    pub async fn get_all(&self) -> Vec<Task> {
        self.store.list().await
    }

    pub async fn delete(&self, id: u64) -> bool {
        let removed = self.store.remove(id).await;
        debug!(task_id = id, removed, "task delete");
        removed
    }

    /// Run the task's action and mark it `completed` on success.
    ///
    /// The store lock is held only to read the task and, afterwards, to commit
    /// the status; the action itself runs unlocked so other calls proceed
    /// while it is in flight.
    pub async fn execute(&self, id: u64) -> ExecuteOutcome {
        let Some(task) = self.store.get(id).await else {
            return ExecuteOutcome::NotFound;
        };

        if let Err(e) = self.runner.run(&task.name).await {
            warn!(task_id = id, name = %task.name, code = e.code(), error = %e, "task execution failed");
            return ExecuteOutcome::Failed;
        }

        let committed = self
            .store
            .update_with(id, |t| t.status = TaskStatus::Completed)
            .await;
        if committed {
            info!(task_id = id, name = %task.name, "task completed");
            ExecuteOutcome::Completed
        } else {
            warn!(task_id = id, name = %task.name, "task deleted while executing");
            ExecuteOutcome::DeletedDuringExecution
        }
    }
}
