//! Service layer: in-memory entity stores and the task execution seam.
//! - `storage` holds the generic lock-protected map every entity store uses.
//! - `services` specialises it per entity (notes, tasks, users).
//! - Stores are plain values; callers own them and share them through `Arc`.

pub mod errors;
pub mod storage;
pub mod services;

pub use services::notes::NoteStore;
pub use services::tasks::{ExecuteOutcome, TaskStore};
pub use services::task_runner::{CommandRunner, TaskRunner};
pub use services::users::UserStore;
