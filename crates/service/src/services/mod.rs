pub mod notes;
pub mod task_runner;
pub mod tasks;
pub mod users;
