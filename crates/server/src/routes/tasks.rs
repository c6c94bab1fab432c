use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post, MethodFilter},
    Json, Router,
};
use common::types::Created;
use models::{Task, TaskInput};
use service::{ExecuteOutcome, TaskStore};

use crate::errors::ApiError;
use crate::extract::{parse_id, JsonBody};
use crate::routes::method_not_allowed;

pub fn router(store: Arc<TaskStore>) -> Router {
    Router::new()
        .route(
            "/tasks",
            get(list_tasks)
                .post(create_task)
                .on(MethodFilter::HEAD, method_not_allowed)
                .fallback(method_not_allowed),
        )
        .route("/tasks/:id", post(execute_task).fallback(method_not_allowed))
        .with_state(store)
}

pub async fn list_tasks(State(store): State<Arc<TaskStore>>) -> Json<Vec<Task>> {
    Json(store.get_all().await)
}

pub async fn create_task(
    State(store): State<Arc<TaskStore>>,
    JsonBody(input): JsonBody<TaskInput>,
) -> (StatusCode, Json<Created>) {
    let id = store.add(input).await;
    (StatusCode::CREATED, Json(Created { id }))
}

/// `POST /tasks/:id` runs the task. Each outcome gets its own status so a
/// failed run is never reported as a missing task.
pub async fn execute_task(
    State(store): State<Arc<TaskStore>>,
    Path(raw_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id("task", &raw_id)?;
    match store.execute(id).await {
        ExecuteOutcome::Completed => Ok(StatusCode::NO_CONTENT),
        ExecuteOutcome::NotFound => Err(ApiError::NotFound("Task not found")),
        ExecuteOutcome::Failed => Err(ApiError::Internal("Task execution failed".into())),
        ExecuteOutcome::DeletedDuringExecution => {
            Err(ApiError::Conflict("Task was deleted during execution"))
        }
    }
}
