use std::sync::Arc;

use async_trait::async_trait;
use axum::http::StatusCode;
use serde_json::json;
use service::errors::ServiceError;
use service::{TaskRunner, TaskStore};

mod support;
use support::{app, send};

struct FailingRunner;

#[async_trait]
impl TaskRunner for FailingRunner {
    async fn run(&self, _name: &str) -> Result<(), ServiceError> {
        Err(ServiceError::ExitStatus { program: "stub".into(), status: "exit status: 1".into() })
    }
}

/// Deletes the task it is running, simulating a concurrent `delete`.
struct SelfDeletingRunner {
    store: std::sync::OnceLock<Arc<TaskStore>>,
}

#[async_trait]
impl TaskRunner for SelfDeletingRunner {
    async fn run(&self, _name: &str) -> Result<(), ServiceError> {
        if let Some(store) = self.store.get() {
            store.delete(0).await;
        }
        Ok(())
    }
}

fn tasks_app(runner: Arc<dyn TaskRunner>) -> axum::Router {
    app(server::routes::tasks::router(Arc::new(TaskStore::new(runner))))
}

#[cfg(unix)]
#[tokio::test]
async fn create_then_execute() {
    let app = tasks_app(Arc::new(service::CommandRunner::default()));

    let res = send(&app, "POST", "/tasks", Some(r#"{"name":"build"}"#)).await;
    assert_eq!(res.status, StatusCode::CREATED);
    assert_eq!(res.json(), json!({"id": 0}));

    let res = send(&app, "GET", "/tasks", None).await;
    assert_eq!(res.json(), json!([{"id": 0, "name": "build", "status": "pending"}]));

    let res = send(&app, "POST", "/tasks/0", None).await;
    assert_eq!(res.status, StatusCode::NO_CONTENT);
    assert!(res.body.is_empty());

    let res = send(&app, "GET", "/tasks", None).await;
    assert_eq!(res.json(), json!([{"id": 0, "name": "build", "status": "completed"}]));
}

#[tokio::test]
async fn client_cannot_set_status() {
    let app = tasks_app(Arc::new(FailingRunner));
    send(&app, "POST", "/tasks", Some(r#"{"name":"build","status":"completed"}"#)).await;
    let res = send(&app, "GET", "/tasks", None).await;
    assert_eq!(res.json()[0]["status"], "pending");
}

#[tokio::test]
async fn capitalised_or_null_name_is_accepted() {
    let app = tasks_app(Arc::new(FailingRunner));
    send(&app, "POST", "/tasks", Some(r#"{"Name":"build"}"#)).await;
    send(&app, "POST", "/tasks", Some(r#"{"name":null}"#)).await;
    let res = send(&app, "GET", "/tasks", None).await;
    assert_eq!(res.json()[0]["name"], "build");
    assert_eq!(res.json()[1]["name"], "");
}

#[tokio::test]
async fn execute_missing_task_is_404() {
    let res = send(&tasks_app(Arc::new(FailingRunner)), "POST", "/tasks/5", None).await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
    assert_eq!(res.body, "Task not found");
}

#[tokio::test]
async fn failed_execution_is_500_and_keeps_pending() {
    let app = tasks_app(Arc::new(FailingRunner));
    send(&app, "POST", "/tasks", Some(r#"{"name":"build"}"#)).await;

    let res = send(&app, "POST", "/tasks/0", None).await;
    assert_eq!(res.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(res.body, "Task execution failed");

    let res = send(&app, "GET", "/tasks", None).await;
    assert_eq!(res.json()[0]["status"], "pending");
}

#[tokio::test]
async fn delete_during_execution_is_409() {
    let runner = Arc::new(SelfDeletingRunner { store: std::sync::OnceLock::new() });
    let store = Arc::new(TaskStore::new(runner.clone()));
    let _ = runner.store.set(Arc::clone(&store));
    let app = app(server::routes::tasks::router(Arc::clone(&store)));

    send(&app, "POST", "/tasks", Some(r#"{"name":"build"}"#)).await;
    let res = send(&app, "POST", "/tasks/0", None).await;
    assert_eq!(res.status, StatusCode::CONFLICT);
    assert_eq!(res.body, "Task was deleted during execution");
    assert_eq!(send(&app, "GET", "/tasks", None).await.json(), json!([]));
}

#[tokio::test]
async fn tasks_only_support_execute_on_items() {
    let app = tasks_app(Arc::new(FailingRunner));
    send(&app, "POST", "/tasks", Some(r#"{"name":"build"}"#)).await;
    for method in ["GET", "HEAD", "PUT", "DELETE"] {
        let res = send(&app, method, "/tasks/0", None).await;
        assert_eq!(res.status, StatusCode::METHOD_NOT_ALLOWED, "{method}");
    }
    assert_eq!(send(&app, "DELETE", "/tasks", None).await.status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(send(&app, "HEAD", "/tasks", None).await.status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn non_numeric_id_is_400() {
    let res = send(&tasks_app(Arc::new(FailingRunner)), "POST", "/tasks/build", None).await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.body, "invalid task id: build");
}
