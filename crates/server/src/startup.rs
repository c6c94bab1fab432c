use std::{fmt, sync::Arc, time::Duration};

use axum::Router;
use configs::AppConfig;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::errors::StartupError;
use crate::routes;
use service::{CommandRunner, NoteStore, TaskStore, UserStore};

/// Which entity a process serves. Each binary runs exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceKind {
    Notes,
    Tasks,
    Users,
}

impl ServiceKind {
    pub fn name(&self) -> &'static str {
        match self {
            ServiceKind::Notes => "notes",
            ServiceKind::Tasks => "tasks",
            ServiceKind::Users => "users",
        }
    }
}

impl fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

pub fn task_runner(cfg: &AppConfig) -> CommandRunner {
    CommandRunner::new(cfg.tasks.command.clone())
        .with_timeout(cfg.tasks.timeout_secs.map(Duration::from_secs))
}

/// Construct a fresh store for `kind` and the router that serves it.
pub fn build_app(kind: ServiceKind, cfg: &AppConfig) -> Router {
    let api = match kind {
        ServiceKind::Notes => routes::notes::router(Arc::new(NoteStore::new())),
        ServiceKind::Tasks => {
            let runner = Arc::new(task_runner(cfg));
            routes::tasks::router(Arc::new(TaskStore::new(runner)))
        }
        ServiceKind::Users => routes::users::router(Arc::new(UserStore::new())),
    };
    routes::build_router(api, build_cors())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!(event = "shutdown_signal", "received Ctrl+C, shutting down");
    }
}

/// Bind the configured address and serve until Ctrl+C.
pub async fn run(kind: ServiceKind, cfg: AppConfig) -> Result<(), StartupError> {
    let app = build_app(kind, &cfg);

    let addr = cfg.server.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| StartupError::Bind { addr: addr.clone(), source })?;
    info!(service = kind.name(), %addr, "listening");
    if kind == ServiceKind::Tasks {
        info!(service = kind.name(), command = %cfg.tasks.command, timeout_secs = ?cfg.tasks.timeout_secs, "task runner configured");
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}
