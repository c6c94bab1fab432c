//! Process entrypoint shared by the `notes`, `tasks` and `users` binaries.

use std::process::ExitCode;

use configs::AppConfig;
use dotenvy::dotenv;
use tracing::{error, info};
use uuid::Uuid;

use crate::errors::StartupError;
use crate::startup::{self, ServiceKind};

fn init_logging(kind: ServiceKind) {
    // 提前加载 .env，使得 RUST_LOG 等环境变量生效
    dotenv().ok();
    common::utils::logging::init_logging_from_env();
    info!(service = kind.name(), event = "logger_init", "tracing subscriber initialized");
}

/// Run one service to completion and map the result to an exit code.
pub fn launch(kind: ServiceKind) -> ExitCode {
    init_logging(kind);

    let service_id = Uuid::new_v4();
    let pid = std::process::id();
    let version = env!("CARGO_PKG_VERSION");

    // Panic 钩子：捕获异常并输出错误日志，便于排查问题
    std::panic::set_hook(Box::new(move |info| {
        error!(
            service = kind.name(),
            event = "panic",
            %service_id,
            pid,
            message = %info,
            "unhandled panic occurred"
        );
    }));

    let cfg = match AppConfig::load_and_validate() {
        Ok(cfg) => cfg,
        Err(e) => {
            let err = StartupError::InvalidConfig(e.to_string());
            error!(service = kind.name(), event = "config_invalid", error = %err, "cannot load configuration");
            return ExitCode::FAILURE;
        }
    };

    let mut builder = tokio::runtime::Builder::new_multi_thread();
    builder.enable_all();
    if let Some(w) = cfg.server.worker_threads {
        builder.worker_threads(w);
    }
    let rt = match builder.build() {
        Ok(rt) => rt,
        Err(e) => {
            error!(service = kind.name(), event = "runtime_build_failed", error = %e, "failed to build tokio runtime");
            return ExitCode::FAILURE;
        }
    };

    info!(
        service = kind.name(),
        event = "start",
        %service_id,
        pid,
        version,
        threads = cfg.server.worker_threads.unwrap_or_default(),
        "service starting"
    );

    match rt.block_on(startup::run(kind, cfg)) {
        Ok(()) => {
            info!(service = kind.name(), event = "stop", %service_id, pid, "service stopped normally");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(service = kind.name(), event = "run_failed", error = %e, "service exited with error");
            eprintln!("{kind}: {e}");
            ExitCode::FAILURE
        }
    }
}
