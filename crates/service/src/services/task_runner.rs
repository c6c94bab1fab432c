//! The side effect behind task execution.
//!
//! `TaskStore` only sees the `TaskRunner` trait; the process entrypoint wires
//! in a `CommandRunner`, tests wire in doubles.

use std::{process::Stdio, time::Duration};

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use crate::errors::ServiceError;

#[async_trait]
pub trait TaskRunner: Send + Sync {
    /// Run the action for the task called `name`. Output is not surfaced.
    async fn run(&self, name: &str) -> Result<(), ServiceError>;
}

/// Runs `program <task name>` and treats a zero exit status as success.
#[derive(Debug, Clone)]
pub struct CommandRunner {
    program: String,
    timeout: Option<Duration>,
}

impl CommandRunner {
    pub fn new(program: impl Into<String>) -> Self {
        Self { program: program.into(), timeout: None }
    }

    /// Kill the child and fail the run once `limit` elapses.
    pub fn with_timeout(mut self, limit: Option<Duration>) -> Self {
        self.timeout = limit;
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Default for CommandRunner {
    fn default() -> Self {
        Self::new("echo")
    }
}

#[async_trait]
impl TaskRunner for CommandRunner {
    async fn run(&self, name: &str) -> Result<(), ServiceError> {
        let mut child = Command::new(&self.program)
            .arg(name)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| ServiceError::Spawn { program: self.program.clone(), reason: e.to_string() })?;

        let waited = match self.timeout {
            Some(limit) => match tokio::time::timeout(limit, child.wait()).await {
                Ok(res) => res,
                Err(_) => {
                    if let Err(e) = child.kill().await {
                        debug!(program = %self.program, error = %e, "failed to kill timed-out task command");
                    }
                    return Err(ServiceError::Timeout { program: self.program.clone(), limit });
                }
            },
            None => child.wait().await,
        };

        let status = waited
            .map_err(|e| ServiceError::Spawn { program: self.program.clone(), reason: e.to_string() })?;
        debug!(program = %self.program, %status, "task command finished");
        if status.success() {
            Ok(())
        } else {
            Err(ServiceError::ExitStatus { program: self.program.clone(), status: status.to_string() })
        }
    }
}
