use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("failed to start `{program}`: {reason}")]
    Spawn { program: String, reason: String },
    #[error("`{program}` exited unsuccessfully ({status})")]
    ExitStatus { program: String, status: String },
    #[error("`{program}` did not finish within {}ms", .limit.as_millis())]
    Timeout { program: String, limit: Duration },
}

impl ServiceError {
    /// Stable numeric code for logging
    pub fn code(&self) -> u16 {
        match self {
            ServiceError::Spawn { .. } => 2001,
            ServiceError::ExitStatus { .. } => 2002,
            ServiceError::Timeout { .. } => 2003,
        }
    }
}
