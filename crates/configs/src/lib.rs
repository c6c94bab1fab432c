use anyhow::anyhow;
use anyhow::Result;
use serde::Deserialize;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_WORKER_THREADS: usize = 4;
pub const DEFAULT_TASK_COMMAND: &str = "echo";

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub tasks: TaskConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.into(),
            port: DEFAULT_PORT,
            worker_threads: Some(DEFAULT_WORKER_THREADS),
        }
    }
}

/// External command run when a task is executed. The task name is passed as
/// its only argument.
#[derive(Debug, Clone, Deserialize)]
pub struct TaskConfig {
    #[serde(default = "default_task_command")]
    pub command: String,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for TaskConfig {
    fn default() -> Self {
        Self { command: DEFAULT_TASK_COMMAND.into(), timeout_secs: None }
    }
}

fn default_host() -> String { DEFAULT_HOST.into() }
fn default_port() -> u16 { DEFAULT_PORT }
fn default_task_command() -> String { DEFAULT_TASK_COMMAND.into() }

pub fn config_path() -> String {
    std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string())
}

pub fn load_default() -> Result<AppConfig> {
    load_from_file(&config_path())
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    parse(&content)
}

pub fn parse(content: &str) -> Result<AppConfig> {
    let cfg: AppConfig = toml::from_str(content)?;
    Ok(cfg)
}

impl AppConfig {
    /// Load `config.toml` (or `CONFIG_PATH`), fall back to defaults when the
    /// file is absent, then apply environment overrides and validate.
    pub fn load_and_validate() -> Result<Self> {
        let mut cfg = if std::path::Path::new(&config_path()).exists() {
            load_default()?
        } else {
            AppConfig::default()
        };
        cfg.apply_env_overrides(|key| std::env::var(key).ok())?;
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    /// Environment wins over the file. The lookup is injected so tests do not
    /// have to mutate the process environment.
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("SERVER_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("SERVER_PORT") {
            self.server.port = port
                .trim()
                .parse()
                .map_err(|e| anyhow!("SERVER_PORT must be a port number: {e}"))?;
        }
        if let Some(threads) = lookup("TOKIO_WORKER_THREADS") {
            self.server.worker_threads = threads.trim().parse().ok();
        }
        if let Some(command) = lookup("TASK_COMMAND") {
            self.tasks.command = command;
        }
        if let Some(secs) = lookup("TASK_TIMEOUT_SECS") {
            self.tasks.timeout_secs = Some(
                secs.trim()
                    .parse()
                    .map_err(|e| anyhow!("TASK_TIMEOUT_SECS must be an integer: {e}"))?,
            );
        }
        Ok(())
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.server.normalize()?;
        self.tasks.normalize()?;
        Ok(())
    }
}

impl ServerConfig {
    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = DEFAULT_HOST.to_string();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be in 1..=65535"));
        }
        match self.worker_threads {
            Some(w) if w > 0 => {}
            _ => self.worker_threads = Some(DEFAULT_WORKER_THREADS),
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl TaskConfig {
    fn normalize(&mut self) -> Result<()> {
        if self.command.trim().is_empty() {
            return Err(anyhow!("tasks.command must not be empty"));
        }
        if self.timeout_secs == Some(0) {
            self.timeout_secs = None;
        }
        Ok(())
    }
}
