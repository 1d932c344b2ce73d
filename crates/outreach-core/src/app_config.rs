use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    /// Backend base URL, e.g. `http://localhost:5000/api`.
    pub api_url: String,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    /// Roster YAML to use instead of the bundled sample roster.
    pub roster_path: Option<PathBuf>,
    /// Campaign performance YAML to use instead of the bundled mock campaign.
    pub performance_path: Option<PathBuf>,
    pub upload_tick_ms: u64,
    pub search_limit: u32,
}
