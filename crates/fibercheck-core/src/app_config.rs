use std::net::SocketAddr;

use crate::locale::Locale;

#[derive(Debug, Clone, PartialEq, Eq)]
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
    pub bind_addr: SocketAddr,
    pub log_level: String,
    pub locale: Locale,
    /// Base URL of the coverage service the client talks to.
    pub endpoint_url: String,
    /// `None` leaves lookups without a deadline.
    pub request_timeout_secs: Option<u64>,
    pub user_agent: String,
    pub rate_limit_per_minute: usize,
}
