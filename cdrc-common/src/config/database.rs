use serde::Deserialize;
use url::Url;

/// [database]
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigDatabase {
    pub backend: ConfigDatabaseBackend,
    pub url: Url,

    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    #[serde(default = "default_acquire_timeout_secs")]
    pub acquire_timeout_secs: u64,
}

/// Kind of [database].backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfigDatabaseBackend {
    Mysql,
    Sqlite,
}

fn default_max_connections() -> u32 {
    5
}

fn default_acquire_timeout_secs() -> u64 {
    10
}
