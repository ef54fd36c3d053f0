//! Database Config

use clap::Args;

/// Product storage settings.
#[derive(Debug, Args)]
pub struct DatabaseConfig {
    /// `PostgreSQL` connection string; products are kept in memory when unset
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Maximum pooled `PostgreSQL` connections
    #[arg(long, env = "DATABASE_MAX_CONNECTIONS", default_value_t = 10_u32)]
    pub database_max_connections: u32,

    /// Keep products in process memory instead of `PostgreSQL`
    #[arg(long, env = "IN_MEMORY_STORAGE", default_value_t = false)]
    pub in_memory: bool,
}

impl DatabaseConfig {
    /// `PostgreSQL` connection string to use, or `None` for in-memory storage.
    pub fn postgres_url(&self) -> Option<&str> {
        self.database_url.as_deref().filter(|_| !self.in_memory)
    }
}
