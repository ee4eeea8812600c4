#[derive(Debug, Clone)]
pub struct SearchSettings {
    pub default_limit: usize,
    pub max_limit: usize,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            default_limit: 20,
            max_limit: 1000,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    pub default_path: &'static str,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            default_path: "baseball_roster.db",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub search: SearchSettings,
    pub database: DatabaseSettings,
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }
}

/// DATABASE_PATH env var wins over the configured default
pub fn resolve_database_path(config: &AppConfig) -> String {
    std::env::var("DATABASE_PATH").unwrap_or_else(|_| config.database.default_path.to_string())
}
