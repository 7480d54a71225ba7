use crate::{ConfigError, ConfigErrorResult, DEFAULT_DATABASE_FILENAME};

use serde::Deserialize;

pub const MIN_DB_CONNECTIONS: u32 = 1;
pub const MAX_DB_CONNECTIONS: u32 = 64;
pub const DEFAULT_DB_CONNECTIONS: u32 = 10;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Database file path, relative to the config directory
    pub path: String,
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: String::from(DEFAULT_DATABASE_FILENAME),
            max_connections: DEFAULT_DB_CONNECTIONS,
        }
    }
}

impl DatabaseConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.max_connections < MIN_DB_CONNECTIONS || self.max_connections > MAX_DB_CONNECTIONS {
            return Err(ConfigError::database(format!(
                "database.max_connections must be {}-{}, got {}",
                MIN_DB_CONNECTIONS, MAX_DB_CONNECTIONS, self.max_connections
            )));
        }

        Ok(())
    }
}
