use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

/// Browser origins allowed to call the API.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec![
                String::from("http://localhost:3000"),
                String::from("http://localhost:8080"),
            ],
        }
    }
}

impl CorsConfig {
    /// A `*` entry anywhere in the list opens the API to any origin.
    pub fn allow_any_origin(&self) -> bool {
        self.allowed_origins.iter().any(|origin| origin == "*")
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.allowed_origins.is_empty() {
            return Err(ConfigError::cors("cors.allowed_origins must not be empty"));
        }

        Ok(())
    }
}
