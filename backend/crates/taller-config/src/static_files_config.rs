use crate::{ConfigError, ConfigErrorResult, DEFAULT_STATIC_DIRECTORY};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StaticFilesConfig {
    /// Prebuilt site served at `/`, relative to the working directory
    pub dir: String,
}

impl Default for StaticFilesConfig {
    fn default() -> Self {
        Self {
            dir: String::from(DEFAULT_STATIC_DIRECTORY),
        }
    }
}

impl StaticFilesConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.dir.trim().is_empty() {
            return Err(ConfigError::static_files("static_files.dir cannot be empty"));
        }

        Ok(())
    }
}
