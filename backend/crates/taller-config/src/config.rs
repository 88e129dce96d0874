use crate::{
    CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult, DEFAULT_CONFIG_DIRECTORY,
    DatabaseConfig, LoggingConfig, ServerConfig, StaticFilesConfig, WebSocketConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
    pub websocket: WebSocketConfig,
    pub static_files: StaticFilesConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. TALLER_CONFIG_DIR env var, else ./.taller/
    /// 2. Create the config directory if missing
    /// 3. Parse config.toml when present, else defaults
    /// 4. Apply TALLER_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Priority: TALLER_CONFIG_DIR env var > ./.taller/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIRECTORY))
    }

    /// Validate all sections. Call after load() to fail fast at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.database.validate()?;
        self.websocket.validate()?;
        self.static_files.validate()?;

        Ok(())
    }

    /// Absolute path to the SQLite file.
    pub fn database_path(&self) -> ConfigErrorResult<PathBuf> {
        let config_dir = Self::config_dir()?;
        Ok(config_dir.join(&self.database.path))
    }

    /// Directory the file logger writes into.
    pub fn log_dir(&self) -> ConfigErrorResult<PathBuf> {
        let config_dir = Self::config_dir()?;
        Ok(config_dir.join(&self.logging.dir))
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);
        info!(
            "  database: {} (max {} connections)",
            self.database.path, self.database.max_connections
        );
        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stdout")
        );
        info!(
            "  websocket: buffer={}, send_latest_on_connect={}",
            self.websocket.send_buffer_size, self.websocket.send_latest_on_connect
        );
        info!("  static_files: {}", self.static_files.dir);
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("TALLER_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("TALLER_SERVER_PORT", &mut self.server.port);

        // Database
        Self::apply_env_string("TALLER_DATABASE_PATH", &mut self.database.path);
        Self::apply_env_parse(
            "TALLER_DATABASE_MAX_CONNECTIONS",
            &mut self.database.max_connections,
        );

        // Logging
        Self::apply_env_parse("TALLER_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_string("TALLER_LOG_DIR", &mut self.logging.dir);
        Self::apply_env_option_string("TALLER_LOG_FILE", &mut self.logging.file);
        Self::apply_env_bool("TALLER_LOG_COLORED", &mut self.logging.colored);

        // WebSocket
        Self::apply_env_parse(
            "TALLER_WS_SEND_BUFFER_SIZE",
            &mut self.websocket.send_buffer_size,
        );
        Self::apply_env_string("TALLER_WS_INITIAL_UID", &mut self.websocket.initial_uid);
        Self::apply_env_bool(
            "TALLER_WS_SEND_LATEST_ON_CONNECT",
            &mut self.websocket.send_latest_on_connect,
        );

        // Static files
        Self::apply_env_string("TALLER_STATIC_DIR", &mut self.static_files.dir);
    }

    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Accepts "true"/"1"; anything else is false
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Unparseable values leave the target untouched
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
