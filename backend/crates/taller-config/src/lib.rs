mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod server_config;
mod static_files_config;
mod websocket_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;
pub use static_files_config::StaticFilesConfig;
pub use websocket_config::WebSocketConfig;

pub const CONFIG_DIR_ENV: &str = "TALLER_CONFIG_DIR";
pub const DEFAULT_CONFIG_DIRECTORY: &str = ".taller";
pub const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const MIN_PORT: u16 = 1024;

const DEFAULT_DATABASE_FILENAME: &str = "taller.db";
const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 10;
const MIN_DATABASE_MAX_CONNECTIONS: u32 = 1;
const MAX_DATABASE_MAX_CONNECTIONS: u32 = 100;

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";

const DEFAULT_SEND_BUFFER_SIZE: usize = 64;
const MIN_SEND_BUFFER_SIZE: usize = 1;
const MAX_SEND_BUFFER_SIZE: usize = 65536;
pub const DEFAULT_INITIAL_UID: &str = "Esperando UID...";

const DEFAULT_STATIC_DIRECTORY: &str = "dist";
