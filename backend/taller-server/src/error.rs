use thiserror::Error;

/// Startup failures. Anything after `axum::serve` is handled per request or per connection.
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] taller_config::ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] taller_db::DbError),

    #[error("Logger error: {message}")]
    Logger { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ServerError>;
