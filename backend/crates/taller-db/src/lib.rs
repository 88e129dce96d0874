pub mod connection;
pub mod error;
pub mod repositories;

pub use connection::pool::{connect, connect_in_memory, run_migrations};
pub use error::{DbError, Result};
pub use repositories::taller_repository::TallerRepository;
pub use repositories::usuario_repository::UsuarioRepository;

pub use sqlx::SqlitePool;
