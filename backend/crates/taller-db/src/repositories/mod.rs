pub mod taller_repository;
pub mod usuario_repository;
