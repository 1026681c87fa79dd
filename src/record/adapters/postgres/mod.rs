//! `PostgreSQL` adapters for maintenance record persistence.

mod models;
mod repository;
mod schema;

pub use repository::{PostgresRecordRepository, RecordPgPool, build_pool};
