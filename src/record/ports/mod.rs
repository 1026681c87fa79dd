//! Port contracts for maintenance record keeping.
//!
//! Ports define infrastructure-agnostic interfaces used by record services.

pub mod repository;

pub use repository::{RecordRepository, RecordRepositoryError, RecordRepositoryResult};
