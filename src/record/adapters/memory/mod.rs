//! In-memory adapters for maintenance record persistence.

mod record;

pub use record::InMemoryRecordRepository;
