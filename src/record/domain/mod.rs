//! Domain model for maintenance record keeping.
//!
//! The record domain models validated creation drafts, partial update change
//! sets, and the persisted record aggregate while keeping all infrastructure
//! concerns outside of the domain boundary.

mod changes;
mod draft;
mod error;
mod ids;
mod record;
mod status;

pub use changes::RecordChanges;
pub use draft::RecordDraft;
pub use error::{ParseRecordStatusError, RecordDomainError};
pub use ids::RecordId;
pub use record::{MaintenanceRecord, PersistedRecordData};
pub use status::RecordStatus;
