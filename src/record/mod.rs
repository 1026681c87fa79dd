//! Maintenance record keeping for Bitacora.
//!
//! This module persists equipment maintenance records and serves catalog
//! queries: creation with store-assigned identifiers, lookup, ordered
//! listings, partial updates that always refresh the update timestamp, hard
//! deletes, and equality-scoped listings by equipment, technician, or
//! status. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
