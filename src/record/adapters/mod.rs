//! Adapter implementations for maintenance record persistence.

pub mod memory;
pub mod postgres;
