//! Unit tests for the advisor module.
//!
//! Tests are organised by layer, covering request validation, verdict
//! defaults, and service degradation over the stub backend.
