//! Unit tests for the record module.
//!
//! Tests are organised by layer, covering domain invariants, status parsing
//! edge cases, and service orchestration over the in-memory adapter.
