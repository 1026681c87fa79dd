//! Unit tests for the action facade.
//!
//! Tests cover the serialised envelope shape and the error-absorption
//! contract over the in-memory repository and the stub backend.
