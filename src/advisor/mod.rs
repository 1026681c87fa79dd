//! Generative task advisory for Bitacora.
//!
//! This module wraps a generative-text backend behind two stateless
//! operations: suggesting maintenance tasks for an equipment type, and
//! classifying whether a task description is relevant to its equipment and
//! software context. Both operations are assistive only and degrade to safe
//! defaults when the backend fails. The module follows hexagonal
//! architecture:
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
